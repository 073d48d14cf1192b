//! Command implementations and argument parsing for `find-frustration`.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand, ValueEnum};
use frustration_core::{
    AnalysisReport, AnalyzerBuilder, EnumerationLimits, FrustrationError, IterationOrder,
};
use frustration_providers_ising::{InputFormat, IsingFormatError, read_graph};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::report::render_report;

const STDIN_LABEL: &str = "<stdin>";
const STDOUT_LABEL: &str = "<stdout>";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "find-frustration",
    about = "Report frustrated cycles, edges and vertices in an Ising problem."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Analyse the cycles of a problem graph for frustration.
    Analyze(AnalyzeCommand),
}

/// Options accepted by the `analyze` command.
#[derive(Debug, Args, Clone, Default)]
pub struct AnalyzeCommand {
    /// Problem file to read. Standard input is used when omitted.
    pub input: Option<PathBuf>,

    /// Format of the problem file.
    #[arg(short = 'f', long, value_enum, default_value_t = FormatArg::Qubist)]
    pub format: FormatArg,

    /// Write the report to this file instead of standard output.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Analyse every elementary cycle instead of only the basic cycles.
    #[arg(long)]
    pub all_cycles: bool,

    /// Sort edges and report entries so repeated runs match exactly.
    #[arg(long)]
    pub deterministic: bool,

    /// Worker threads used for elementary-cycle enumeration.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub workers: Option<usize>,

    /// Abort enumeration once more than this many elementary cycles exist.
    #[arg(long)]
    pub max_cycles: Option<NonZeroUsize>,

    /// Abort enumeration after this many seconds.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

/// Input formats accepted on the command line.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    /// Qubist: a header line followed by `u v w` triples.
    #[default]
    Qubist,
    /// QMASM assembly source.
    Qmasm,
    /// QUBO `p qubo` files over 0/1 variables.
    Qubo,
    /// bqpjson documents.
    Bqpjson,
}

impl From<FormatArg> for InputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Qubist => Self::Qubist,
            FormatArg::Qmasm => Self::Qmasm,
            FormatArg::Qubo => Self::Qubo,
            FormatArg::Bqpjson => Self::Bqpjson,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The problem file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The report could not be written.
    #[error("failed to write report to `{destination}`: {source}")]
    Write {
        /// Output file, or `<stdout>`.
        destination: String,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The problem file could not be parsed.
    #[error("failed to read {source_name}: {error}")]
    Format {
        /// Input file, or `<stdin>`.
        source_name: String,
        /// Parser failure.
        #[source]
        error: IsingFormatError,
    },
    /// Analysis failed.
    #[error(transparent)]
    Core(#[from] FrustrationError),
}

impl CliError {
    /// Stable machine-readable code of the underlying failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "INPUT_IO",
            Self::Write { .. } => "OUTPUT_IO",
            Self::Format { error, .. } => error.code().as_str(),
            Self::Core(error) => error.code().as_str(),
        }
    }
}

/// Outcome of one `analyze` invocation.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Where the problem was read from.
    pub source: String,
    /// Report destination; standard output when `None`.
    pub output: Option<PathBuf>,
    /// Analysis results.
    pub report: AnalysisReport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading the input or analysing it fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use frustration_cli::cli::{AnalyzeCommand, Cli, Command, FormatArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "a b 1\nb c 1\na c 1\n")?;
/// let cli = Cli {
///     command: Command::Analyze(AnalyzeCommand {
///         input: Some(file.path().to_path_buf()),
///         format: FormatArg::Qmasm,
///         ..AnalyzeCommand::default()
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.basic_cycle_count(), 1);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Analyze(analyze) => {
            Span::current().record("command", field::display("analyze"));
            run_analyze(analyze)
        }
    }
}

#[instrument(
    name = "cli.analyze",
    err,
    skip(command),
    fields(
        source = field::Empty,
        format = field::Empty,
        all_cycles = field::Empty,
        deterministic = field::Empty,
    ),
)]
pub(super) fn run_analyze(command: AnalyzeCommand) -> Result<ExecutionSummary, CliError> {
    let AnalyzeCommand {
        input,
        format,
        output,
        all_cycles,
        deterministic,
        workers,
        max_cycles,
        timeout_secs,
    } = command;

    let mut builder = AnalyzerBuilder::new()
        .with_elementary_cycles(all_cycles)
        .with_iteration_order(iteration_order(deterministic))
        .with_limits(enumeration_limits(max_cycles, timeout_secs));
    if let Some(workers) = workers {
        builder = builder.with_workers(workers);
    }
    let analyzer = builder.build()?;

    let format = InputFormat::from(format);
    let source = input.as_deref().map_or_else(
        || STDIN_LABEL.to_owned(),
        |path| path.display().to_string(),
    );
    let span = Span::current();
    span.record("source", field::display(&source));
    span.record("format", field::display(format));
    span.record("all_cycles", all_cycles);
    span.record("deterministic", deterministic);

    let graph = match input.as_deref() {
        Some(path) => read_graph(format, open_input(path)?),
        None => read_graph(format, io::stdin().lock()),
    }
    .map_err(|error| CliError::Format {
        source_name: source.clone(),
        error,
    })?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "problem graph loaded"
    );

    let report = analyzer.analyze(&graph)?;
    info!(
        basic_cycles = report.basic_cycle_count(),
        acyclic = report.is_acyclic(),
        "command completed"
    );
    Ok(ExecutionSummary {
        source,
        output,
        report,
    })
}

/// Writes the report in `summary` to its output file, or to standard output.
///
/// # Errors
/// Returns [`CliError::Write`] when the destination cannot be created or
/// written.
#[instrument(
    name = "cli.write_report",
    err,
    skip(summary),
    fields(destination = field::Empty),
)]
pub fn write_report(summary: &ExecutionSummary) -> Result<(), CliError> {
    let destination = summary
        .output
        .as_deref()
        .map_or_else(|| STDOUT_LABEL.to_owned(), |path| path.display().to_string());
    Span::current().record("destination", field::display(&destination));

    let written = match summary.output.as_deref() {
        Some(path) => File::create(path)
            .and_then(|file| flush_report(&summary.report, BufWriter::new(file))),
        None => flush_report(&summary.report, BufWriter::new(io::stdout().lock())),
    };
    written.map_err(|source| CliError::Write {
        destination,
        source,
    })
}

fn flush_report(report: &AnalysisReport, mut writer: impl Write) -> io::Result<()> {
    render_report(report, &mut writer)?;
    writer.flush()
}

#[instrument(name = "cli.open_input", err, fields(path = field::Empty))]
pub(super) fn open_input(path: &Path) -> Result<impl BufRead, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) const fn iteration_order(deterministic: bool) -> IterationOrder {
    if deterministic {
        IterationOrder::Sorted
    } else {
        IterationOrder::Unordered
    }
}

pub(super) fn enumeration_limits(
    max_cycles: Option<NonZeroUsize>,
    timeout_secs: Option<u64>,
) -> EnumerationLimits {
    let mut limits = EnumerationLimits::unbounded();
    if let Some(max) = max_cycles {
        limits = limits.with_max_cycles(max);
    }
    if let Some(secs) = timeout_secs {
        limits = limits.with_deadline(Duration::from_secs(secs));
    }
    limits
}
