//! Command-line interface for frustration analysis.
//!
//! The single `analyze` command reads a problem file in one of the supported
//! formats, runs the analyzer, and writes the tagged text report.

mod commands;
mod report;

pub use commands::{
    AnalyzeCommand, Cli, CliError, Command, ExecutionSummary, FormatArg, run_cli, write_report,
};
pub use report::render_report;

#[cfg(test)]
mod test_helpers;
