//! CLI entry point for `find-frustration`.
//!
//! Parses command-line arguments with clap, analyses the requested problem
//! file, writes the tagged report, and maps errors to exit codes. Logging is
//! initialised first so every later step can emit structured diagnostics via
//! `tracing`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use frustration_cli::{
    cli::{Cli, CliError, run_cli, write_report},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command and write the report.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    write_report(&summary).context("failed to emit report")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let cli_error = err.downcast_ref::<CliError>();
        let code = cli_error.map(|cli_error| field::display(cli_error.code()));
        let (cycle_code, enumeration_code) = match cli_error {
            Some(CliError::Core(core)) => (core.cycle_code(), core.enumeration_code()),
            _ => (None, None),
        };

        error!(
            error = %err,
            code,
            cycle_code = cycle_code.map(|code| field::display(code.as_str())),
            enumeration_code = enumeration_code.map(|code| field::display(code.as_str())),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
