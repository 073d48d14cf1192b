//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests write problem files into temporary directories and
//! inspect rendered reports. These helpers keep the test cases concise.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use frustration_core::AnalysisReport;
use tempfile::TempDir;

use super::commands::run_analyze;
use super::{AnalyzeCommand, CliError, FormatArg, render_report};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_problem_file(
    dir: &TempDir,
    name: &str,
    contents: &str,
) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// An `analyze` command reading `input` as QMASM with sorted output.
pub(super) fn qmasm_command(input: PathBuf) -> AnalyzeCommand {
    AnalyzeCommand {
        input: Some(input),
        format: FormatArg::Qmasm,
        deterministic: true,
        ..AnalyzeCommand::default()
    }
}

pub(super) fn run_analyze_expecting_error(cmd: AnalyzeCommand, panic_msg: &str) -> CliError {
    match run_analyze(cmd) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn rendered(report: &AnalysisReport) -> String {
    let mut buffer = Vec::new();
    if let Err(err) = render_report(report, &mut buffer) {
        panic!("rendering into memory failed: {err}");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(err) => panic!("report must be UTF-8: {err}"),
    }
}
