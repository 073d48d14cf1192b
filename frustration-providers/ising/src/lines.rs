//! Line-oriented readers: Qubist, QMASM and QUBO.

use std::io::BufRead;

use frustration_core::{GraphBuilder, IsingGraph};

use crate::{errors::IsingFormatError, format::InputFormat};

const TRIPLE: &str = "`u v weight`";
const PROBLEM_LINE: &str = "`p qubo <topology> <max nodes> <nodes> <couplers>`";

/// Reads a Qubist file. The first line is a header and is skipped.
pub(crate) fn read_qubist<R: BufRead>(reader: R) -> Result<IsingGraph, IsingFormatError> {
    let mut lines = reader.lines();
    match lines.next() {
        Some(header) => {
            header?;
        }
        None => {
            return Err(IsingFormatError::MissingHeader {
                format: InputFormat::Qubist,
            });
        }
    }

    let mut builder = GraphBuilder::new();
    for (offset, raw) in lines.enumerate() {
        let text = raw?;
        let line = offset + 2;
        match fields(&text).as_slice() {
            [] => {}
            [u, v, weight] => add_term(&mut builder, line, u, v, parse_weight(line, weight)?)?,
            _ => return Err(malformed(InputFormat::Qubist, line, &text, TRIPLE)),
        }
    }
    Ok(builder.build())
}

/// Reads a QMASM file. `!` directives and lines with field counts other than
/// two or three are not interpreted and are skipped.
pub(crate) fn read_qmasm<R: BufRead>(reader: R) -> Result<IsingGraph, IsingFormatError> {
    let mut builder = GraphBuilder::new();
    for (index, raw) in reader.lines().enumerate() {
        let text = raw?;
        let line = index + 1;
        let code = text.split_once('#').map_or(text.as_str(), |(code, _)| code);
        match fields(code).as_slice() {
            [directive, ..] if directive.starts_with('!') => {}
            [vertex, weight] => {
                let value = parse_weight(line, weight)?;
                builder
                    .add_field(*vertex, value)
                    .map_err(|error| IsingFormatError::graph(format!("line {line}"), error))?;
            }
            // Chains and aliases pull both ends towards the same spin.
            [u, "=" | "<->", v] => add_term(&mut builder, line, u, v, -1.0)?,
            [u, v, weight] => add_term(&mut builder, line, u, v, parse_weight(line, weight)?)?,
            _ => {}
        }
    }
    Ok(builder.build())
}

/// Reads a QUBO file and converts it to an Ising problem.
pub(crate) fn read_qubo<R: BufRead>(reader: R) -> Result<IsingGraph, IsingFormatError> {
    let mut builder = GraphBuilder::new();
    for (index, raw) in reader.lines().enumerate() {
        let text = raw?;
        let line = index + 1;
        match fields(&text).as_slice() {
            [] | ["c", ..] => {}
            // The declared sizes are not checked against the body.
            ["p", "qubo", _, _, _, _] => {}
            ["p", ..] => return Err(malformed(InputFormat::Qubo, line, &text, PROBLEM_LINE)),
            [u, v, weight] => add_term(&mut builder, line, u, v, parse_weight(line, weight)?)?,
            _ => return Err(malformed(InputFormat::Qubo, line, &text, TRIPLE)),
        }
    }
    builder.qubo_to_ising();
    Ok(builder.build())
}

fn fields(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

fn parse_weight(line: usize, token: &str) -> Result<f64, IsingFormatError> {
    token
        .parse::<f64>()
        .map_err(|source| IsingFormatError::InvalidWeight {
            line,
            token: token.to_owned(),
            source,
        })
}

/// Adds a `u v weight` term: a field when both names match, a coupler
/// otherwise.
fn add_term(
    builder: &mut GraphBuilder,
    line: usize,
    u: &str,
    v: &str,
    weight: f64,
) -> Result<(), IsingFormatError> {
    let added = if u == v {
        builder.add_field(u, weight)
    } else {
        builder.add_coupler(u, v, weight)
    };
    added
        .map(|_| ())
        .map_err(|error| IsingFormatError::graph(format!("line {line}"), error))
}

fn malformed(
    format: InputFormat,
    line: usize,
    text: &str,
    expected: &'static str,
) -> IsingFormatError {
    IsingFormatError::MalformedLine {
        format,
        line,
        content: text.trim().to_owned(),
        expected,
    }
}
