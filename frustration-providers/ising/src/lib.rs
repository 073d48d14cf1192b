//! Readers for Ising and QUBO problem files.
//!
//! Four formats are understood:
//!
//! - **Qubist**: a header line followed by `u v w` triples.
//! - **QMASM**: `v w` fields, `u v w` couplers, and `u = v` / `u <-> v`
//!   chains, with `#` comments.
//! - **QUBO**: `c` comments, a `p qubo ...` problem line, and `u v w` triples
//!   over 0/1 variables.
//! - **bqpjson**: the JSON interchange format, over either domain.
//!
//! Repeated terms add up. A term naming the same variable twice is a field,
//! never a self-coupler. Problems over 0/1 variables are rewritten as Ising
//! problems before they are returned.

mod bqpjson;
mod errors;
mod format;
mod lines;

use std::io::BufRead;

use frustration_core::IsingGraph;

pub use errors::{IsingFormatError, IsingFormatErrorCode};
pub use format::InputFormat;

/// Reads a graph in `format` from `reader`.
///
/// # Errors
/// Returns [`IsingFormatError`] when the input cannot be read or does not
/// follow the format.
///
/// # Examples
/// ```
/// use frustration_providers_ising::{InputFormat, read_graph};
///
/// let input = "# a frustrated triangle\na b 1\nb c 1\na c -1\nc 0.5\n";
/// let graph = read_graph(InputFormat::Qmasm, input.as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.field("c"), 0.5);
/// # Ok::<(), frustration_providers_ising::IsingFormatError>(())
/// ```
pub fn read_graph<R: BufRead>(
    format: InputFormat,
    reader: R,
) -> Result<IsingGraph, IsingFormatError> {
    match format {
        InputFormat::Qubist => lines::read_qubist(reader),
        InputFormat::Qmasm => lines::read_qmasm(reader),
        InputFormat::Qubo => lines::read_qubo(reader),
        InputFormat::Bqpjson => bqpjson::read_bqpjson(reader),
    }
}

#[cfg(test)]
mod tests;
