//! bqpjson reader.
//!
//! Only the fields needed to rebuild the problem graph are decoded; the rest
//! of the document (metadata, solutions, version) is ignored.

use std::io::BufRead;

use frustration_core::{GraphBuilder, IsingGraph};
use serde::Deserialize;

use crate::errors::IsingFormatError;

#[derive(Debug, Deserialize)]
struct Document {
    variable_domain: String,
    scale: f64,
    offset: f64,
    #[serde(default)]
    linear_terms: Vec<LinearTerm>,
    #[serde(default)]
    quadratic_terms: Vec<QuadraticTerm>,
}

#[derive(Debug, Deserialize)]
struct LinearTerm {
    id: i64,
    coeff: f64,
}

#[derive(Debug, Deserialize)]
struct QuadraticTerm {
    id_tail: i64,
    id_head: i64,
    coeff: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Domain {
    Spin,
    Boolean,
}

impl Document {
    fn domain(&self) -> Result<Domain, IsingFormatError> {
        match self.variable_domain.as_str() {
            "spin" => Ok(Domain::Spin),
            "boolean" => Ok(Domain::Boolean),
            other => Err(IsingFormatError::UnknownVariableDomain {
                domain: other.to_owned(),
            }),
        }
    }
}

/// Reads a bqpjson document. Every accumulated weight `w` becomes
/// `w * scale + offset`; boolean problems are then rewritten as Ising
/// problems.
pub(crate) fn read_bqpjson<R: BufRead>(reader: R) -> Result<IsingGraph, IsingFormatError> {
    let document: Document = serde_json::from_reader(reader)?;
    let domain = document.domain()?;

    let mut builder = GraphBuilder::new();
    for (index, term) in document.linear_terms.iter().enumerate() {
        builder
            .add_field(term.id.to_string(), term.coeff)
            .map_err(|error| IsingFormatError::graph(format!("linear term {index}"), error))?;
    }
    for (index, term) in document.quadratic_terms.iter().enumerate() {
        let tail = term.id_tail.to_string();
        let head = term.id_head.to_string();
        let added = if tail == head {
            builder.add_field(tail, term.coeff)
        } else {
            builder.add_coupler(tail, head, term.coeff)
        };
        added.map_err(|error| IsingFormatError::graph(format!("quadratic term {index}"), error))?;
    }

    let (scale, offset) = (document.scale, document.offset);
    builder
        .map_weights(|weight| weight.mul_add(scale, offset))
        .map_err(|error| IsingFormatError::graph("scaled weights", error))?;
    if domain == Domain::Boolean {
        builder.qubo_to_ising();
    }
    Ok(builder.build())
}
