//! Per-cycle frustration classification.
//!
//! A coupling is antiferromagnetic when it prefers its endpoints to take
//! opposite spins. Strong external fields on both endpoints override the
//! coupler: when both fields are stronger than the coupler, the coupling
//! counts as antiferromagnetic only if the fields pull in opposite
//! directions. A cycle with an odd number of antiferromagnetic couplings
//! cannot satisfy all of them at once and is frustrated.

use crate::{
    cycles::CyclePath,
    graph::{Edge, IsingGraph},
};

/// Decides whether a single coupling behaves antiferromagnetically.
///
/// # Examples
/// ```
/// use frustration_core::frustration::is_antiferromagnetic;
///
/// assert!(is_antiferromagnetic(1.0, 0.0, 0.0));
/// assert!(!is_antiferromagnetic(-1.0, 0.0, 0.0));
/// // Fields stronger than the coupler take over.
/// assert!(is_antiferromagnetic(-1.0, 2.0, -3.0));
/// assert!(!is_antiferromagnetic(1.0, 2.0, 3.0));
/// ```
#[must_use]
pub fn is_antiferromagnetic(coupler: f64, field_u: f64, field_v: f64) -> bool {
    let strength = coupler.abs();
    if field_u.abs() > strength && field_v.abs() > strength {
        (field_u > 0.0 && field_v < 0.0) || (field_u < 0.0 && field_v > 0.0)
    } else {
        coupler > 0.0
    }
}

/// Counts the antiferromagnetic couplings along `cycle`, closing edge
/// included. Missing couplers count as zero.
#[must_use]
pub fn antiferromagnetic_count(graph: &IsingGraph, cycle: &CyclePath) -> usize {
    cycle
        .edges()
        .filter(|edge| coupling_is_antiferromagnetic(graph, edge))
        .count()
}

/// Returns `true` when `cycle` has an odd number of antiferromagnetic
/// couplings.
///
/// # Examples
/// ```
/// use frustration_core::{CyclePath, GraphBuilder, VertexId, frustration::is_frustrated};
///
/// let mut builder = GraphBuilder::new();
/// builder
///     .add_coupler("a", "b", 1.0)?
///     .add_coupler("b", "c", -1.0)?
///     .add_coupler("a", "c", -1.0)?;
/// let graph = builder.build();
/// let cycle = CyclePath::new(["a", "b", "c"].map(VertexId::new).to_vec())?;
/// assert!(is_frustrated(&graph, &cycle));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[must_use]
pub fn is_frustrated(graph: &IsingGraph, cycle: &CyclePath) -> bool {
    antiferromagnetic_count(graph, cycle) % 2 == 1
}

fn coupling_is_antiferromagnetic(graph: &IsingGraph, edge: &Edge) -> bool {
    is_antiferromagnetic(
        graph.coupler(edge),
        graph.field(edge.low().as_str()),
        graph.field(edge.high().as_str()),
    )
}
