//! Spanning-forest partition of a graph's edges.
//!
//! Edges are offered one at a time to a disjoint-set forest over the vertices.
//! An edge whose endpoints already share a set closes a cycle and becomes a
//! non-tree edge; every other edge merges two sets and joins the spanning
//! forest. Any visiting order yields a valid forest, but which forest (and so
//! which basic cycles) depends on that order.

mod union_find;

use std::collections::HashMap;

use tracing::{debug, instrument};

use crate::graph::{Edge, IsingGraph, IterationOrder, VertexId};

use self::union_find::DisjointSet;

/// Tree and non-tree edges of a spanning forest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgePartition {
    tree: Vec<Edge>,
    non_tree: Vec<Edge>,
    component_count: usize,
}

impl EdgePartition {
    /// Edges of the spanning forest, in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &[Edge] { &self.tree }

    /// Edges left out of the forest, in discovery order. Each closes exactly
    /// one basic cycle.
    #[must_use]
    #[rustfmt::skip]
    pub fn non_tree(&self) -> &[Edge] { &self.non_tree }

    /// Number of connected components of the graph.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Cyclomatic number `|E| - |V| + components`, i.e. the size of any
    /// cycle basis.
    #[must_use]
    pub fn cyclomatic_number(&self) -> usize {
        self.non_tree.len()
    }
}

/// Splits the graph's edges into a spanning forest and the remaining edges.
///
/// # Examples
/// ```
/// use frustration_core::{GraphBuilder, IterationOrder, partition_edges};
///
/// let mut builder = GraphBuilder::new();
/// builder
///     .add_coupler("0", "1", -1.0)?
///     .add_coupler("1", "2", -1.0)?
///     .add_coupler("0", "2", 1.0)?;
/// let partition = partition_edges(&builder.build(), IterationOrder::Sorted);
/// assert_eq!(partition.tree().len(), 2);
/// assert_eq!(partition.non_tree().len(), 1);
/// assert_eq!(partition.component_count(), 1);
/// # Ok::<(), frustration_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "core.partition",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn partition_edges(graph: &IsingGraph, order: IterationOrder) -> EdgePartition {
    let index: HashMap<&VertexId, usize> = graph
        .vertices()
        .enumerate()
        .map(|(position, (vertex, _))| (vertex, position))
        .collect();
    let mut sets = DisjointSet::new(index.len());
    let mut tree = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    let mut non_tree = Vec::new();

    for edge in graph.ordered_edges(order) {
        // Builder invariant: both endpoints are registered vertices.
        let (Some(&low), Some(&high)) = (index.get(edge.low()), index.get(edge.high())) else {
            continue;
        };
        if sets.union(low, high) {
            tree.push(edge.clone());
        } else {
            non_tree.push(edge.clone());
        }
    }

    let partition = EdgePartition {
        tree,
        non_tree,
        component_count: sets.sets(),
    };
    debug!(
        tree_edges = partition.tree.len(),
        non_tree_edges = partition.non_tree.len(),
        components = partition.component_count,
        "spanning forest built"
    );
    partition
}

#[cfg(test)]
mod tests;
