//! Unit tests for the spanning-forest partition.

use std::collections::HashSet;

use rstest::rstest;

use crate::graph::{Edge, GraphBuilder, IsingGraph, IterationOrder};

use super::partition_edges;

fn graph(couplers: &[(&str, &str, f64)], isolated: &[&str]) -> IsingGraph {
    let mut builder = GraphBuilder::new();
    for (left, right, weight) in couplers {
        builder
            .add_coupler(*left, *right, *weight)
            .expect("fixture couplers must be valid");
    }
    for vertex in isolated {
        builder.add_vertex(*vertex);
    }
    builder.build()
}

fn assert_is_partition(graph: &IsingGraph, tree: &[Edge], non_tree: &[Edge]) {
    let all: HashSet<&Edge> = graph.edges().map(|(edge, _)| edge).collect();
    let mut seen = HashSet::new();
    for edge in tree.iter().chain(non_tree) {
        assert!(all.contains(edge), "unknown edge {edge}");
        assert!(seen.insert(edge), "edge {edge} classified twice");
    }
    assert_eq!(seen.len(), all.len());
}

#[rstest]
#[case::triangle(&[("0", "1", -1.0), ("1", "2", -1.0), ("0", "2", 1.0)], &[], 1, 1)]
#[case::path(&[("a", "b", 1.0), ("b", "c", 1.0)], &[], 0, 1)]
#[case::two_triangles(
    &[
        ("0", "1", -1.0), ("1", "2", -1.0), ("0", "2", 1.0),
        ("3", "4", -1.0), ("4", "5", -1.0), ("3", "5", -1.0),
    ],
    &[],
    2,
    2,
)]
#[case::isolated_vertices(&[("a", "b", 1.0)], &["x", "y"], 0, 3)]
#[case::square_with_diagonal(
    &[("a", "b", 1.0), ("b", "c", 1.0), ("c", "d", 1.0), ("a", "d", 1.0), ("a", "c", 1.0)],
    &[],
    2,
    1,
)]
fn partition_matches_cyclomatic_number(
    #[case] couplers: &[(&str, &str, f64)],
    #[case] isolated: &[&str],
    #[case] expected_cycles: usize,
    #[case] expected_components: usize,
) {
    let graph = graph(couplers, isolated);
    for order in [IterationOrder::Unordered, IterationOrder::Sorted] {
        let partition = partition_edges(&graph, order);
        assert_is_partition(&graph, partition.tree(), partition.non_tree());
        assert_eq!(partition.component_count(), expected_components);
        assert_eq!(partition.cyclomatic_number(), expected_cycles);
        assert_eq!(
            partition.non_tree().len(),
            graph.edge_count() + partition.component_count() - graph.vertex_count()
        );
    }
}

#[test]
fn sorted_order_is_reproducible() {
    let graph = graph(
        &[
            ("a", "b", 1.0),
            ("b", "c", 1.0),
            ("c", "d", 1.0),
            ("a", "d", 1.0),
            ("a", "c", 1.0),
        ],
        &[],
    );
    let first = partition_edges(&graph, IterationOrder::Sorted);
    let second = partition_edges(&graph, IterationOrder::Sorted);
    assert_eq!(first, second);

    // Sorted order offers (a,b), (a,c), (a,d) first, which already span.
    let non_tree: Vec<String> = first.non_tree().iter().map(ToString::to_string).collect();
    assert_eq!(non_tree, vec!["b c".to_owned(), "c d".to_owned()]);
}

#[test]
fn empty_graph_has_no_components() {
    let partition = partition_edges(&IsingGraph::default(), IterationOrder::Unordered);
    assert!(partition.tree().is_empty());
    assert!(partition.non_tree().is_empty());
    assert_eq!(partition.component_count(), 0);
}
