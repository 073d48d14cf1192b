//! Property tests for the cycle pipeline.
//!
//! Random small graphs are pushed through partitioning, basis extraction and
//! Gibbs enumeration, and the results are checked against a brute-force
//! simple-cycle oracle. Weighted variants check that verdicts and tallies
//! hold for every cycle the enumeration produces.

use std::collections::{BTreeSet, HashMap, HashSet};

use proptest::prelude::*;

use crate::{
    frustration,
    graph::{Edge, GraphBuilder, IsingGraph, IterationOrder, VertexId},
    spanning::partition_edges,
    statistics::{FrustrationStatistics, Ratio},
    test_utils::suite_proptest_config,
};

use super::{CyclePath, EdgeSet, basis::fundamental_cycles, codec, gibbs::GibbsEnumerator};

const MAX_VERTICES: usize = 6;

/// Graphs on three to six vertices with an arbitrary subset of the possible
/// edges.
fn small_graph() -> impl Strategy<Value = IsingGraph> {
    (3..=MAX_VERTICES)
        .prop_flat_map(|vertices| {
            let pairs = vertices * (vertices - 1) / 2;
            (Just(vertices), prop::collection::vec(any::<bool>(), pairs))
        })
        .prop_map(|(vertices, mask)| {
            let names: Vec<String> = (0..vertices).map(|index| format!("v{index}")).collect();
            let mut builder = GraphBuilder::new();
            for name in &names {
                builder.add_vertex(name.as_str());
            }
            let pairs = (0..vertices)
                .flat_map(|low| (low + 1..vertices).map(move |high| (low, high)));
            for ((low, high), keep) in pairs.zip(mask) {
                if keep {
                    builder
                        .add_coupler(names[low].as_str(), names[high].as_str(), 1.0)
                        .expect("generated endpoints differ");
                }
            }
            builder.build()
        })
}

/// Like [`small_graph`], with couplers and fields drawn from `[-2, 2)`.
fn weighted_graph() -> impl Strategy<Value = IsingGraph> {
    (3..=MAX_VERTICES)
        .prop_flat_map(|vertices| {
            let pairs = vertices * (vertices - 1) / 2;
            (
                Just(vertices),
                prop::collection::vec(proptest::option::of(-2.0..2.0_f64), pairs),
                prop::collection::vec(-2.0..2.0_f64, vertices),
            )
        })
        .prop_map(|(vertices, couplers, fields)| {
            let names: Vec<String> = (0..vertices).map(|index| format!("v{index}")).collect();
            let mut builder = GraphBuilder::new();
            for (name, field) in names.iter().zip(fields) {
                builder
                    .add_field(name.as_str(), field)
                    .expect("generated fields are finite");
            }
            let pairs = (0..vertices)
                .flat_map(|low| (low + 1..vertices).map(move |high| (low, high)));
            for ((low, high), weight) in pairs.zip(couplers) {
                if let Some(weight) = weight {
                    builder
                        .add_coupler(names[low].as_str(), names[high].as_str(), weight)
                        .expect("generated endpoints differ");
                }
            }
            builder.build()
        })
}

fn adjacency(graph: &IsingGraph) -> HashMap<&VertexId, Vec<&VertexId>> {
    let mut adjacency: HashMap<&VertexId, Vec<&VertexId>> =
        graph.vertices().map(|(vertex, _)| (vertex, Vec::new())).collect();
    for (edge, _) in graph.edges() {
        adjacency.entry(edge.low()).or_default().push(edge.high());
        adjacency.entry(edge.high()).or_default().push(edge.low());
    }
    adjacency
}

fn component_count(graph: &IsingGraph) -> usize {
    let adjacency = adjacency(graph);
    let mut seen: HashSet<&VertexId> = HashSet::new();
    let mut components = 0;
    for &start in adjacency.keys() {
        if !seen.insert(start) {
            continue;
        }
        components += 1;
        let mut frontier = vec![start];
        while let Some(vertex) = frontier.pop() {
            for &next in &adjacency[vertex] {
                if seen.insert(next) {
                    frontier.push(next);
                }
            }
        }
    }
    components
}

/// Every simple cycle of `graph`, found by walking paths from each vertex
/// through larger vertices only.
fn brute_force_cycles(graph: &IsingGraph) -> BTreeSet<EdgeSet> {
    let adjacency = adjacency(graph);
    let mut found = BTreeSet::new();
    for &start in adjacency.keys() {
        let mut walk = vec![start.clone()];
        extend_walk(&adjacency, start, &mut walk, &mut found);
    }
    found
}

fn extend_walk(
    adjacency: &HashMap<&VertexId, Vec<&VertexId>>,
    start: &VertexId,
    walk: &mut Vec<VertexId>,
    found: &mut BTreeSet<EdgeSet>,
) {
    let Some(tail) = walk.last().cloned() else {
        return;
    };
    for &next in &adjacency[&tail] {
        if next == start && walk.len() >= 3 {
            let cycle = CyclePath::new(walk.clone()).expect("walk has no repeats");
            found.insert(EdgeSet::from_path(&cycle));
        } else if next > start && !walk.contains(next) {
            walk.push(next.clone());
            extend_walk(adjacency, start, walk, found);
            walk.pop();
        }
    }
}

fn elementary_cycles(graph: &IsingGraph) -> (Vec<CyclePath>, Vec<EdgeSet>) {
    let partition = partition_edges(graph, IterationOrder::Sorted);
    let basis = fundamental_cycles(&partition).expect("forest connects every non-tree edge");
    let sets: Vec<EdgeSet> = basis.iter().map(EdgeSet::from_path).collect();
    let elementary = GibbsEnumerator::new()
        .enumerate(&sets)
        .expect("unbounded enumeration succeeds");
    (basis, elementary)
}

fn elementary_walks(graph: &IsingGraph) -> Vec<CyclePath> {
    let (_, elementary) = elementary_cycles(graph);
    elementary
        .iter()
        .map(|set| set.to_path().expect("elementary cycles decode"))
        .collect()
}

fn graph_edges(graph: &IsingGraph) -> HashSet<&Edge> {
    graph.edges().map(|(edge, _)| edge).collect()
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn basis_size_is_the_cyclomatic_number(graph in small_graph()) {
        let partition = partition_edges(&graph, IterationOrder::Unordered);
        let basis = fundamental_cycles(&partition).expect("basis extraction succeeds");
        let expected = graph.edge_count() + component_count(&graph) - graph.vertex_count();
        prop_assert_eq!(basis.len(), expected);
        prop_assert_eq!(partition.cyclomatic_number(), expected);
        prop_assert_eq!(partition.component_count(), component_count(&graph));
    }

    #[test]
    fn basic_cycles_are_simple_graph_cycles(graph in small_graph()) {
        let edges = graph_edges(&graph);
        let partition = partition_edges(&graph, IterationOrder::Unordered);
        for cycle in fundamental_cycles(&partition).expect("basis extraction succeeds") {
            prop_assert!(CyclePath::new(cycle.vertices().to_vec()).is_ok());
            prop_assert!(cycle.edges().all(|edge| edges.contains(&edge)));
        }
    }

    #[test]
    fn enumeration_matches_brute_force(graph in small_graph()) {
        let (basis, elementary) = elementary_cycles(&graph);
        let found: BTreeSet<EdgeSet> = elementary.iter().cloned().collect();
        prop_assert_eq!(found.len(), elementary.len(), "enumeration returned duplicates");
        for cycle in &basis {
            prop_assert!(found.contains(&EdgeSet::from_path(cycle)));
        }
        prop_assert_eq!(found, brute_force_cycles(&graph));
    }

    #[test]
    fn enumerated_cycles_round_trip_through_the_codec(graph in small_graph()) {
        let (_, elementary) = elementary_cycles(&graph);
        for set in elementary {
            let walk = codec::edges_to_path(&set).expect("elementary cycles decode");
            prop_assert_eq!(walk.len(), set.len());
            prop_assert_eq!(EdgeSet::from_path(&walk), set);
        }
    }

    #[test]
    fn verdict_ignores_direction_and_start(graph in weighted_graph()) {
        for walk in elementary_walks(&graph) {
            let verdict = frustration::is_frustrated(&graph, &walk);
            let count = frustration::antiferromagnetic_count(&graph, &walk);
            let reversed = walk.reversed();
            prop_assert_eq!(frustration::is_frustrated(&graph, &reversed), verdict);
            prop_assert_eq!(frustration::antiferromagnetic_count(&graph, &reversed), count);

            for shift in 1..walk.len() {
                let mut rotated = walk.vertices().to_vec();
                rotated.rotate_left(shift);
                let rotated = CyclePath::new(rotated).expect("rotation keeps the walk simple");
                prop_assert_eq!(frustration::is_frustrated(&graph, &rotated), verdict);
            }
        }
    }

    #[test]
    fn tallies_put_each_element_in_one_category(
        graph in weighted_graph(),
        sorted in any::<bool>(),
    ) {
        let walks = elementary_walks(&graph);
        let order = if sorted {
            IterationOrder::Sorted
        } else {
            IterationOrder::Unordered
        };
        let stats = FrustrationStatistics::tally(&graph, walks.clone(), order);

        let on_cycle: HashSet<&VertexId> = walks.iter().flat_map(CyclePath::vertices).collect();
        prop_assert_eq!(stats.vertex_tallies().len(), on_cycle.len());
        prop_assert_eq!(
            stats.frustrated_vertices().count() + stats.unfrustrated_vertices().count(),
            on_cycle.len()
        );
        for (vertex, tally) in stats.vertex_tallies() {
            let through: Vec<bool> = stats
                .cycles()
                .iter()
                .filter(|cycle| cycle.path().vertices().contains(vertex))
                .map(|cycle| cycle.is_frustrated())
                .collect();
            prop_assert_eq!(tally.total(), through.len());
            prop_assert_eq!(tally.frustrated(), through.iter().filter(|&&hit| hit).count());
            let frustrated = stats.frustrated_vertices().any(|(other, _)| other == vertex);
            let unfrustrated = stats.unfrustrated_vertices().any(|(other, _)| other == vertex);
            prop_assert!(frustrated != unfrustrated, "vertex {} in both or neither", vertex);
        }

        let on_cycle: HashSet<Edge> = walks.iter().flat_map(CyclePath::edges).collect();
        prop_assert_eq!(stats.edge_tallies().len(), on_cycle.len());
        for (edge, tally) in stats.edge_tallies() {
            let through = stats
                .cycles()
                .iter()
                .filter(|cycle| cycle.path().edges().any(|other| other == *edge))
                .count();
            prop_assert_eq!(tally.total(), through);
            let frustrated = stats.frustrated_edges().any(|(other, _)| other == edge);
            let unfrustrated = stats.unfrustrated_edges().any(|(other, _)| other == edge);
            prop_assert!(frustrated != unfrustrated, "edge {} in both or neither", edge);
        }

        let frustrated_cycles = stats
            .cycles()
            .iter()
            .filter(|cycle| cycle.is_frustrated())
            .count();
        prop_assert_eq!(stats.cycle_ratio(), Ratio::new(frustrated_cycles, walks.len()));
        prop_assert_eq!(
            stats.vertex_ratio(),
            Ratio::new(stats.frustrated_vertices().count(), graph.vertex_count())
        );
    }
}
