//! Fundamental cycle extraction over a spanning forest.
//!
//! A forest has exactly one simple path between any two vertices of the same
//! tree, so the basic cycle closed by a non-tree edge `(u, v)` is that path
//! from `u` to `v` plus the edge itself. The path search is an iterative
//! depth-first walk with an explicit stack, so deep trees cannot exhaust the
//! call stack.

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::{
    error::CycleError,
    graph::{Edge, VertexId},
    spanning::EdgePartition,
};

use super::CyclePath;

type Adjacency<'a> = HashMap<&'a VertexId, Vec<&'a VertexId>>;

/// Builds one basic cycle per non-tree edge of `partition`, in the order the
/// non-tree edges were discovered.
///
/// # Errors
/// Returns [`CycleError::MissingTreePath`] if the forest does not connect the
/// endpoints of a non-tree edge. A partition produced by
/// [`crate::partition_edges`] always connects them.
///
/// # Examples
/// ```
/// use frustration_core::{
///     GraphBuilder, IterationOrder, cycles::basis::fundamental_cycles, partition_edges,
/// };
///
/// let mut builder = GraphBuilder::new();
/// builder
///     .add_coupler("a", "b", 1.0)?
///     .add_coupler("b", "c", 1.0)?
///     .add_coupler("c", "d", 1.0)?
///     .add_coupler("a", "d", 1.0)?;
/// let partition = partition_edges(&builder.build(), IterationOrder::Sorted);
/// let cycles = fundamental_cycles(&partition)?;
/// assert_eq!(cycles.len(), 1);
/// assert_eq!(cycles[0].len(), 4);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.fundamental_cycles",
    err,
    skip(partition),
    fields(tree_edges = partition.tree().len(), non_tree_edges = partition.non_tree().len()),
)]
pub fn fundamental_cycles(partition: &EdgePartition) -> Result<Vec<CyclePath>, CycleError> {
    let adjacency = tree_adjacency(partition.tree());
    let cycles = partition
        .non_tree()
        .iter()
        .map(|edge| {
            tree_path(&adjacency, edge.low(), edge.high())
                .map(CyclePath::from_walk)
                .ok_or_else(|| CycleError::MissingTreePath {
                    start: edge.low().clone(),
                    end: edge.high().clone(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    debug!(basic_cycles = cycles.len(), "fundamental cycles extracted");
    Ok(cycles)
}

fn tree_adjacency(tree: &[Edge]) -> Adjacency<'_> {
    let mut adjacency: Adjacency<'_> = HashMap::with_capacity(tree.len().saturating_add(1));
    for edge in tree {
        adjacency.entry(edge.low()).or_default().push(edge.high());
        adjacency.entry(edge.high()).or_default().push(edge.low());
    }
    adjacency
}

/// Finds the unique tree path from `start` to `goal`, both included.
fn tree_path(
    adjacency: &Adjacency<'_>,
    start: &VertexId,
    goal: &VertexId,
) -> Option<Vec<VertexId>> {
    let mut visited: HashSet<&VertexId> = HashSet::from([start]);
    // Each frame holds a vertex on the current path and the index of the next
    // neighbour to try from it.
    let mut stack: Vec<(&VertexId, usize)> = vec![(start, 0)];

    while let Some(&(vertex, cursor)) = stack.last() {
        if vertex == goal {
            return Some(stack.iter().map(|(step, _)| (*step).clone()).collect());
        }
        let next = adjacency
            .get(vertex)
            .and_then(|neighbours| neighbours.get(cursor))
            .copied();
        match next {
            Some(neighbour) => {
                if let Some(frame) = stack.last_mut() {
                    frame.1 = cursor.saturating_add(1);
                }
                if visited.insert(neighbour) {
                    stack.push((neighbour, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::graph::{Edge, VertexId};

    use super::{tree_adjacency, tree_path};

    fn edge(left: &str, right: &str) -> Edge {
        Edge::new(VertexId::new(left), VertexId::new(right)).expect("endpoints must differ")
    }

    fn names(path: &[VertexId]) -> Vec<&str> {
        path.iter().map(VertexId::as_str).collect()
    }

    #[rstest]
    #[case::adjacent("a", "b", &["a", "b"])]
    #[case::through_hub("c", "e", &["c", "b", "d", "e"])]
    #[case::leaf_to_leaf("a", "e", &["a", "b", "d", "e"])]
    #[case::reverse("e", "a", &["e", "d", "b", "a"])]
    fn finds_unique_tree_path(#[case] from: &str, #[case] to: &str, #[case] expected: &[&str]) {
        // a - b - d - e with c hanging off b.
        let tree = [edge("a", "b"), edge("b", "c"), edge("b", "d"), edge("d", "e")];
        let adjacency = tree_adjacency(&tree);
        let path = tree_path(&adjacency, &VertexId::new(from), &VertexId::new(to))
            .expect("tree must connect the endpoints");
        assert_eq!(names(&path), expected);
    }

    #[test]
    fn reports_missing_path_across_trees() {
        let tree = [edge("a", "b"), edge("x", "y")];
        let adjacency = tree_adjacency(&tree);
        assert!(tree_path(&adjacency, &VertexId::new("a"), &VertexId::new("y")).is_none());
    }

    #[test]
    fn handles_deep_paths_without_recursion() {
        let names: Vec<String> = (0..20_000).map(|index| format!("v{index:05}")).collect();
        let tree: Vec<Edge> = names
            .windows(2)
            .map(|pair| match pair {
                [left, right] => edge(left, right),
                _ => unreachable!("windows(2) yields pairs"),
            })
            .collect();
        let adjacency = tree_adjacency(&tree);
        let start = VertexId::new(&names[0]);
        let goal = VertexId::new(&names[names.len() - 1]);
        let path = tree_path(&adjacency, &start, &goal).expect("chain must connect its ends");
        assert_eq!(path.len(), names.len());
    }
}
