//! Conversion between vertex walks and canonical edge sets.

use std::collections::BTreeMap;

use crate::{
    error::{CycleDefect, CycleError},
    graph::{Edge, VertexId},
};

use super::{CyclePath, EdgeSet};

/// Lists the canonical edges of `path` in walk order, one per consecutive
/// vertex pair including the pair that closes the loop.
///
/// # Examples
/// ```
/// use frustration_core::{CyclePath, VertexId, cycles::codec::path_to_edges};
///
/// let path = CyclePath::new(["c", "a", "b"].map(VertexId::new).to_vec())?;
/// let edges: Vec<String> = path_to_edges(&path).iter().map(ToString::to_string).collect();
/// assert_eq!(edges, ["a c", "a b", "b c"]);
/// # Ok::<(), frustration_core::CycleError>(())
/// ```
#[must_use]
pub fn path_to_edges(path: &CyclePath) -> Vec<Edge> {
    path.edges().collect()
}

/// Rebuilds the walk described by `edges`.
///
/// The walk starts at the smallest vertex identifier, steps to that vertex's
/// smaller neighbour, and then always continues to the neighbour it did not
/// arrive from. The output is therefore fully determined by the set.
///
/// # Errors
/// Returns [`CycleError::EmptyCycle`] for an empty set, and
/// [`CycleError::NonSimpleCycle`] when a vertex does not have exactly two
/// incident edges or the edges form more than one loop.
///
/// # Examples
/// ```
/// use frustration_core::{CyclePath, EdgeSet, VertexId, cycles::codec::edges_to_path};
///
/// let walk = CyclePath::new(["d", "b", "c", "a"].map(VertexId::new).to_vec())?;
/// let decoded = edges_to_path(&EdgeSet::from_path(&walk))?;
/// let names: Vec<&str> = decoded.vertices().iter().map(VertexId::as_str).collect();
/// assert_eq!(names, ["a", "c", "b", "d"]);
/// # Ok::<(), frustration_core::CycleError>(())
/// ```
pub fn edges_to_path(edges: &EdgeSet) -> Result<CyclePath, CycleError> {
    let mut incident: BTreeMap<&VertexId, Vec<&VertexId>> = BTreeMap::new();
    for edge in edges {
        incident.entry(edge.low()).or_default().push(edge.high());
        incident.entry(edge.high()).or_default().push(edge.low());
    }

    let mut neighbours: BTreeMap<&VertexId, [&VertexId; 2]> = BTreeMap::new();
    for (vertex, adjacent) in incident {
        let &[first, second] = adjacent.as_slice() else {
            return Err(CycleError::NonSimpleCycle {
                defect: CycleDefect::DegreeMismatch {
                    vertex: vertex.clone(),
                    degree: adjacent.len(),
                },
            });
        };
        neighbours.insert(vertex, [first, second]);
    }

    let Some((&start, &[first, second])) = neighbours.first_key_value() else {
        return Err(CycleError::EmptyCycle);
    };

    let mut walk = vec![start.clone()];
    let mut previous = start;
    let mut current = first.min(second);
    while current != start && walk.len() < neighbours.len() {
        walk.push(current.clone());
        let Some(&[left, right]) = neighbours.get(current) else {
            break;
        };
        let next = if left == previous { right } else { left };
        previous = current;
        current = next;
    }

    if walk.len() != neighbours.len() || current != start {
        return Err(CycleError::NonSimpleCycle {
            defect: CycleDefect::DisjointLoops {
                covered: walk.len(),
                total: neighbours.len(),
            },
        });
    }
    Ok(CyclePath::from_walk(walk))
}
