//! Cycle representations and the cycle pipeline stages.
//!
//! A cycle travels through the pipeline in two shapes:
//!
//! - [`CyclePath`]: the vertices in walk order, closed by wraparound. This is
//!   the shape the classifier and the report consume.
//! - [`EdgeSet`]: the canonical edges of the cycle, independent of start and
//!   direction. Cycle-space algebra (symmetric difference, subset tests) is
//!   done on this shape.
//!
//! [`basis`] extracts one basic cycle per non-tree edge, [`codec`] converts
//! between the two shapes, and [`gibbs`] closes a basis to every elementary
//! cycle.

pub mod basis;
pub mod codec;
pub mod gibbs;

use std::collections::{BTreeSet, HashSet};

use crate::{
    error::{CycleDefect, CycleError},
    graph::{Edge, VertexId},
};

/// A simple cycle as a vertex walk. The edge from the last vertex back to the
/// first is implied.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CyclePath(Vec<VertexId>);

impl CyclePath {
    /// Validates `vertices` as a simple cycle walk.
    ///
    /// # Errors
    /// Returns [`CycleError::NonSimpleCycle`] when fewer than three vertices
    /// are supplied or a vertex repeats.
    ///
    /// # Examples
    /// ```
    /// use frustration_core::{CyclePath, VertexId};
    ///
    /// let path = CyclePath::new(["a", "b", "c"].map(VertexId::new).to_vec())?;
    /// assert_eq!(path.len(), 3);
    /// assert!(CyclePath::new(["a", "b"].map(VertexId::new).to_vec()).is_err());
    /// # Ok::<(), frustration_core::CycleError>(())
    /// ```
    pub fn new(vertices: Vec<VertexId>) -> Result<Self, CycleError> {
        if vertices.len() < 3 {
            return Err(CycleError::NonSimpleCycle {
                defect: CycleDefect::TooShort {
                    len: vertices.len(),
                },
            });
        }
        let mut seen = HashSet::with_capacity(vertices.len());
        for vertex in &vertices {
            if !seen.insert(vertex) {
                return Err(CycleError::NonSimpleCycle {
                    defect: CycleDefect::RepeatedVertex {
                        vertex: vertex.clone(),
                    },
                });
            }
        }
        Ok(Self(vertices))
    }

    /// Wraps a walk already known to be simple.
    pub(crate) const fn from_walk(vertices: Vec<VertexId>) -> Self {
        Self(vertices)
    }

    /// Vertices in walk order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[VertexId] { &self.0 }

    /// Number of vertices (and edges) on the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a valid cycle has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Walks the cycle's edges in order, wraparound included.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.0
            .iter()
            .zip(self.0.iter().cycle().skip(1))
            .map(|(left, right)| Edge::canonical(left.clone(), right.clone()))
    }

    /// The same cycle walked in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.iter().rev().cloned().collect())
    }
}

/// A cycle as a set of canonical edges.
///
/// Equality, ordering and hashing follow the canonical edge order, so two
/// walks of the same cycle map to equal sets.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeSet(BTreeSet<Edge>);

impl EdgeSet {
    /// Collects the edges of `path`.
    #[must_use]
    pub fn from_path(path: &CyclePath) -> Self {
        path.edges().collect()
    }

    /// Number of edges in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the set holds no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates edges in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.0.iter()
    }

    /// Returns `true` when `edge` belongs to the set.
    #[must_use]
    pub fn contains(&self, edge: &Edge) -> bool {
        self.0.contains(edge)
    }

    /// Returns `true` when the two sets share no edge.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.0.is_disjoint(&other.0)
    }

    /// Returns `true` when `self` is a strict subset of `other`.
    #[must_use]
    pub fn is_proper_subset(&self, other: &Self) -> bool {
        self.0.len() < other.0.len() && self.0.is_subset(&other.0)
    }

    /// Edges in exactly one of the two sets.
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        Self(self.0.symmetric_difference(&other.0).cloned().collect())
    }

    /// Decodes the set back into a walk; see [`codec::edges_to_path`].
    ///
    /// # Errors
    /// Propagates the decoding errors of [`codec::edges_to_path`].
    pub fn to_path(&self) -> Result<CyclePath, CycleError> {
        codec::edges_to_path(self)
    }
}

impl FromIterator<Edge> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EdgeSet {
    type Item = &'a Edge;
    type IntoIter = std::collections::btree_set::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}


#[cfg(test)]
mod property;
