//! Weighted graph model for Ising problems.
//!
//! Vertices carry an external field and edges carry a coupler strength. Edges
//! are stored in canonical form (`low <= high` under byte-wise identifier
//! order) so `(u, v)` and `(v, u)` address the same coupler. A graph is built
//! once through [`GraphBuilder`] and is read-only afterwards.

use std::{
    borrow::Borrow,
    collections::{HashMap, hash_map::Entry},
    fmt,
    sync::Arc,
};

use thiserror::Error;

/// Opaque vertex identifier.
///
/// Identifiers are compared byte-wise, which fixes the canonical orientation
/// of every [`Edge`] and the starting vertex of decoded cycles.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(Arc<str>);

impl VertexId {
    /// Creates an identifier from any string-like value.
    ///
    /// # Examples
    /// ```
    /// use frustration_core::VertexId;
    ///
    /// let id = VertexId::new("q17");
    /// assert_eq!(id.as_str(), "q17");
    /// ```
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    #[rustfmt::skip]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for VertexId {
    fn from(value: String) -> Self {
        Self(Arc::from(value))
    }
}

/// An undirected edge in canonical form (`low < high`).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    low: VertexId,
    high: VertexId,
}

impl Edge {
    /// Builds the canonical edge joining `left` and `right`.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when both endpoints are the same
    /// vertex; self-couplings belong in the vertex field instead.
    ///
    /// # Examples
    /// ```
    /// use frustration_core::{Edge, VertexId};
    ///
    /// let forward = Edge::new(VertexId::new("b"), VertexId::new("a"))?;
    /// let backward = Edge::new(VertexId::new("a"), VertexId::new("b"))?;
    /// assert_eq!(forward, backward);
    /// assert_eq!(forward.low().as_str(), "a");
    /// # Ok::<(), frustration_core::GraphError>(())
    /// ```
    pub fn new(left: VertexId, right: VertexId) -> Result<Self, GraphError> {
        if left == right {
            return Err(GraphError::SelfLoop { vertex: left });
        }
        Ok(Self::canonical(left, right))
    }

    /// Orders two endpoints that are already known to differ.
    pub(crate) fn canonical(left: VertexId, right: VertexId) -> Self {
        if left <= right {
            Self {
                low: left,
                high: right,
            }
        } else {
            Self {
                low: right,
                high: left,
            }
        }
    }

    /// Returns the smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn low(&self) -> &VertexId { &self.low }

    /// Returns the larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn high(&self) -> &VertexId { &self.high }

    /// Returns `true` when `vertex` is one of the endpoints.
    #[must_use]
    pub fn touches(&self, vertex: &VertexId) -> bool {
        &self.low == vertex || &self.high == vertex
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.low, self.high)
    }
}

/// Errors raised while assembling an [`IsingGraph`].
#[derive(Clone, Debug, Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge joined a vertex to itself.
    #[error("vertex `{vertex}` cannot be coupled to itself")]
    SelfLoop {
        /// The vertex named on both ends of the edge.
        vertex: VertexId,
    },
    /// A vertex field or coupler was NaN or infinite.
    #[error("weight for `{element}` is not finite ({weight})")]
    NonFiniteWeight {
        /// Vertex or edge the weight was attached to.
        element: String,
        /// The rejected value.
        weight: f64,
    },
}

impl GraphError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::SelfLoop { .. } => GraphErrorCode::SelfLoop,
            Self::NonFiniteWeight { .. } => GraphErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable error codes for [`GraphError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum GraphErrorCode {
    /// An edge joined a vertex to itself.
    SelfLoop,
    /// A weight was NaN or infinite.
    NonFiniteWeight,
}

impl GraphErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SelfLoop => "SELF_LOOP",
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
        }
    }
}

/// Order in which edges, vertices and report entries are visited.
///
/// The spanning tree, and therefore the basic cycles, depend on the order in
/// which edges are offered to the partition builder. `Unordered` follows the
/// hash map order and may differ between runs; `Sorted` visits everything in
/// canonical identifier order so repeated runs produce identical output.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum IterationOrder {
    /// Follow hash map iteration order.
    #[default]
    Unordered,
    /// Sort by vertex identifier / canonical edge.
    Sorted,
}

/// Read-only Ising problem graph.
///
/// # Examples
/// ```
/// use frustration_core::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_coupler("a", "b", -1.0)?;
/// builder.add_field("c", 0.5)?;
/// let graph = builder.build();
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.field("a"), 0.0);
/// # Ok::<(), frustration_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IsingGraph {
    fields: HashMap<VertexId, f64>,
    couplers: HashMap<Edge, f64>,
}

impl IsingGraph {
    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.couplers.len()
    }

    /// Returns the external field of `vertex`, or `0.0` when it is unknown.
    #[must_use]
    pub fn field(&self, vertex: &str) -> f64 {
        self.fields.get(vertex).copied().unwrap_or(0.0)
    }

    /// Returns the coupler strength of `edge`, or `0.0` when it is absent.
    #[must_use]
    pub fn coupler(&self, edge: &Edge) -> f64 {
        self.couplers.get(edge).copied().unwrap_or(0.0)
    }

    /// Returns `true` when `vertex` belongs to the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.fields.contains_key(vertex)
    }

    /// Iterates vertices and their fields in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = (&VertexId, f64)> {
        self.fields.iter().map(|(vertex, weight)| (vertex, *weight))
    }

    /// Iterates edges and their couplers in unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = (&Edge, f64)> {
        self.couplers.iter().map(|(edge, weight)| (edge, *weight))
    }

    /// Collects the edges in the requested [`IterationOrder`].
    #[must_use]
    pub fn ordered_edges(&self, order: IterationOrder) -> Vec<&Edge> {
        let mut edges: Vec<&Edge> = self.couplers.keys().collect();
        if order == IterationOrder::Sorted {
            edges.sort_unstable();
        }
        edges
    }
}

/// Accumulates vertex fields and couplers into an [`IsingGraph`].
///
/// Repeated contributions to the same vertex or edge are summed, matching how
/// problem files list terms.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    fields: HashMap<VertexId, f64>,
    couplers: HashMap<Edge, f64>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `vertex` with a zero field if it is not known yet.
    pub fn add_vertex(&mut self, vertex: impl Into<VertexId>) -> &mut Self {
        self.fields.entry(vertex.into()).or_insert(0.0);
        self
    }

    /// Adds `weight` to the external field of `vertex`.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] when `weight` is NaN or
    /// infinite.
    pub fn add_field(
        &mut self,
        vertex: impl Into<VertexId>,
        weight: f64,
    ) -> Result<&mut Self, GraphError> {
        let vertex = vertex.into();
        ensure_finite(&vertex, weight)?;
        *self.fields.entry(vertex).or_insert(0.0) += weight;
        Ok(self)
    }

    /// Adds `weight` to the coupler joining `left` and `right`, registering
    /// both endpoints as vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when both endpoints match and
    /// [`GraphError::NonFiniteWeight`] when `weight` is NaN or infinite.
    pub fn add_coupler(
        &mut self,
        left: impl Into<VertexId>,
        right: impl Into<VertexId>,
        weight: f64,
    ) -> Result<&mut Self, GraphError> {
        let edge = Edge::new(left.into(), right.into())?;
        ensure_finite(&edge, weight)?;
        self.fields.entry(edge.low.clone()).or_insert(0.0);
        self.fields.entry(edge.high.clone()).or_insert(0.0);
        match self.couplers.entry(edge) {
            Entry::Occupied(mut slot) => *slot.get_mut() += weight,
            Entry::Vacant(slot) => {
                slot.insert(weight);
            }
        }
        Ok(self)
    }

    /// Applies `map` to every accumulated field and coupler.
    ///
    /// Used by input readers that rescale or shift all weights before handing
    /// the graph over.
    ///
    /// # Errors
    /// Returns [`GraphError::NonFiniteWeight`] if `map` produces NaN or an
    /// infinity.
    pub fn map_weights(
        &mut self,
        mut map: impl FnMut(f64) -> f64,
    ) -> Result<&mut Self, GraphError> {
        for (vertex, weight) in &mut self.fields {
            *weight = map(*weight);
            ensure_finite(vertex, *weight)?;
        }
        for (edge, weight) in &mut self.couplers {
            *weight = map(*weight);
            ensure_finite(edge, *weight)?;
        }
        Ok(self)
    }

    /// Rewrites the accumulated QUBO coefficients as an Ising problem.
    ///
    /// Linear terms are halved; every quadratic term is quartered and the
    /// quarter is also added to the field of both endpoints.
    ///
    /// # Examples
    /// ```
    /// use frustration_core::{Edge, GraphBuilder, VertexId};
    ///
    /// let mut builder = GraphBuilder::new();
    /// builder.add_field("0", 2.0)?.add_coupler("0", "1", 4.0)?;
    /// builder.qubo_to_ising();
    /// let graph = builder.build();
    /// let edge = Edge::new(VertexId::new("0"), VertexId::new("1"))?;
    /// assert_eq!(graph.field("0"), 2.0);
    /// assert_eq!(graph.field("1"), 1.0);
    /// assert_eq!(graph.coupler(&edge), 1.0);
    /// # Ok::<(), frustration_core::GraphError>(())
    /// ```
    pub fn qubo_to_ising(&mut self) -> &mut Self {
        for weight in self.fields.values_mut() {
            *weight /= 2.0;
        }
        for (edge, weight) in &mut self.couplers {
            *weight /= 4.0;
            for endpoint in [&edge.low, &edge.high] {
                *self.fields.entry(endpoint.clone()).or_insert(0.0) += *weight;
            }
        }
        self
    }

    /// Freezes the accumulated weights into an [`IsingGraph`].
    #[must_use]
    pub fn build(self) -> IsingGraph {
        IsingGraph {
            fields: self.fields,
            couplers: self.couplers,
        }
    }
}

fn ensure_finite(element: &impl fmt::Display, weight: f64) -> Result<(), GraphError> {
    if weight.is_finite() {
        Ok(())
    } else {
        Err(GraphError::NonFiniteWeight {
            element: element.to_string(),
            weight,
        })
    }
}

#[cfg(test)]
mod tests;
