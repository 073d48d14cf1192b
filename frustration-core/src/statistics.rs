//! Aggregated frustration statistics over a set of classified cycles.
//!
//! Every vertex and edge touched by at least one cycle gets a [`Tally`] of the
//! frustrated and unfrustrated cycles it lies on. An element is frustrated
//! when it lies on strictly more frustrated cycles than unfrustrated ones;
//! ties count as unfrustrated. Elements on no cycle appear in neither list
//! but still count towards the ratio denominators.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::{
    cycles::CyclePath,
    frustration,
    graph::{Edge, IsingGraph, IterationOrder, VertexId},
};

/// A cycle together with its frustration verdict.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClassifiedCycle {
    path: CyclePath,
    frustrated: bool,
}

impl ClassifiedCycle {
    /// Classifies `path` against the weights of `graph`.
    #[must_use]
    pub fn classify(graph: &IsingGraph, path: CyclePath) -> Self {
        let frustrated = frustration::is_frustrated(graph, &path);
        Self { path, frustrated }
    }

    /// The classified walk.
    #[must_use]
    #[rustfmt::skip]
    pub fn path(&self) -> &CyclePath { &self.path }

    /// `true` when the cycle has an odd number of antiferromagnetic couplings.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_frustrated(&self) -> bool { self.frustrated }
}

/// Number of frustrated and unfrustrated cycles an element lies on.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct Tally {
    frustrated: usize,
    unfrustrated: usize,
}

impl Tally {
    /// Creates a tally from raw counts.
    #[must_use]
    pub const fn new(frustrated: usize, unfrustrated: usize) -> Self {
        Self {
            frustrated,
            unfrustrated,
        }
    }

    fn record(&mut self, frustrated: bool) {
        if frustrated {
            self.frustrated += 1;
        } else {
            self.unfrustrated += 1;
        }
    }

    /// Frustrated cycles through the element.
    #[must_use]
    #[rustfmt::skip]
    pub const fn frustrated(&self) -> usize { self.frustrated }

    /// Unfrustrated cycles through the element.
    #[must_use]
    #[rustfmt::skip]
    pub const fn unfrustrated(&self) -> usize { self.unfrustrated }

    /// All cycles through the element.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.frustrated + self.unfrustrated
    }

    /// `true` when frustrated cycles strictly outnumber unfrustrated ones.
    #[must_use]
    pub const fn is_frustrated(&self) -> bool {
        self.frustrated > self.unfrustrated
    }

    /// Count of the majority category.
    #[must_use]
    pub const fn majority(&self) -> usize {
        if self.is_frustrated() {
            self.frustrated
        } else {
            self.unfrustrated
        }
    }

    /// By how much the majority category leads the minority one.
    #[must_use]
    pub const fn margin(&self) -> usize {
        self.frustrated.abs_diff(self.unfrustrated)
    }
}

/// A `count / total` summary.
///
/// # Examples
/// ```
/// use frustration_core::Ratio;
///
/// assert_eq!(Ratio::new(1, 4).to_string(), "1 / 4 = 0.250000");
/// assert_eq!(Ratio::new(0, 0).quotient(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Ratio {
    count: usize,
    total: usize,
}

impl Ratio {
    /// Creates a ratio of `count` over `total`.
    #[must_use]
    pub const fn new(count: usize, total: usize) -> Self {
        Self { count, total }
    }

    /// Numerator.
    #[must_use]
    #[rustfmt::skip]
    pub const fn count(&self) -> usize { self.count }

    /// Denominator.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total(&self) -> usize { self.total }

    /// `count / total`, or `0.0` when `total` is zero.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        clippy::float_arithmetic,
        reason = "ratios are reported as floating-point quotients"
    )]
    pub fn quotient(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.count as f64 / self.total as f64
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} = {:.6}", self.count, self.total, self.quotient())
    }
}

/// Vertex, edge and cycle tallies for one analysis run.
#[derive(Clone, Debug, PartialEq)]
pub struct FrustrationStatistics {
    vertices: Vec<(VertexId, Tally)>,
    edges: Vec<(Edge, Tally)>,
    cycles: Vec<ClassifiedCycle>,
    vertex_total: usize,
    edge_total: usize,
}

impl FrustrationStatistics {
    /// Classifies `cycles` and tallies their vertices and edges.
    ///
    /// Tallies follow hash order with [`IterationOrder::Unordered`] and
    /// identifier order with [`IterationOrder::Sorted`]. Cycles keep the
    /// order they were supplied in.
    ///
    /// # Examples
    /// ```
    /// use frustration_core::{
    ///     CyclePath, FrustrationStatistics, GraphBuilder, IterationOrder, VertexId,
    /// };
    ///
    /// let mut builder = GraphBuilder::new();
    /// builder
    ///     .add_coupler("a", "b", 1.0)?
    ///     .add_coupler("b", "c", 1.0)?
    ///     .add_coupler("a", "c", 1.0)?
    ///     .add_vertex("lonely");
    /// let graph = builder.build();
    /// let cycle = CyclePath::new(["a", "b", "c"].map(VertexId::new).to_vec())?;
    /// let stats = FrustrationStatistics::tally(&graph, vec![cycle], IterationOrder::Sorted);
    /// assert_eq!(stats.vertex_ratio().to_string(), "3 / 4 = 0.750000");
    /// assert_eq!(stats.cycle_ratio().to_string(), "1 / 1 = 1.000000");
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn tally(graph: &IsingGraph, cycles: Vec<CyclePath>, order: IterationOrder) -> Self {
        let cycles: Vec<ClassifiedCycle> = cycles
            .into_iter()
            .map(|path| ClassifiedCycle::classify(graph, path))
            .collect();

        let mut vertices: HashMap<VertexId, Tally> = HashMap::new();
        let mut edges: HashMap<Edge, Tally> = HashMap::new();
        for cycle in &cycles {
            for vertex in cycle.path.vertices() {
                vertices
                    .entry(vertex.clone())
                    .or_default()
                    .record(cycle.frustrated);
            }
            for edge in cycle.path.edges() {
                edges.entry(edge).or_default().record(cycle.frustrated);
            }
        }

        Self {
            vertices: into_ordered(vertices, order),
            edges: into_ordered(edges, order),
            cycles,
            vertex_total: graph.vertex_count(),
            edge_total: graph.edge_count(),
        }
    }

    /// Every vertex lying on at least one cycle, with its tally.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertex_tallies(&self) -> &[(VertexId, Tally)] { &self.vertices }

    /// Every edge lying on at least one cycle, with its tally.
    #[must_use]
    #[rustfmt::skip]
    pub fn edge_tallies(&self) -> &[(Edge, Tally)] { &self.edges }

    /// Every classified cycle, in input order.
    #[must_use]
    #[rustfmt::skip]
    pub fn cycles(&self) -> &[ClassifiedCycle] { &self.cycles }

    /// Vertices lying on more frustrated than unfrustrated cycles.
    pub fn frustrated_vertices(&self) -> impl Iterator<Item = &(VertexId, Tally)> {
        self.vertices.iter().filter(|(_, tally)| tally.is_frustrated())
    }

    /// Vertices on cycles that are not frustrated by majority.
    pub fn unfrustrated_vertices(&self) -> impl Iterator<Item = &(VertexId, Tally)> {
        self.vertices.iter().filter(|(_, tally)| !tally.is_frustrated())
    }

    /// Edges lying on more frustrated than unfrustrated cycles.
    pub fn frustrated_edges(&self) -> impl Iterator<Item = &(Edge, Tally)> {
        self.edges.iter().filter(|(_, tally)| tally.is_frustrated())
    }

    /// Edges on cycles that are not frustrated by majority.
    pub fn unfrustrated_edges(&self) -> impl Iterator<Item = &(Edge, Tally)> {
        self.edges.iter().filter(|(_, tally)| !tally.is_frustrated())
    }

    /// Frustrated vertices over all vertices of the graph.
    #[must_use]
    pub fn vertex_ratio(&self) -> Ratio {
        Ratio::new(self.frustrated_vertices().count(), self.vertex_total)
    }

    /// Frustrated edges over all edges of the graph.
    #[must_use]
    pub fn edge_ratio(&self) -> Ratio {
        Ratio::new(self.frustrated_edges().count(), self.edge_total)
    }

    /// Frustrated cycles over all analysed cycles.
    #[must_use]
    pub fn cycle_ratio(&self) -> Ratio {
        let frustrated = self
            .cycles
            .iter()
            .filter(|cycle| cycle.is_frustrated())
            .count();
        Ratio::new(frustrated, self.cycles.len())
    }
}

fn into_ordered<K: Ord + Hash>(
    tallies: HashMap<K, Tally>,
    order: IterationOrder,
) -> Vec<(K, Tally)> {
    let mut entries: Vec<(K, Tally)> = tallies.into_iter().collect();
    if order == IterationOrder::Sorted {
        entries.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
    }
    entries
}
