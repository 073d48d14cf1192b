//! Configured orchestration of the frustration pipeline.
//!
//! [`AnalyzerBuilder`] validates the run configuration; [`FrustrationAnalyzer`]
//! partitions the graph, extracts the basic cycles, optionally closes them to
//! every elementary cycle, and tallies the classified result.

use std::num::NonZeroUsize;

use tracing::{debug, info, instrument};

use crate::{
    Result,
    cycles::{EdgeSet, basis::fundamental_cycles, gibbs::{EnumerationLimits, GibbsEnumerator}},
    error::FrustrationError,
    graph::{IsingGraph, IterationOrder},
    spanning::partition_edges,
    statistics::FrustrationStatistics,
};

/// Configures and constructs [`FrustrationAnalyzer`] instances.
///
/// # Examples
/// ```
/// use frustration_core::{AnalyzerBuilder, IterationOrder};
///
/// let analyzer = AnalyzerBuilder::new()
///     .with_elementary_cycles(true)
///     .with_iteration_order(IterationOrder::Sorted)
///     .with_workers(2)
///     .build()
///     .expect("builder configuration is valid");
/// assert!(analyzer.elementary_cycles());
/// assert_eq!(analyzer.workers().map(|workers| workers.get()), Some(2));
/// ```
#[derive(Clone, Debug, Default)]
pub struct AnalyzerBuilder {
    elementary_cycles: bool,
    iteration_order: IterationOrder,
    workers: Option<usize>,
    limits: EnumerationLimits,
}

impl AnalyzerBuilder {
    /// Creates a builder that analyses basic cycles only, in hash order, with
    /// no enumeration limits.
    ///
    /// # Examples
    /// ```
    /// use frustration_core::{AnalyzerBuilder, IterationOrder};
    ///
    /// let builder = AnalyzerBuilder::new();
    /// assert!(!builder.elementary_cycles());
    /// assert_eq!(builder.iteration_order(), IterationOrder::Unordered);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Closes the basic cycles to every elementary cycle before classifying.
    ///
    /// The closure can be exponential in the number of basic cycles; pair it
    /// with [`Self::with_limits`] on large inputs.
    #[must_use]
    pub const fn with_elementary_cycles(mut self, enabled: bool) -> Self {
        self.elementary_cycles = enabled;
        self
    }

    /// Returns whether elementary-cycle closure is enabled.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elementary_cycles(&self) -> bool { self.elementary_cycles }

    /// Selects hash-order or sorted traversal for the whole run.
    #[must_use]
    pub const fn with_iteration_order(mut self, order: IterationOrder) -> Self {
        self.iteration_order = order;
        self
    }

    /// Returns the configured traversal order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn iteration_order(&self) -> IterationOrder { self.iteration_order }

    /// Sets the number of enumeration workers. Zero is rejected by
    /// [`Self::build`].
    ///
    /// # Examples
    /// ```
    /// use frustration_core::{AnalyzerBuilder, FrustrationError};
    ///
    /// let err = AnalyzerBuilder::new()
    ///     .with_workers(0)
    ///     .build()
    ///     .expect_err("zero workers is invalid");
    /// assert!(matches!(err, FrustrationError::InvalidWorkerCount { got: 0 }));
    /// ```
    #[must_use]
    pub const fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the cycle-count and time caps for elementary-cycle closure.
    #[must_use]
    pub const fn with_limits(mut self, limits: EnumerationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates the configuration and constructs a [`FrustrationAnalyzer`].
    ///
    /// # Errors
    /// Returns [`FrustrationError::InvalidWorkerCount`] when a worker count
    /// of zero was requested.
    pub fn build(self) -> Result<FrustrationAnalyzer> {
        let workers = self
            .workers
            .map(|got| NonZeroUsize::new(got).ok_or(FrustrationError::InvalidWorkerCount { got }))
            .transpose()?;
        Ok(FrustrationAnalyzer {
            elementary_cycles: self.elementary_cycles,
            iteration_order: self.iteration_order,
            workers,
            limits: self.limits,
        })
    }
}

/// Result of one analysis run.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisReport {
    basic_cycle_count: usize,
    elementary_cycle_count: Option<usize>,
    statistics: Option<FrustrationStatistics>,
}

impl AnalysisReport {
    /// Number of basic cycles, which equals the cyclomatic number.
    #[must_use]
    #[rustfmt::skip]
    pub const fn basic_cycle_count(&self) -> usize { self.basic_cycle_count }

    /// Number of elementary cycles when closure was requested and the graph
    /// has cycles.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elementary_cycle_count(&self) -> Option<usize> { self.elementary_cycle_count }

    /// Tallies over the analysed cycles; `None` for acyclic graphs.
    #[must_use]
    pub const fn statistics(&self) -> Option<&FrustrationStatistics> {
        self.statistics.as_ref()
    }

    /// `true` when the graph has no cycles and therefore no frustration.
    #[must_use]
    pub const fn is_acyclic(&self) -> bool {
        self.basic_cycle_count == 0
    }
}

/// Entry point for running the frustration pipeline.
///
/// # Examples
/// ```
/// use frustration_core::{AnalyzerBuilder, GraphBuilder};
///
/// let mut builder = GraphBuilder::new();
/// builder
///     .add_coupler("a", "b", 1.0)?
///     .add_coupler("b", "c", 1.0)?
///     .add_coupler("a", "c", 1.0)?;
/// let report = AnalyzerBuilder::new()
///     .build()?
///     .analyze(&builder.build())?;
/// assert_eq!(report.basic_cycle_count(), 1);
/// let stats = report.statistics().expect("a triangle has a cycle");
/// assert_eq!(stats.cycle_ratio().count(), 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug)]
pub struct FrustrationAnalyzer {
    elementary_cycles: bool,
    iteration_order: IterationOrder,
    workers: Option<NonZeroUsize>,
    limits: EnumerationLimits,
}

impl FrustrationAnalyzer {
    /// Returns whether elementary-cycle closure is enabled.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elementary_cycles(&self) -> bool { self.elementary_cycles }

    /// Returns the traversal order used for this run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn iteration_order(&self) -> IterationOrder { self.iteration_order }

    /// Returns the configured enumeration worker count, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn workers(&self) -> Option<NonZeroUsize> { self.workers }

    /// Returns the enumeration limits.
    #[must_use]
    #[rustfmt::skip]
    pub const fn limits(&self) -> EnumerationLimits { self.limits }

    /// Runs the pipeline against `graph`.
    ///
    /// # Errors
    /// Returns [`FrustrationError::Cycle`] when a cycle cannot be extracted or
    /// decoded, and [`FrustrationError::Enumeration`] when elementary-cycle
    /// closure trips a limit or cannot start its workers.
    #[instrument(
        name = "core.analyze",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            elementary = self.elementary_cycles,
            order = ?self.iteration_order,
        ),
    )]
    pub fn analyze(&self, graph: &IsingGraph) -> Result<AnalysisReport> {
        let partition = partition_edges(graph, self.iteration_order);
        let basis = fundamental_cycles(&partition)?;
        let basic_cycle_count = basis.len();
        if basis.is_empty() {
            info!(
                components = partition.component_count(),
                "graph is acyclic, no frustration is possible"
            );
            return Ok(AnalysisReport {
                basic_cycle_count,
                elementary_cycle_count: None,
                statistics: None,
            });
        }

        let basis: Vec<EdgeSet> = basis.iter().map(EdgeSet::from_path).collect();
        let (mut cycles, elementary_cycle_count) = if self.elementary_cycles {
            let mut enumerator = GibbsEnumerator::new().with_limits(self.limits);
            if let Some(workers) = self.workers {
                enumerator = enumerator.with_workers(workers);
            }
            let elementary = enumerator.enumerate(&basis)?;
            let count = elementary.len();
            (elementary, Some(count))
        } else {
            (basis, None)
        };
        if self.iteration_order == IterationOrder::Sorted {
            cycles.sort_unstable();
        }

        let paths = cycles
            .iter()
            .map(EdgeSet::to_path)
            .collect::<core::result::Result<Vec<_>, _>>()?;
        debug!(cycles = paths.len(), "cycles decoded");
        let statistics = FrustrationStatistics::tally(graph, paths, self.iteration_order);
        let frustrated = statistics.cycle_ratio();
        info!(
            basic_cycles = basic_cycle_count,
            elementary_cycles = ?elementary_cycle_count,
            frustrated_cycles = frustrated.count(),
            analysed_cycles = frustrated.total(),
            "frustration analysis completed"
        );
        Ok(AnalysisReport {
            basic_cycle_count,
            elementary_cycle_count,
            statistics: Some(statistics),
        })
    }
}
