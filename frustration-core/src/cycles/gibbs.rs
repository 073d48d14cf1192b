//! Elementary cycle enumeration (Gibbs' algorithm).
//!
//! Starting from a cycle basis `φ₀ … φₖ₋₁`, the enumerator keeps
//!
//! - `S`: sets confirmed as elementary cycles,
//! - `Q`: every set still allowed to combine with later basis cycles,
//! - `R`: symmetric differences of `φᵢ` with members of `Q` that overlap it,
//! - `Rs`: symmetric differences with members of `Q` disjoint from it, plus
//!   members of `R` that turned out to be proper supersets of another member.
//!
//! After the last basis cycle, `S` holds every elementary cycle of the graph.
//! The closure can grow exponentially with the basis size; callers bound it
//! with [`EnumerationLimits`].
//!
//! The superset test over `R` is quadratic and runs on a dedicated worker
//! pool when the `parallel` feature is enabled. Workers only read `R`; each
//! returns the indices it wants moved, and a single reduction merges them
//! before `R` and `Rs` are touched.

use std::{
    collections::HashSet,
    num::NonZeroUsize,
    time::{Duration, Instant},
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument};

use crate::error::EnumerationError;

use super::EdgeSet;

/// Caps applied while closing a basis.
///
/// # Examples
/// ```
/// use std::{num::NonZeroUsize, time::Duration};
/// use frustration_core::EnumerationLimits;
///
/// let limits = EnumerationLimits::unbounded()
///     .with_max_cycles(NonZeroUsize::new(10_000).expect("non-zero"))
///     .with_deadline(Duration::from_secs(30));
/// assert_eq!(limits.max_cycles().map(NonZeroUsize::get), Some(10_000));
/// assert_eq!(limits.deadline(), Some(Duration::from_secs(30)));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EnumerationLimits {
    max_cycles: Option<NonZeroUsize>,
    deadline: Option<Duration>,
}

impl EnumerationLimits {
    /// No cap on cycle count or running time.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_cycles: None,
            deadline: None,
        }
    }

    /// Fails once more than `max` elementary cycles have been accumulated.
    #[must_use]
    pub const fn with_max_cycles(mut self, max: NonZeroUsize) -> Self {
        self.max_cycles = Some(max);
        self
    }

    /// Fails once enumeration has used up `deadline`.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Configured cycle cap.
    #[must_use]
    #[rustfmt::skip]
    pub const fn max_cycles(&self) -> Option<NonZeroUsize> { self.max_cycles }

    /// Configured time budget.
    #[must_use]
    #[rustfmt::skip]
    pub const fn deadline(&self) -> Option<Duration> { self.deadline }
}

/// Closes a cycle basis under symmetric difference.
#[derive(Clone, Copy, Debug, Default)]
pub struct GibbsEnumerator {
    workers: Option<NonZeroUsize>,
    limits: EnumerationLimits,
}

impl GibbsEnumerator {
    /// Creates an enumerator using the default worker count and no limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of the superset-pruning worker pool.
    #[must_use]
    pub const fn with_workers(mut self, workers: NonZeroUsize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Sets the caps checked while the basis is being closed.
    #[must_use]
    pub const fn with_limits(mut self, limits: EnumerationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns every elementary cycle spanned by `basis`, basis cycles
    /// included, in unspecified order.
    ///
    /// # Errors
    /// Returns [`EnumerationError::CycleLimitExceeded`] or
    /// [`EnumerationError::DeadlineExceeded`] when a configured limit trips,
    /// and [`EnumerationError::WorkerPool`] if the pool cannot be started.
    ///
    /// # Examples
    /// ```
    /// use frustration_core::{
    ///     CyclePath, EdgeSet, GibbsEnumerator, VertexId,
    /// };
    ///
    /// // Two triangles sharing the edge b-c: the closure adds the square a-b-d-c.
    /// let left = CyclePath::new(["a", "b", "c"].map(VertexId::new).to_vec())?;
    /// let right = CyclePath::new(["b", "d", "c"].map(VertexId::new).to_vec())?;
    /// let basis = [EdgeSet::from_path(&left), EdgeSet::from_path(&right)];
    /// let cycles = GibbsEnumerator::new().enumerate(&basis)?;
    /// assert_eq!(cycles.len(), 3);
    /// assert!(cycles.iter().any(|cycle| cycle.len() == 4));
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[instrument(
        name = "core.elementary_cycles",
        err,
        skip(self, basis),
        fields(basis = basis.len(), workers = ?self.workers),
    )]
    pub fn enumerate(&self, basis: &[EdgeSet]) -> Result<Vec<EdgeSet>, EnumerationError> {
        #[cfg(feature = "parallel")]
        {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(self.workers.map_or(0, NonZeroUsize::get))
                .build()
                .map_err(|error| EnumerationError::WorkerPool {
                    message: error.to_string().into(),
                })?;
            pool.install(|| self.close_basis(basis))
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.close_basis(basis)
        }
    }

    fn close_basis(&self, basis: &[EdgeSet]) -> Result<Vec<EdgeSet>, EnumerationError> {
        let Some((first, rest)) = basis.split_first() else {
            return Ok(Vec::new());
        };
        let mut budget = Budget::start(self.limits, basis.len());
        let mut elementary: HashSet<EdgeSet> = HashSet::new();
        budget.admit(&mut elementary, first.clone())?;
        let mut combinable: HashSet<EdgeSet> = elementary.clone();

        for (folded, phi) in rest.iter().enumerate() {
            budget.processed = folded.saturating_add(1);
            let mut overlapping: HashSet<EdgeSet> = HashSet::new();
            let mut deferred: HashSet<EdgeSet> = HashSet::new();
            for candidate in &combinable {
                budget.check_deadline()?;
                let combined = candidate.symmetric_difference(phi);
                if combined.is_empty() {
                    continue;
                }
                if candidate.is_disjoint(phi) {
                    deferred.insert(combined);
                } else {
                    overlapping.insert(combined);
                }
            }

            let overlapping: Vec<EdgeSet> = overlapping.into_iter().collect();
            let supersets = proper_supersets(&overlapping, &budget)?;
            for (index, set) in overlapping.into_iter().enumerate() {
                if supersets.contains(&index) {
                    deferred.insert(set);
                } else {
                    combinable.insert(set.clone());
                    budget.admit(&mut elementary, set)?;
                }
            }
            combinable.extend(deferred);
            combinable.insert(phi.clone());
            budget.admit(&mut elementary, phi.clone())?;

            debug!(
                processed = folded.saturating_add(2),
                elementary = elementary.len(),
                combinable = combinable.len(),
                superset_moves = supersets.len(),
                "basis cycle folded in"
            );
        }

        Ok(elementary.into_iter().collect())
    }
}

/// Running limits of one enumeration.
///
/// The deadline is polled once per combined candidate and once per row of
/// the superset test, so enumeration stops within one such step of it.
#[derive(Debug)]
struct Budget {
    limits: EnumerationLimits,
    started: Instant,
    processed: usize,
    basis: usize,
}

impl Budget {
    fn start(limits: EnumerationLimits, basis: usize) -> Self {
        Self {
            limits,
            started: Instant::now(),
            processed: 0,
            basis,
        }
    }

    /// Records `set` as elementary and fails once the cap is passed.
    fn admit(
        &self,
        elementary: &mut HashSet<EdgeSet>,
        set: EdgeSet,
    ) -> Result<(), EnumerationError> {
        if elementary.insert(set)
            && let Some(limit) = self.limits.max_cycles
            && elementary.len() > limit.get()
        {
            return Err(EnumerationError::CycleLimitExceeded {
                limit: limit.get(),
                found: elementary.len(),
            });
        }
        Ok(())
    }

    fn check_deadline(&self) -> Result<(), EnumerationError> {
        if let Some(deadline) = self.limits.deadline
            && self.started.elapsed() >= deadline
        {
            return Err(EnumerationError::DeadlineExceeded {
                deadline,
                processed: self.processed,
                basis: self.basis,
            });
        }
        Ok(())
    }
}

/// Indices of members of `sets` that strictly contain another member.
#[cfg(feature = "parallel")]
fn proper_supersets(
    sets: &[EdgeSet],
    budget: &Budget,
) -> Result<HashSet<usize>, EnumerationError> {
    let moved = sets
        .par_iter()
        .try_fold(Vec::new, |moved, smaller| {
            budget.check_deadline()?;
            Ok::<_, EnumerationError>(collect_supersets(sets, smaller, moved))
        })
        .try_reduce(Vec::new, |mut left, right| {
            left.extend(right);
            Ok(left)
        })?;
    Ok(moved.into_iter().collect())
}

/// Indices of members of `sets` that strictly contain another member.
#[cfg(not(feature = "parallel"))]
fn proper_supersets(
    sets: &[EdgeSet],
    budget: &Budget,
) -> Result<HashSet<usize>, EnumerationError> {
    let moved = sets.iter().try_fold(Vec::new(), |moved, smaller| {
        budget.check_deadline()?;
        Ok::<_, EnumerationError>(collect_supersets(sets, smaller, moved))
    })?;
    Ok(moved.into_iter().collect())
}

fn collect_supersets(sets: &[EdgeSet], smaller: &EdgeSet, mut moved: Vec<usize>) -> Vec<usize> {
    moved.extend(
        sets.iter()
            .enumerate()
            .filter(|(_, larger)| smaller.is_proper_subset(larger))
            .map(|(index, _)| index),
    );
    moved
}
