//! Benchmark parameter types.

use std::fmt;

/// Parameters for a cycle-basis benchmark run.
#[derive(Clone, Debug)]
pub struct BasisBenchParams {
    /// Lattice rows.
    pub rows: usize,
    /// Lattice columns.
    pub cols: usize,
}

impl fmt::Display for BasisBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Parameters for an elementary-cycle enumeration benchmark run.
#[derive(Clone, Debug)]
pub struct EnumerationBenchParams {
    /// Lattice rows.
    pub rows: usize,
    /// Lattice columns.
    pub cols: usize,
    /// Worker threads used by the enumerator.
    pub workers: usize,
}

impl fmt::Display for EnumerationBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{},workers={}", self.rows, self.cols, self.workers)
    }
}
