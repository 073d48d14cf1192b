//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark inputs so
//! setup functions can propagate failures with `?` instead of `.expect()`.

use frustration_core::FrustrationError;

use crate::lattice::LatticeError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Lattice generation failed.
    #[error("lattice generation failed: {0}")]
    Lattice(#[from] LatticeError),
    /// Analyzer configuration or analysis failed.
    #[error("frustration analysis failed: {0}")]
    Frustration(#[from] FrustrationError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
