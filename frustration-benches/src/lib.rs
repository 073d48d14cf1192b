//! Benchmark support crate for frustration analysis.
//!
//! Provides seeded lattice generators and parameter types used by the
//! Criterion benchmarks for cycle-basis extraction and elementary-cycle
//! enumeration.

pub mod error;
pub mod lattice;
pub mod params;
