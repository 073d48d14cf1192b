//! Shared test utilities used across the frustration crates.

pub mod proptest_profile;
pub mod tracing;
