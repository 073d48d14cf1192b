//! Support library for the `find-frustration` binary.
//!
//! Exposes the command pipeline and logging set-up so integration tests can
//! drive them without spawning a subprocess.

pub mod cli;
pub mod logging;
