//! Frustration analysis for Ising and QUBO problem graphs.
//!
//! The pipeline partitions a graph's edges over a spanning forest, turns each
//! non-tree edge into a basic cycle, optionally closes the basis to every
//! elementary cycle, classifies each cycle as frustrated or not, and tallies
//! the verdicts per vertex, per edge and overall. [`AnalyzerBuilder`] is the
//! usual entry point.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod analyzer;
pub mod cycles;
mod error;
pub mod frustration;
mod graph;
mod spanning;
pub mod statistics;
#[cfg(test)]
mod test_utils;

pub use crate::{
    analyzer::{AnalysisReport, AnalyzerBuilder, FrustrationAnalyzer},
    cycles::{
        CyclePath, EdgeSet,
        gibbs::{EnumerationLimits, GibbsEnumerator},
    },
    error::{
        CycleDefect, CycleError, CycleErrorCode, EnumerationError, EnumerationErrorCode,
        FrustrationError, FrustrationErrorCode, Result,
    },
    graph::{Edge, GraphBuilder, GraphError, GraphErrorCode, IsingGraph, IterationOrder, VertexId},
    spanning::{EdgePartition, partition_edges},
    statistics::{ClassifiedCycle, FrustrationStatistics, Ratio, Tally},
};
