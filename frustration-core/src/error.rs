//! Error types for the frustration core library.
//!
//! Defines the cycle, enumeration and orchestration error enums exposed by the
//! public API, their stable codes, and a convenient result alias.

use std::{fmt, sync::Arc, time::Duration};

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Why a vertex sequence or edge set is not a single simple cycle.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum CycleDefect {
    /// A cycle needs at least three vertices.
    TooShort {
        /// Number of vertices supplied.
        len: usize,
    },
    /// A vertex appeared more than once along the walk.
    RepeatedVertex {
        /// The repeated vertex.
        vertex: VertexId,
    },
    /// A vertex did not touch exactly two edges of the set.
    DegreeMismatch {
        /// The offending vertex.
        vertex: VertexId,
        /// Number of edges of the set touching it.
        degree: usize,
    },
    /// The set splits into more than one loop.
    DisjointLoops {
        /// Vertices reached before the first loop closed.
        covered: usize,
        /// Vertices touched by the whole set.
        total: usize,
    },
}

impl fmt::Display for CycleDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { len } => write!(f, "only {len} vertices"),
            Self::RepeatedVertex { vertex } => write!(f, "vertex `{vertex}` repeats"),
            Self::DegreeMismatch { vertex, degree } => {
                write!(f, "vertex `{vertex}` has degree {degree}")
            }
            Self::DisjointLoops { covered, total } => {
                write!(f, "first loop covers {covered} of {total} vertices")
            }
        }
    }
}

/// Errors raised while building or decoding cycles.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CycleError {
    /// An edge set with no edges cannot describe a cycle.
    #[error("edge set is empty")]
    EmptyCycle,
    /// The input does not describe exactly one simple cycle.
    #[error("not a simple cycle: {defect}")]
    NonSimpleCycle {
        /// What made the input non-simple.
        defect: CycleDefect,
    },
    /// No spanning-tree path joined the endpoints of a non-tree edge.
    #[error("spanning tree has no path from `{start}` to `{end}`")]
    MissingTreePath {
        /// Endpoint the search started from.
        start: VertexId,
        /// Endpoint the search was looking for.
        end: VertexId,
    },
}

define_error_codes! {
    /// Stable codes describing [`CycleError`] variants.
    enum CycleErrorCode for CycleError {
        /// An edge set with no edges cannot describe a cycle.
        EmptyCycle => EmptyCycle => "EMPTY_CYCLE",
        /// The input does not describe exactly one simple cycle.
        NonSimpleCycle => NonSimpleCycle { .. } => "NON_SIMPLE_CYCLE",
        /// No spanning-tree path joined the endpoints of a non-tree edge.
        MissingTreePath => MissingTreePath { .. } => "MISSING_TREE_PATH",
    }
}

/// Errors raised by elementary-cycle enumeration.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum EnumerationError {
    /// More elementary cycles were found than the configured cap allows.
    #[error("found {found} elementary cycles, exceeding the limit of {limit}")]
    CycleLimitExceeded {
        /// Configured maximum.
        limit: usize,
        /// Cycles accumulated when the cap tripped.
        found: usize,
    },
    /// Enumeration ran past its deadline.
    #[error("enumeration exceeded {deadline:?} after folding {processed} of {basis} basic cycles")]
    DeadlineExceeded {
        /// Configured time budget.
        deadline: Duration,
        /// Basic cycles folded in before the deadline tripped.
        processed: usize,
        /// Size of the basis.
        basis: usize,
    },
    /// The worker pool could not be started.
    #[error("failed to start enumeration worker pool: {message}")]
    WorkerPool {
        /// Message reported by the pool builder.
        message: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`EnumerationError`] variants.
    enum EnumerationErrorCode for EnumerationError {
        /// More elementary cycles were found than the configured cap allows.
        CycleLimitExceeded => CycleLimitExceeded { .. } => "CYCLE_LIMIT_EXCEEDED",
        /// Enumeration ran past its deadline.
        DeadlineExceeded => DeadlineExceeded { .. } => "DEADLINE_EXCEEDED",
        /// The worker pool could not be started.
        WorkerPool => WorkerPool { .. } => "WORKER_POOL",
    }
}

/// Error type produced when configuring or running [`crate::FrustrationAnalyzer`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum FrustrationError {
    /// Worker count must be greater than zero.
    #[error("workers must be at least 1 (got {got})")]
    InvalidWorkerCount {
        /// The invalid worker count supplied by the caller.
        got: usize,
    },
    /// Cycle extraction or decoding failed.
    #[error("cycle analysis failed: {error}")]
    Cycle {
        #[source]
        /// Underlying cycle error.
        error: CycleError,
    },
    /// Elementary-cycle enumeration failed or was cut short.
    #[error("elementary cycle enumeration failed: {error}")]
    Enumeration {
        #[source]
        /// Underlying enumeration error.
        error: EnumerationError,
    },
}

define_error_codes! {
    /// Stable codes describing [`FrustrationError`] variants.
    enum FrustrationErrorCode for FrustrationError {
        /// Worker count must be greater than zero.
        InvalidWorkerCount => InvalidWorkerCount { .. } => "FRUSTRATION_INVALID_WORKER_COUNT",
        /// Cycle extraction or decoding failed.
        CycleFailure => Cycle { .. } => "FRUSTRATION_CYCLE_FAILURE",
        /// Elementary-cycle enumeration failed or was cut short.
        EnumerationFailure => Enumeration { .. } => "FRUSTRATION_ENUMERATION_FAILURE",
    }
}

impl FrustrationError {
    /// Retrieve the inner [`CycleErrorCode`] when the error came from cycle handling.
    #[must_use]
    pub const fn cycle_code(&self) -> Option<CycleErrorCode> {
        match self {
            Self::Cycle { error } => Some(error.code()),
            _ => None,
        }
    }

    /// Retrieve the inner [`EnumerationErrorCode`] when enumeration failed.
    #[must_use]
    pub const fn enumeration_code(&self) -> Option<EnumerationErrorCode> {
        match self {
            Self::Enumeration { error } => Some(error.code()),
            _ => None,
        }
    }
}

impl From<CycleError> for FrustrationError {
    fn from(error: CycleError) -> Self {
        Self::Cycle { error }
    }
}

impl From<EnumerationError> for FrustrationError {
    fn from(error: EnumerationError) -> Self {
        Self::Enumeration { error }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, FrustrationError>;
