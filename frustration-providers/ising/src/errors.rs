use std::{io, num::ParseFloatError};

use frustration_core::GraphError;
use thiserror::Error;

use crate::format::InputFormat;

/// Errors raised while reading a problem file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IsingFormatError {
    /// The requested format name is not supported.
    #[error("unrecognised input format `{name}` (expected qubist, qmasm, qubo or bqpjson)")]
    UnknownFormat {
        /// The name that failed to parse.
        name: String,
    },
    /// The input ended before the mandatory header line.
    #[error("{format} input is missing its header line")]
    MissingHeader {
        /// Format being read.
        format: InputFormat,
    },
    /// A line did not have the shape the format requires.
    #[error("failed to parse {format} line {line} `{content}`: expected {expected}")]
    MalformedLine {
        /// Format being read.
        format: InputFormat,
        /// One-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
        /// What the line should have contained.
        expected: &'static str,
    },
    /// A weight token was not a floating-point number.
    #[error("line {line}: `{token}` is not a valid weight")]
    InvalidWeight {
        /// One-based line number.
        line: usize,
        /// The offending token.
        token: String,
        /// Parser failure.
        source: ParseFloatError,
    },
    /// A term was rejected by the graph builder.
    #[error("{context}: {error}")]
    Graph {
        /// Where the term came from, such as `line 4` or `quadratic term 2`.
        context: String,
        /// Builder failure.
        #[source]
        error: GraphError,
    },
    /// A bqpjson document named a domain other than `spin` or `boolean`.
    #[error("unrecognised variable_domain `{domain}` (expected spin or boolean)")]
    UnknownVariableDomain {
        /// The rejected domain.
        domain: String,
    },
    /// A bqpjson document was not valid JSON or missed required fields.
    #[error("invalid bqpjson document: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading the input failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl IsingFormatError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> IsingFormatErrorCode {
        match self {
            Self::UnknownFormat { .. } => IsingFormatErrorCode::UnknownFormat,
            Self::MissingHeader { .. } => IsingFormatErrorCode::MissingHeader,
            Self::MalformedLine { .. } => IsingFormatErrorCode::MalformedLine,
            Self::InvalidWeight { .. } => IsingFormatErrorCode::InvalidWeight,
            Self::Graph { .. } => IsingFormatErrorCode::InvalidGraph,
            Self::UnknownVariableDomain { .. } => IsingFormatErrorCode::UnknownVariableDomain,
            Self::Json(_) => IsingFormatErrorCode::InvalidJson,
            Self::Io(_) => IsingFormatErrorCode::Io,
        }
    }

    pub(crate) fn graph(context: impl Into<String>, error: GraphError) -> Self {
        Self::Graph {
            context: context.into(),
            error,
        }
    }
}

/// Machine-readable error codes for [`IsingFormatError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum IsingFormatErrorCode {
    /// The requested format name is not supported.
    UnknownFormat,
    /// The input ended before the mandatory header line.
    MissingHeader,
    /// A line did not have the shape the format requires.
    MalformedLine,
    /// A weight token was not a floating-point number.
    InvalidWeight,
    /// A term was rejected by the graph builder.
    InvalidGraph,
    /// A bqpjson document named an unsupported domain.
    UnknownVariableDomain,
    /// A bqpjson document could not be decoded.
    InvalidJson,
    /// Reading the input failed.
    Io,
}

impl IsingFormatErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnknownFormat => "UNKNOWN_FORMAT",
            Self::MissingHeader => "MISSING_HEADER",
            Self::MalformedLine => "MALFORMED_LINE",
            Self::InvalidWeight => "INVALID_WEIGHT",
            Self::InvalidGraph => "INVALID_GRAPH",
            Self::UnknownVariableDomain => "UNKNOWN_VARIABLE_DOMAIN",
            Self::InvalidJson => "INVALID_JSON",
            Self::Io => "IO",
        }
    }

    /// `true` for codes describing malformed input rather than an I/O
    /// failure or a bad format name.
    #[must_use]
    pub const fn is_malformed_input(self) -> bool {
        !matches!(self, Self::Io | Self::UnknownFormat)
    }
}
