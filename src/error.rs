//! Error types for trueno-snap operations.

use std::io;
use thiserror::Error;

use crate::snap_point::Dimension;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while declaring, merging, or resolving snap points.
#[derive(Error, Debug)]
pub enum Error {
    /// A snap point was declared with invalid parameters.
    #[error("invalid '{parameter}': {message}")]
    InvalidConfiguration {
        /// Name of the rejected parameter.
        parameter: &'static str,
        /// Why the value was rejected.
        message: String,
    },

    /// Neighboring snap points overlap in a way that cannot be partitioned.
    #[error("invalid snap point topology: {0}")]
    InvalidTopology(String),

    /// Two snap points cannot be combined.
    #[error("invalid snap point merge: {0}")]
    InvalidMerge(String),

    /// A snap point was added to a collection of the other dimension.
    #[error("dimension mismatch: collection is {expected}, snap point is {found}")]
    DimensionMismatch {
        /// Dimension of the collection.
        expected: Dimension,
        /// Dimension of the rejected snap point.
        found: Dimension,
    },

    /// The snap point to remove is not part of the collection.
    #[error("snap point not found in collection")]
    NotFound,

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 when unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn invalid(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfiguration { parameter, message: message.into() }
    }
}
