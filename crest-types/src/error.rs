use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the crest workspace.
///
/// Covers malformed algorithm inputs, internal invariant failures, unknown
/// symbols, malformed file content, and I/O failures while loading histories.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CrestError {
    /// Empty or malformed series, matrix, point set, or join.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A computation reached a state its inputs should have ruled out
    /// (incomparable keys, numeric overflow).
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// A source does not know the requested symbol.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "series for MSFT".
        what: String,
    },

    /// Issues with file content (unparseable price or date, missing column).
    #[error("data issue: {0}")]
    Data(String),

    /// Opening or reading an input failed.
    #[error("io error: {0}")]
    Io(String),
}

impl CrestError {
    /// Helper: build an `InvalidInput` error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Helper: build an `InvariantViolation` error.
    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `Data` error.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Returns true for errors caused by the caller's input rather than by the
    /// environment (files, sources).
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::Data(_))
    }
}
