//! Error types for the cursor-maintainer crate.
//!
//! The maintenance algorithms themselves are total and never fail. These
//! errors belong to the layers around them: configuration, format lookup,
//! and the stdio session.

use std::path::PathBuf;

/// Cursor-maintainer error types.
#[derive(Debug, thiserror::Error)]
pub enum CursorError {
    /// No plain formatter is registered under this name.
    #[error("unknown format: {name}")]
    UnknownFormat { name: String },

    /// No approach is registered under this name.
    #[error("unknown approach: {name}")]
    UnknownApproach { name: String },

    /// No built-in cost function is registered under this name.
    #[error("unknown cost function: {name}")]
    UnknownCostFunction { name: String },

    /// A tester spec is neither a named class nor a valid character class.
    #[error("invalid tester {spec:?}: {reason}")]
    InvalidTester { spec: String, reason: String },

    /// A tester spec failed to compile as a regular expression.
    #[error("invalid tester regex {spec:?}: {source}")]
    TesterRegex {
        spec: String,
        #[source]
        source: regex::Error,
    },

    /// The format has no cursor-aware reimplementation for the requested approach.
    #[error("no {approach} implementation for format: {format}")]
    NoImplementation { approach: String, format: String },

    /// A command-line argument is not a known flag.
    #[error("unknown argument: {arg}")]
    UnknownArgument { arg: String },

    /// A command-line flag that takes a value was given none.
    #[error("missing value for {flag}")]
    MissingValue { flag: String },

    /// A session request carried a cursor that cannot be used.
    #[error("invalid cursor {cursor} for text of length {length}")]
    InvalidCursor { cursor: i64, length: usize },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error with context.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for cursor-maintainer operations.
pub type CursorResult<T> = Result<T, CursorError>;
