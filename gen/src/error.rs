//! Error types for the documentation generation pipeline.
//!
//! Covers the fatal failure modes: missing source files, I/O, render
//! failures, a malformed override map, and strict-mode promotion of
//! collected warnings. Pattern misses during extraction are not errors;
//! they are silently skipped (or collected as warnings).

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while generating documentation artifacts.
#[derive(Debug, Error)]
pub enum GenError {
    /// A required input file does not exist. Fatal before any output is
    /// written.
    #[error("missing source file: {0}")]
    MissingSource(PathBuf),

    /// File I/O failure while reading sources or writing artifacts.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON rendering or override-map parsing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The override map file did not have the expected shape.
    #[error("invalid flag map: {0}")]
    FlagMap(String),

    /// Strict mode: unmatched declaration-like lines were found.
    #[error("strict mode: {} unrecognized source line(s)", .0.len())]
    Strict(Vec<String>),
}

/// Convenience alias for results with [`GenError`].
pub type Result<T> = std::result::Result<T, GenError>;
