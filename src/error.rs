//! Error types for diskviz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in diskviz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (persistence file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error for persisted payloads.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Color parsing error (malformed hex string from the backend).
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A backend record failed validation at the parse boundary.
    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    /// Backend request failure, surfaced as "no data available".
    #[error("Backend error: {0}")]
    Backend(String),

    /// Persistence layer failure.
    #[error("Store error: {0}")]
    Store(String),
}
