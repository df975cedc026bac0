//! Error types for wxprob-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the wxprob-io crate.
///
/// Covers request validation, transport and HTTP status failures, JSON
/// decoding, and date keys that cannot be read as calendar dates.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file exists but cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps a transport-level failure (connect, timeout, body read).
    #[error("http error: {reason}")]
    Http {
        /// Description of the underlying client failure.
        reason: String,
    },

    /// Returned when the server answers with a non-success status.
    #[error("request to {url} failed with status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// Returned when a response body is not the expected JSON document.
    #[error("json error: {reason}")]
    Json {
        /// Description of the decoding failure.
        reason: String,
    },

    /// Returned when the requested parameter is absent from a response.
    #[error("parameter '{name}' not found in response (available: {available})")]
    MissingParameter {
        /// Parameter that was requested.
        name: String,
        /// Comma-separated parameters the response does contain.
        available: String,
    },

    /// Returned when a date key is not a valid `YYYYMMDD` date.
    #[error("invalid date key '{key}': {reason}")]
    InvalidDate {
        /// The offending key.
        key: String,
        /// Description of the calendar failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<reqwest::Error> for IoError {
    fn from(e: reqwest::Error) -> Self {
        IoError::Http {
            reason: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        IoError::Json {
            reason: e.to_string(),
        }
    }
}
