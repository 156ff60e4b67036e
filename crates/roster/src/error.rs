//! Error types for kinline-roster.

use std::path::PathBuf;

/// Error type for all fallible operations in the kinline-roster crate.
///
/// Every variant aborts the whole load: a roster is either fully valid or
/// not produced at all.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Returned when the roster file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when the roster file exists but cannot be read.
    #[error("failed to read {}: {reason}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Wraps a JSON syntax error from `serde_json`.
    #[error("malformed JSON: {reason}")]
    Json {
        /// Description of the underlying parse failure.
        reason: String,
    },

    /// Returned when the top-level JSON value is not an array of records.
    #[error("roster must be an array of people objects, got {found}")]
    Schema {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// Returned when a record's `birthdate` is missing or not a valid date.
    #[error("invalid birthdate at index {index}: {raw:?} (use YYYY-MM-DD)")]
    InvalidBirthdate {
        /// Position of the offending record in the input array.
        index: usize,
        /// The raw `birthdate` value as text.
        raw: String,
    },
}

impl From<serde_json::Error> for RosterError {
    fn from(e: serde_json::Error) -> Self {
        RosterError::Json {
            reason: e.to_string(),
        }
    }
}
