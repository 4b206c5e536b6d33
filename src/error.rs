//! Fetch error types.
//!
//! For I/O errors we capture the operation kind and message as strings
//! rather than wrapping `std::io::Error`, keeping the type cheap to clone
//! and compare in tests.

use thiserror::Error;

/// Error type for fetch and write operations.
///
/// Either variant aborts the run: a non-200 HTTP status is a per-item
/// outcome, not an error (see [`crate::FetchOutcome`]).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// I/O error while creating directories or writing files.
    #[error("I/O error ({kind}): {message}")]
    Io {
        /// The operation that failed (e.g. "create_dir", "write_file").
        kind: String,
        /// Detailed error message.
        message: String,
    },

    /// Network-level error (DNS, connect, read).
    #[error("Network error: {message}")]
    Network {
        /// Detailed error message.
        message: String,
    },
}

impl FetchError {
    /// Create an I/O error with the given operation kind and message.
    pub fn io(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create a network error with the given message.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }
}
