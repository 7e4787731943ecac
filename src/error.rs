//! Error types surfaced by the Wayfarer binary.

use thiserror::Error;

/// Errors raised while configuring or running the application.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WayfarerError {
    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A page identifier did not name a known section.
    #[error("unknown page '{identifier}' (expected home, search, packages, bookings or contact)")]
    UnknownPage {
        /// The identifier that failed to resolve.
        identifier: String,
    },

    /// The terminal program failed to start or exited abnormally.
    #[error("terminal error: {message}")]
    Terminal {
        /// Error detail from the TUI runtime.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl From<std::io::Error> for WayfarerError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}
