//! Errors raised while parsing catalogue identifiers and labels.

use thiserror::Error;

/// Errors surfaced when converting free text into catalogue types.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CatalogueError {
    /// A duration label did not start with a positive day count.
    #[error("duration label '{label}' must start with a positive number of days")]
    InvalidDuration {
        /// The label that failed to parse.
        label: String,
    },

    /// A category identifier did not name a known trip type.
    #[error("unknown trip category '{identifier}'")]
    UnknownCategory {
        /// The identifier that failed to resolve.
        identifier: String,
    },

    /// A duration bucket identifier was not `1-3`, `4-7` or `8+`.
    #[error("unknown duration bucket '{identifier}'")]
    UnknownDurationBucket {
        /// The identifier that failed to resolve.
        identifier: String,
    },
}
