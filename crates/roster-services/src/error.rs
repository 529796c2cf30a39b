//! Service error types.
//!
//! Each variant carries enough context for callers to decide how to
//! handle the failure.

use thiserror::Error;

/// Unified error type for the services crate.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The birthday string could not be parsed as a calendar date.
    #[error("invalid birthday `{input}` (expected YYYY-MM-DD)")]
    InvalidBirthday {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Convenience alias used throughout the services crate.
pub type Result<T> = std::result::Result<T, ServiceError>;
