//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input rejected at the boundary. The message is shown to the user as is.
    #[error("{0}")]
    Validation(String),

    /// A range sample was requested with `min >= max`.
    #[error("maximum must exceed minimum (min {min}, max {max})")]
    DegenerateRange {
        /// The requested lower bound.
        min: i64,
        /// The requested upper bound.
        max: i64,
    },

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl DomainError {
    /// Shorthand for a [`DomainError::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
