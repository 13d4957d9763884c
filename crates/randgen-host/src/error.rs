//! Randgen host — error types.

use thiserror::Error;

/// Startup and runtime errors for the widget host.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Writing a snapshot failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// Encoding a snapshot failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
