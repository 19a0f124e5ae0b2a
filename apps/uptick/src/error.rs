//! App-level error type.

use thiserror::Error;

/// Errors that can end a run.
#[derive(Debug, Error)]
pub enum AppError {
    /// The requested configuration was invalid.
    #[error("invalid configuration: {0}")]
    Config(#[from] uptick_core::Error),

    /// Writing a line failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a JSON line failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
