//! Error types for the compare-products application.

use compare_search::CompareError;

/// Top-level error type for the CLI application.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Search or reconciliation failure from the library.
    #[error(transparent)]
    Search(#[from] CompareError),

    /// Configuration file could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// Rendering to JSON failed.
    #[error("output error: {0}")]
    Output(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;
