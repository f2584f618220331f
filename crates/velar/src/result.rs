//! Result and error types for Velar.

use thiserror::Error;

/// Result type for Velar operations
pub type VelarResult<T> = Result<T, VelarError>;

/// Errors that can occur in Velar
///
/// Selector malformation is never an error: the parser folds it into the
/// parse result and the classifier turns it into a Forbidden verdict. Only
/// host-level failures surface here.
#[derive(Debug, Error)]
pub enum VelarError {
    /// Rust source that the AST frontend could not parse
    #[error("Failed to parse {file}: {message}")]
    SourceParse {
        /// File path
        file: String,
        /// Parser error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
