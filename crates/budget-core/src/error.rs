//! Error types for budget core operations.
//!
//! Only export can fail at the core level; appending, listing and totalling
//! are infallible. The CLI layer maps these to user-friendly messages.

use thiserror::Error;

/// Result type alias for budget core operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The export destination rejected a write or could not be committed
    #[error("Sink error: {0}")]
    Sink(String),

    /// Underlying I/O failure (open, write, flush, rename)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON encoding failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid caller input (unknown export format and the like)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    /// Whether the error came from the file system rather than encoding.
    pub fn is_io(&self) -> bool {
        match self {
            LedgerError::Io(_) => true,
            LedgerError::Csv(err) => err.is_io_error(),
            _ => false,
        }
    }
}
