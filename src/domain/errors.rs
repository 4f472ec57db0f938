//! Domain layer error types
//!
//! All errors that can occur in domain layer operations.

use thiserror::Error;

/// Main domain error type
#[derive(Error, Debug)]
pub enum DomainError {
    /// Column set operation failed
    #[error(transparent)]
    Column(#[from] ColumnError),

    /// Listing item not found at an index
    #[error("No listing item at index {0}")]
    ItemNotFound(usize),

    /// A platform port (clipboard, shell) failed
    #[error("Platform call failed: {0}")]
    Platform(String),

    /// IO error (wrapped)
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        DomainError::IoError(err.to_string())
    }
}

/// Errors raised by the column set
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    /// A drag position does not address a visible column
    #[error("Visible position {position} out of range ({visible} visible columns)")]
    VisiblePositionOutOfRange { position: usize, visible: usize },
}
