//! Error types for palaver operations.

use thiserror::Error;

/// Result type alias for palaver operations.
pub type Result<T> = std::result::Result<T, PalaverError>;

/// Main error type for palaver operations.
///
/// Messages are written for the caller that supplied the input, so they
/// can be surfaced verbatim at the API boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PalaverError {
    /// Malformed identifier supplied by a caller
    #[error("{0}")]
    InvalidIdentifier(String),

    /// Invalid input or arguments
    #[error("{0}")]
    InvalidInput(String),

    /// Entity lookups that found nothing
    #[error("{0}")]
    NotFound(String),

    /// Forum or sharing engine failures
    #[error("{0}")]
    Engine(String),
}

impl PalaverError {
    /// Creates a new invalid identifier error.
    pub fn invalid_identifier<T: ToString>(msg: T) -> Self {
        Self::InvalidIdentifier(msg.to_string())
    }

    /// Creates a new invalid input error.
    pub fn invalid_input<T: ToString>(msg: T) -> Self {
        Self::InvalidInput(msg.to_string())
    }

    /// Creates a new not found error.
    pub fn not_found<T: ToString>(msg: T) -> Self {
        Self::NotFound(msg.to_string())
    }

    /// Creates a new engine error.
    pub fn engine<T: ToString>(msg: T) -> Self {
        Self::Engine(msg.to_string())
    }
}
