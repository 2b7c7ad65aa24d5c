//! Error types for the dugout crates.

use thiserror::Error;

/// Errors that can occur in dugout operations.
#[derive(Error, Debug)]
pub enum DugoutError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Remote store error: {0}")]
    Remote(String),
}

/// Result type alias for dugout operations.
pub type DugoutResult<T> = Result<T, DugoutError>;
