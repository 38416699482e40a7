//! Error types for the signup wizard

use thiserror::Error;

/// Result type alias for signup wizard operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the signup wizard
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
