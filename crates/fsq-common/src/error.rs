//! Error types for fsq-icons

use thiserror::Error;

/// Result type alias for shared operations
pub type Result<T> = std::result::Result<T, FsqError>;

/// Main error type shared across the workspace
#[derive(Error, Debug)]
pub enum FsqError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid taxonomy document: {0}")]
    InvalidTaxonomy(String),
}
