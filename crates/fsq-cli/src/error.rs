//! Error types for the fsq CLI
//!
//! Every variant is user-facing: the message says what went wrong and what
//! to try next.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// The Foursquare API rejected the request
    #[error("Foursquare API error: {0}. Check FSQ_CLIENT_ID / FSQ_CLIENT_SECRET and the API URL.")]
    Api(String),

    /// No cached taxonomy to work from
    #[error("Category taxonomy not found at '{0}'. Run 'fsq fetch' first.")]
    TaxonomyNotCached(String),

    /// Icon prefix does not follow the expected URL layout
    #[error("Invalid icon for category '{category}': {reason}")]
    InvalidIcon { category: String, reason: String },

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("Network request failed: {0}. Check your internet connection.")]
    Http(#[from] reqwest::Error),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or .env file.")]
    Config(String),

    /// JSON parsing failed
    #[error("Failed to parse JSON: {0}. Delete the cache file and run 'fsq fetch' again.")]
    JsonParse(#[from] serde_json::Error),

    /// Shared taxonomy error
    #[error(transparent)]
    Taxonomy(#[from] fsq_common::FsqError),
}

impl CliError {
    /// Create an API error
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid icon error
    pub fn invalid_icon(category: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIcon {
            category: category.into(),
            reason: reason.into(),
        }
    }
}
