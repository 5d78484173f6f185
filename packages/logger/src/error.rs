//! Error types for the Ducks logger

use thiserror::Error;

/// Result type for Ducks logger operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a logger from configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Errors related to JSON deserialization of a config
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured timestamp format contains items chrono cannot render
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Other inconsistencies in the configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}
