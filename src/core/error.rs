//! Error types and error handling for the Pagemill service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status
//! mapping) is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for Pagemill operations
pub type Result<T> = std::result::Result<T, PagemillError>;

/// Main error type for the Pagemill service
#[derive(Error, Debug)]
pub enum PagemillError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("No words or images extracted from document")]
    EmptyDocument,

    #[error("Document fetch failed: {0}")]
    FetchFailed(#[from] reqwest::Error),

    #[error("Document too large: {size} bytes exceeds limit of {limit}")]
    DocumentTooLarge { size: usize, limit: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl PagemillError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            PagemillError::InvalidRequest(_) | PagemillError::ConfigError(_)
        )
    }

    /// Check if this is an unprocessable-input error
    pub fn is_unprocessable(&self) -> bool {
        matches!(
            self,
            PagemillError::EmptyDocument | PagemillError::DocumentTooLarge { .. }
        )
    }

    /// Check if this is an upstream failure (document fetch)
    pub fn is_upstream(&self) -> bool {
        matches!(self, PagemillError::FetchFailed(_))
    }
}
