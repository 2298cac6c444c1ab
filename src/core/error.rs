//! Custom error types for Postula
//!
//! Provides a unified error handling system across all modules.

use thiserror::Error;

/// Main error type for Postula operations
#[derive(Error, Debug)]
pub enum PostulaError {
    /// Browser process could not be started
    #[error("browser launch error: {0}")]
    Launch(String),

    /// An expected element never appeared within the wait bound
    #[error("navigation timeout: {0}")]
    NavigationTimeout(String),

    /// An expected panel or sub-element was missing from the page
    #[error("extraction error: {0}")]
    Extraction(String),

    /// Chat-completion request failed or returned no usable completion
    #[error("service error: {0}")]
    Service(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// URL construction errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for Postula operations
pub type Result<T> = std::result::Result<T, PostulaError>;

impl PostulaError {
    /// Create a browser launch error
    pub fn launch(msg: impl Into<String>) -> Self {
        Self::Launch(msg.into())
    }

    /// Create a navigation timeout error
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::NavigationTimeout(msg.into())
    }

    /// Create an extraction error
    pub fn extraction(msg: impl Into<String>) -> Self {
        Self::Extraction(msg.into())
    }

    /// Create a service error
    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
