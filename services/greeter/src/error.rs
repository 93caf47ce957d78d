//! Error types for the greeter service

use std::time::Duration;

/// Errors that can occur in the greeter service
#[derive(Debug, thiserror::Error)]
pub enum GreeterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Page error: {0}")]
    Page(String),
}

/// Result type alias for greeter operations
pub type Result<T> = std::result::Result<T, GreeterError>;
