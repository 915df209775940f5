//! Error types for the store client

use thiserror::Error;

/// Failure talking to the collaborator store
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP request failed before a response arrived
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Store answered with a non-success status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Complaint not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Endpoint URL could not be parsed
    #[error("Invalid endpoint '{0}'")]
    InvalidEndpoint(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
