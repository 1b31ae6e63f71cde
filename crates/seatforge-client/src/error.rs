//! Error types for the HTTP adapters

use thiserror::Error;

/// Failure talking to a remote service.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, including timeouts
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("Service returned {status}: {message}")]
    Remote { status: u16, message: String },

    /// The response body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Returns true if the request timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Http(e) if e.is_timeout())
    }
}

/// Result type alias for the HTTP adapters
pub type Result<T> = std::result::Result<T, ClientError>;
