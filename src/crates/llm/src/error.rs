//! Error types for the model client.

use thiserror::Error;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur when calling the generative-language API.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failed before a response was received.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Gemini API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// The response decoded, but carried no generated text.
    #[error("No content in Gemini response")]
    EmptyResponse,

    /// The response body could not be decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// API key not found in environment.
    #[error("API key not found: {0}")]
    ApiKeyNotFound(String),
}

impl LlmError {
    /// Check if this error carries an upstream HTTP status.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            LlmError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for LlmError {
    fn from(err: serde_json::Error) -> Self {
        LlmError::InvalidResponse(err.to_string())
    }
}
