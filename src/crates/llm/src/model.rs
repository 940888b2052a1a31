//! The `TextModel` trait and generation parameters.
//!
//! The service depends on this trait rather than a concrete client so
//! that tests can substitute a scripted model.

use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Decoding parameters for a single generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOptions {
    /// Sampling temperature. Near-zero biases toward deterministic output.
    pub temperature: f32,

    /// Cap on generated output tokens.
    pub max_output_tokens: u32,

    /// Response MIME type hint (e.g. "application/json" to favor
    /// JSON-shaped output).
    pub response_mime_type: Option<String>,
}

impl GenerationOptions {
    /// Options biased toward deterministic, JSON-shaped output.
    pub fn structured_json() -> Self {
        Self {
            temperature: 0.1,
            max_output_tokens: 2048,
            response_mime_type: Some("application/json".to_string()),
        }
    }
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 1024,
            response_mime_type: None,
        }
    }
}

/// A text-generation model that answers a single prompt with raw text.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generate text for the given prompt.
    ///
    /// Returns the first generated text span. An upstream non-success
    /// status surfaces as [`crate::LlmError::Api`]; a response without
    /// any text span surfaces as [`crate::LlmError::EmptyResponse`].
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_json_options() {
        let opts = GenerationOptions::structured_json();
        assert!(opts.temperature <= 0.1);
        assert_eq!(opts.max_output_tokens, 2048);
        assert_eq!(opts.response_mime_type.as_deref(), Some("application/json"));
    }
}
