//! Google Gemini client implementation.
//!
//! Issues one synchronous `generateContent` call per request against
//! the Gemini API and returns the first candidate's first text part.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::{GeminiClient, GeminiConfig, GenerationOptions, TextModel};
//!
//! let config = GeminiConfig::from_env("GEMINI_API_KEY")?;
//! let client = GeminiClient::new(config)?;
//!
//! let text = client
//!     .generate("Summarize this task", &GenerationOptions::structured_json())
//!     .await?;
//! ```

use crate::config::GeminiConfig;
use crate::error::{LlmError, Result};
use crate::model::{GenerationOptions, TextModel};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Google Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(LlmError::Http)?;

        Ok(Self { config, client })
    }

    fn request_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        )
    }

    /// Pull the first candidate's first text part out of a response.
    fn extract_text(response: GeminiResponse) -> Result<String> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .and_then(|p| p.text)
            .ok_or(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl TextModel for GeminiClient {
    async fn generate(&self, prompt: &str, options: &GenerationOptions) -> Result<String> {
        let req_body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: options.temperature,
                max_output_tokens: options.max_output_tokens,
                response_mime_type: options.response_mime_type.clone(),
            },
        };

        tracing::debug!(model = %self.config.model, "calling Gemini API");

        let response = self
            .client
            .post(self.request_url())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&req_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Gemini API returned an error");
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let gemini_resp: GeminiResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        Self::extract_text(gemini_resp)
    }
}

// Gemini API wire types. The generation config keys mirror what the
// endpoint accepts: camelCase except `response_mime_type`.
#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_mime_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiCandidateContent>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidateContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}
