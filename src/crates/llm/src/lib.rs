//! Gemini text-generation client for taskboard.
//!
//! This crate owns the one outbound dependency of the system: a single
//! synchronous HTTP call to Google's generative-language API. The
//! service depends on the [`TextModel`] trait so the client can be
//! swapped for a scripted model in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use llm::{GeminiClient, GeminiConfig, GenerationOptions, TextModel};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GeminiConfig::from_env("GEMINI_API_KEY")?;
//!     let client = GeminiClient::new(config)?;
//!
//!     let text = client
//!         .generate(
//!             "Analyze this task for priority and time estimation: ...",
//!             &GenerationOptions::structured_json(),
//!         )
//!         .await?;
//!     println!("{text}");
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod gemini;
pub mod model;

// Re-export commonly used types
pub use config::GeminiConfig;
pub use error::{LlmError, Result};
pub use gemini::GeminiClient;
pub use model::{GenerationOptions, TextModel};
