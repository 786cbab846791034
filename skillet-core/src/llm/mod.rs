//! LLM provider abstraction for recipe generation and chat.
//!
//! This module provides a trait-based abstraction over text-generation
//! providers (Gemini in production, a fake for tests) so the pipeline code
//! never talks to the network directly.

mod fake;
mod gemini;

pub use fake::FakeProvider;
pub use gemini::GeminiProvider;

use async_trait::async_trait;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

/// Default bound on a single provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Error type for LLM operations.
///
/// Every variant is recoverable: callers treat them uniformly as
/// "generation unavailable" and take their deterministic fallback path.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),
}

/// Trait for text-generation providers.
///
/// Implementations should be stateless and thread-safe. The provider is
/// responsible for making the API call and returning the model's raw text.
#[async_trait]
pub trait LlmProvider: Send + Sync + fmt::Debug {
    /// Send a prompt and get the model's text response.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Provider name (e.g., "gemini", "fake").
    fn provider_name(&self) -> &'static str;

    /// Model name (e.g., "gemini-2.0-flash").
    fn model_name(&self) -> &str;
}

/// Build a provider from environment configuration.
///
/// - `SKILLET_AI_PROVIDER`: "gemini" (default) | "fake"
/// - `GEMINI_API_KEY`: API key for Gemini
/// - `SKILLET_AI_MODEL`: model name (provider-specific)
/// - `SKILLET_AI_TIMEOUT_SECS`: per-call timeout in seconds
///
/// A missing API key yields `LlmError::NotConfigured`; the server treats
/// that as "run with fallbacks only", never as a startup failure.
pub fn create_provider_from_env() -> Result<Box<dyn LlmProvider>, LlmError> {
    let provider = std::env::var("SKILLET_AI_PROVIDER").unwrap_or_else(|_| "gemini".to_string());

    match provider.as_str() {
        "fake" => Ok(Box::new(FakeProvider::default())),
        "gemini" => {
            let api_key = std::env::var("GEMINI_API_KEY")
                .map_err(|_| LlmError::NotConfigured("GEMINI_API_KEY not set".to_string()))?;
            let model = std::env::var("SKILLET_AI_MODEL")
                .unwrap_or_else(|_| "gemini-2.0-flash".to_string());
            let timeout = std::env::var("SKILLET_AI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_TIMEOUT);
            Ok(Box::new(GeminiProvider::new(api_key, model, timeout)))
        }
        other => Err(LlmError::NotConfigured(format!(
            "Unknown provider: {}",
            other
        ))),
    }
}
