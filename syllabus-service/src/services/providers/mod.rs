//! Text generation provider abstraction.
//!
//! Handlers only see `dyn TextProvider`, so the Gemini backend can be swapped
//! for the in-process mock in tests.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Content filtered: {0}")]
    ContentFiltered(String),

    #[error("Request to provider timed out")]
    Timeout,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProviderError::NotConfigured(_) => "not_configured",
            ProviderError::ApiError(_) => "api_error",
            ProviderError::RateLimited(_) => "rate_limited",
            ProviderError::ContentFiltered(_) => "content_filtered",
            ProviderError::Timeout => "timeout",
            ProviderError::NetworkError(_) => "network_error",
            ProviderError::InvalidResponse(_) => "invalid_response",
        }
    }
}

/// Result of a single generation call.
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Generated text, `None` when the provider returned no text parts.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: u64,

    /// Output tokens generated.
    pub output_tokens: u64,

    /// Finish reason.
    pub finish_reason: FinishReason,
}

/// Reason why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
    Other,
}

impl FinishReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Complete => "complete",
            FinishReason::Length => "length",
            FinishReason::ContentFilter => "content_filter",
            FinishReason::Other => "other",
        }
    }
}

/// Generation parameters for a request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Safety overrides as `(category, threshold)` pairs. Empty means the
    /// provider defaults apply.
    pub safety_settings: Vec<(String, String)>,
}

impl GenerationParams {
    /// Fixed settings for syllabus generation.
    pub fn syllabus() -> Self {
        Self {
            temperature: 0.6,
            max_output_tokens: 3000,
            safety_settings: Vec::new(),
        }
    }
}

/// Trait for text generation providers (e.g., Gemini).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Model identifier, for logs and metrics.
    fn model(&self) -> &str;

    /// Generate a text response. Makes exactly one upstream attempt.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Check that the provider is reachable and the credentials are accepted.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
