//! Mock provider implementation for testing.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

enum Behavior {
    Reply(Option<String>),
    Fail(String),
}

/// Deterministic text provider. Records how often it was called and the last
/// prompt and parameters it received.
pub struct MockTextProvider {
    behavior: Behavior,
    healthy: bool,
    calls: AtomicUsize,
    last_call: Mutex<Option<(String, GenerationParams)>>,
}

impl MockTextProvider {
    fn with_behavior(behavior: Behavior) -> Self {
        Self {
            behavior,
            healthy: true,
            calls: AtomicUsize::new(0),
            last_call: Mutex::new(None),
        }
    }

    /// Always answers with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self::with_behavior(Behavior::Reply(Some(text.into())))
    }

    /// Answers successfully but without any text.
    pub fn empty() -> Self {
        Self::with_behavior(Behavior::Reply(None))
    }

    /// Fails every call with an API error carrying `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        let mut provider = Self::with_behavior(Behavior::Fail(message.into()));
        provider.healthy = false;
        provider
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_call
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|(prompt, _)| prompt.clone()))
    }

    pub fn last_params(&self) -> Option<GenerationParams> {
        self.last_call
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|(_, params)| params.clone()))
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    fn model(&self) -> &str {
        "mock-model"
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_call.lock() {
            *last = Some((prompt.to_string(), params.clone()));
        }

        match &self.behavior {
            Behavior::Reply(text) => Ok(ProviderResponse {
                text: text.clone(),
                input_tokens: prompt.len() as u64 / 4,
                output_tokens: text.as_ref().map(|t| t.len() as u64 / 4).unwrap_or(0),
                finish_reason: FinishReason::Complete,
            }),
            Behavior::Fail(message) => Err(ProviderError::ApiError(message.clone())),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        if self.healthy {
            Ok(())
        } else {
            Err(ProviderError::NotConfigured(
                "Mock text provider unavailable".to_string(),
            ))
        }
    }
}
