//! Gemini AI provider implementation.
//!
//! Calls the `generateContent` method of the Gemini REST API. The API key is
//! sent in the `x-goog-api-key` header so it never appears in a URL, and so
//! never in an error message relayed to clients.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini provider configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

/// Gemini text provider.
pub struct GeminiTextProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiTextProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        if config.api_key.trim().is_empty() {
            return Err(ProviderError::NotConfigured(
                "Gemini API key not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::NotConfigured(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the configured model and the given method.
    fn api_url(&self, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model,
            method
        )
    }

    fn build_request(prompt: &str, params: &GenerationParams) -> GenerateContentRequest {
        let safety_settings = if params.safety_settings.is_empty() {
            None
        } else {
            Some(
                params
                    .safety_settings
                    .iter()
                    .map(|(category, threshold)| SafetySetting {
                        category: category.clone(),
                        threshold: threshold.clone(),
                    })
                    .collect(),
            )
        };

        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![ContentPart {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: Some(GenerationConfig {
                temperature: Some(params.temperature),
                max_output_tokens: Some(params.max_output_tokens),
            }),
            safety_settings,
        }
    }
}

fn map_send_error(e: reqwest::Error) -> ProviderError {
    if e.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::NetworkError(e.without_url().to_string())
    }
}

fn finish_reason_from(reason: Option<&str>) -> FinishReason {
    match reason {
        None | Some("STOP") => FinishReason::Complete,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("BLOCKLIST") | Some("PROHIBITED_CONTENT") => {
            FinishReason::ContentFilter
        }
        Some(_) => FinishReason::Other,
    }
}

/// Map a decoded `generateContent` body onto a provider response.
///
/// All text parts of the first candidate are concatenated. A blocked prompt
/// or a safety stop is an error; a candidate without text is not.
fn into_provider_response(
    api_response: GenerateContentResponse,
) -> Result<ProviderResponse, ProviderError> {
    if let Some(reason) = api_response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        return Err(ProviderError::ContentFiltered(format!(
            "prompt blocked ({})",
            reason
        )));
    }

    let candidate = api_response.candidates.into_iter().next();

    let finish_reason = finish_reason_from(
        candidate
            .as_ref()
            .and_then(|c| c.finish_reason.as_deref()),
    );

    if finish_reason == FinishReason::ContentFilter {
        return Err(ProviderError::ContentFiltered(
            "response stopped by safety filters".to_string(),
        ));
    }

    let text = candidate.and_then(|c| c.content).and_then(|content| {
        let joined: String = content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        if joined.is_empty() { None } else { Some(joined) }
    });

    let usage = api_response.usage_metadata.unwrap_or_default();

    Ok(ProviderResponse {
        text,
        input_tokens: usage.prompt_token_count.unwrap_or(0),
        output_tokens: usage.candidates_token_count.unwrap_or(0),
        finish_reason,
    })
}

#[async_trait]
impl TextProvider for GeminiTextProvider {
    fn model(&self) -> &str {
        &self.config.model
    }

    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        let request = Self::build_request(prompt, params);
        let url = self.api_url("generateContent");

        tracing::debug!(
            model = %self.config.model,
            prompt_len = prompt.len(),
            temperature = params.temperature,
            max_output_tokens = params.max_output_tokens,
            "Sending request to Gemini API"
        );

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(map_send_error)?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited(body));
        }

        if !status.is_success() {
            return Err(ProviderError::ApiError(format!(
                "Gemini API error {}: {}",
                status, body
            )));
        }

        let api_response: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        into_provider_response(api_response)
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        let url = format!(
            "{}/models/{}",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        );

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, &self.config.api_key)
            .send()
            .await
            .map_err(map_send_error)?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ProviderError::ApiError(format!(
                "Health check failed: {}",
                response.status()
            )))
        }
    }
}

// ============================================================================
// Gemini API Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    safety_settings: Option<Vec<SafetySetting>>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<ContentPart>,
}

/// Parts other than text (inline data, function calls) decode with `text: None`.
#[derive(Debug, Serialize, Deserialize)]
struct ContentPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SafetySetting {
    category: String,
    threshold: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct UsageMetadata {
    prompt_token_count: Option<u64>,
    candidates_token_count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Result<ProviderResponse, ProviderError> {
        into_provider_response(serde_json::from_value(value).unwrap())
    }

    #[test]
    fn request_carries_fixed_generation_config() {
        let request = GeminiTextProvider::build_request("hi", &GenerationParams::syllabus());
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(value["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(value["generationConfig"]["maxOutputTokens"], 3000);
        let temperature = value["generationConfig"]["temperature"].as_f64().unwrap();
        assert!((temperature - 0.6).abs() < 1e-6);
        assert!(value.get("safetySettings").is_none());
    }

    #[test]
    fn joins_all_text_parts_of_first_candidate() {
        let response = decode(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": "Hello " }, { "text": "syllabus" }] },
                "finishReason": "STOP"
            }],
            "usageMetadata": { "promptTokenCount": 12, "candidatesTokenCount": 3, "totalTokenCount": 15 }
        }))
        .unwrap();

        assert_eq!(response.text.as_deref(), Some("Hello syllabus"));
        assert_eq!(response.input_tokens, 12);
        assert_eq!(response.output_tokens, 3);
        assert_eq!(response.finish_reason, FinishReason::Complete);
    }

    #[test]
    fn missing_candidates_yield_no_text() {
        let response = decode(json!({})).unwrap();
        assert!(response.text.is_none());
        assert_eq!(response.input_tokens, 0);
    }

    #[test]
    fn max_tokens_is_not_an_error() {
        let response = decode(json!({
            "candidates": [{ "content": { "parts": [{ "text": "partial" }] }, "finishReason": "MAX_TOKENS" }]
        }))
        .unwrap();
        assert_eq!(response.finish_reason, FinishReason::Length);
        assert_eq!(response.text.as_deref(), Some("partial"));
    }

    #[test]
    fn safety_stop_is_content_filtered() {
        let err = decode(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).unwrap_err();
        assert!(matches!(err, ProviderError::ContentFiltered(_)));
    }

    #[test]
    fn blocked_prompt_is_content_filtered() {
        let err = decode(json!({ "promptFeedback": { "blockReason": "OTHER" } })).unwrap_err();
        assert_eq!(err.to_string(), "Content filtered: prompt blocked (OTHER)");
    }

    #[test]
    fn rejects_blank_api_key() {
        let result = GeminiTextProvider::new(GeminiConfig {
            api_key: " ".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_base: "http://localhost".to_string(),
            timeout: Duration::from_secs(1),
        });
        assert!(matches!(result, Err(ProviderError::NotConfigured(_))));
    }
}
