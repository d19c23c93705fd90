use crate::models::CourseTitle;
use crate::services::metrics;
use crate::services::prompt::build_prompt;
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use std::time::Instant;

/// Generate the syllabus text for a validated title.
///
/// Exactly one provider call is made. A response without text yields an
/// empty string rather than an error.
pub async fn generate_syllabus(
    provider: &dyn TextProvider,
    title: &CourseTitle,
) -> Result<String, ProviderError> {
    let prompt = build_prompt(title.as_str());
    let params = GenerationParams::syllabus();
    let model = provider.model();

    let started = Instant::now();
    let result = provider.generate(&prompt, &params).await;
    metrics::record_provider_latency(model, started.elapsed().as_secs_f64());

    match result {
        Ok(response) => {
            metrics::record_tokens(model, response.input_tokens, response.output_tokens);
            tracing::debug!(
                model,
                finish_reason = response.finish_reason.as_str(),
                input_tokens = response.input_tokens,
                output_tokens = response.output_tokens,
                "Provider call completed"
            );
            Ok(response
                .text
                .map(|text| text.trim().to_string())
                .unwrap_or_default())
        }
        Err(e) => {
            metrics::record_provider_error(model, e.kind());
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::mock::MockTextProvider;

    fn title(raw: &str) -> CourseTitle {
        CourseTitle::parse(raw).unwrap()
    }

    #[tokio::test]
    async fn sends_prompt_with_fixed_params() {
        let provider = MockTextProvider::replying("  Outline\n");

        let content = generate_syllabus(&provider, &title("Organic Chemistry"))
            .await
            .unwrap();

        assert_eq!(content, "Outline");
        assert_eq!(provider.calls(), 1);
        assert_eq!(
            provider.last_prompt().unwrap(),
            build_prompt("Organic Chemistry")
        );
        assert_eq!(provider.last_params().unwrap(), GenerationParams::syllabus());
    }

    #[tokio::test]
    async fn missing_text_becomes_empty_content() {
        let provider = MockTextProvider::empty();
        let content = generate_syllabus(&provider, &title("Statistics")).await.unwrap();
        assert_eq!(content, "");
    }

    #[tokio::test]
    async fn failure_is_returned_after_a_single_attempt() {
        let provider = MockTextProvider::failing("quota exceeded");

        let err = generate_syllabus(&provider, &title("Statistics"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "API error: quota exceeded");
        assert_eq!(provider.calls(), 1);
    }
}
