use axum::{body::Bytes, extract::State, Json};
use service_core::error::AppError;

use crate::dtos::{GenerateRequest, GenerateResponse};
use crate::models::CourseTitle;
use crate::services::{generate_syllabus, metrics};
use crate::startup::AppState;

/// `POST /api/generate`.
///
/// The body is read raw so that a missing or malformed payload becomes a
/// "title required" 400 instead of an extractor rejection.
#[tracing::instrument(skip(state, body))]
pub async fn generate(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<GenerateResponse>, AppError> {
    let request = GenerateRequest::from_body(&body);

    let title = CourseTitle::parse(request.raw_title()).map_err(|e| {
        tracing::debug!(reason = %e, "Rejected course title");
        metrics::record_generation("invalid_title");
        AppError::BadRequest(anyhow::Error::new(e))
    })?;

    tracing::info!(
        title = %title,
        model = state.text_provider.model(),
        "Generating course outline"
    );

    match generate_syllabus(state.text_provider.as_ref(), &title).await {
        Ok(content) => {
            metrics::record_generation(if content.is_empty() { "empty" } else { "success" });
            Ok(Json(GenerateResponse {
                title: title.into_inner(),
                content,
            }))
        }
        Err(e) => {
            tracing::error!(
                error = ?e,
                title = %title,
                model = state.text_provider.model(),
                "Syllabus generation failed"
            );
            metrics::record_generation("upstream_error");
            Err(AppError::UpstreamError(anyhow::Error::new(e)))
        }
    }
}
