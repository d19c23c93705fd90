//! `/metrics` exposition. Kept in its own test binary because it installs the
//! process-wide metrics recorder.

mod common;

use axum::http::StatusCode;
use common::{app_with, get, post_generate, send_json, send_text};
use std::sync::Arc;
use syllabus_service::services::init_metrics;
use syllabus_service::services::providers::mock::MockTextProvider;

#[tokio::test]
async fn exposes_http_and_generation_metrics() {
    init_metrics().expect("metrics initialize");
    // A second call is a no-op.
    init_metrics().expect("metrics initialize twice");

    let provider = Arc::new(MockTextProvider::replying("Outline"));
    let app = app_with(provider);

    let (status, _) = send_json(app.clone(), post_generate(r#"{"title": "Geology"}"#)).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_json(app.clone(), post_generate(r#"{"title": ""}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, text) = send_text(app, get("/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("http_requests_total"));
    assert!(text.contains(r#"syllabus_generations_total{outcome="success"} 1"#));
    assert!(text.contains(r#"syllabus_generations_total{outcome="invalid_title"} 1"#));
    assert!(text.contains("syllabus_provider_latency_seconds"));
    assert!(text.contains(r#"syllabus_tokens_total{model="mock-model",type="output"}"#));
}
