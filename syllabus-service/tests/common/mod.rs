#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use service_core::config::Config;
use std::sync::Arc;
use syllabus_service::config::{AssetSettings, GeminiSettings, SyllabusConfig};
use syllabus_service::services::providers::mock::MockTextProvider;
use syllabus_service::services::providers::TextProvider;
use syllabus_service::{build_router, AppState};
use tower::ServiceExt;

/// Config for tests: random port, and a Gemini endpoint nothing listens on.
pub fn test_config() -> SyllabusConfig {
    SyllabusConfig {
        common: Config {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        gemini: GeminiSettings {
            api_key: "test-api-key".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
        },
        assets: AssetSettings {
            static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        },
    }
}

pub fn app_with(provider: Arc<MockTextProvider>) -> Router {
    let provider: Arc<dyn TextProvider> = provider;
    build_router(AppState::new(test_config(), provider))
}

pub fn post_generate(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Send a request through the router and decode the JSON body.
pub async fn send_json(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

/// Send a request through the router and return the body as text.
pub async fn send_text(app: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&bytes).into_owned())
}
