//! Application startup and lifecycle management.

use crate::config::SyllabusConfig;
use crate::handlers::{
    app::index,
    generate::generate,
    health::{health_check, readiness_check},
    metrics::metrics as metrics_endpoint,
};
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    metrics::metrics_middleware,
    security_headers::security_headers_middleware,
    tracing::{http_trace_layer, request_id_middleware},
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::services::ServeDir;

/// Shared application state. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: SyllabusConfig,
    pub text_provider: Arc<dyn TextProvider>,
}

impl AppState {
    pub fn new(config: SyllabusConfig, text_provider: Arc<dyn TextProvider>) -> Self {
        Self {
            config,
            text_provider,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = ServeDir::new(&state.config.assets.static_dir);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(metrics_endpoint))
        // Oversized titles must still reach validation and get the JSON 400.
        .route(
            "/api/generate",
            post(generate).layer(DefaultBodyLimit::disable()),
        )
        .nest_service("/static", static_dir)
        .layer(from_fn(security_headers_middleware))
        .layer(from_fn(metrics_middleware))
        .layer(http_trace_layer())
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the Gemini provider.
    pub async fn build(config: SyllabusConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.gemini.api_key.clone(),
            model: config.gemini.model.clone(),
            api_base: config.gemini.api_base.clone(),
            timeout: Duration::from_secs(config.gemini.timeout_secs),
        };
        let text_provider = GeminiTextProvider::new(gemini_config)
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        tracing::info!(
            model = %config.gemini.model,
            "Initialized Gemini text provider"
        );

        Self::build_with_provider(config, Arc::new(text_provider)).await
    }

    /// Build the application around an already constructed provider.
    pub async fn build_with_provider(
        config: SyllabusConfig,
        text_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        // Port 0 binds a random port (tests).
        let address = config.common.address();
        let listener = TcpListener::bind(&address).await.map_err(|e| {
            tracing::error!("Failed to bind HTTP listener to {}: {}", address, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Syllabus service listening on {}:{}", config.common.host, port);

        Ok(Self {
            port,
            listener,
            state: AppState::new(config, text_provider),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Serve until Ctrl+C or SIGTERM.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);

        axum::serve(self.listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                tracing::error!("HTTP server error: {}", e);
                std::io::Error::other(format!("HTTP server error: {}", e))
            })
    }
}
