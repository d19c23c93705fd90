use service_core::observability::{init_tracing, shutdown_tracing};
use syllabus_service::config::SyllabusConfig;
use syllabus_service::services::init_metrics;
use syllabus_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let otlp_endpoint = std::env::var("OTLP_ENDPOINT").ok();
    init_tracing("syllabus-service", "info", otlp_endpoint.as_deref());

    let config = SyllabusConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        anyhow::Error::new(e)
    })?;

    init_metrics()?;

    let app = Application::build(config).await.map_err(|e| {
        tracing::error!("Failed to start syllabus-service: {}", e);
        anyhow::Error::new(e)
    })?;

    let result = app.run_until_stopped().await;
    shutdown_tracing();
    result?;

    Ok(())
}
