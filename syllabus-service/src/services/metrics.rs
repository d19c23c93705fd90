//! Prometheus metrics for syllabus-service.
//!
//! HTTP request metrics come from the shared `metrics` middleware and are
//! rendered through the installed recorder; generation-specific metrics live
//! in a dedicated `prometheus` registry. Both are exposed on `/metrics`.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use std::sync::OnceLock;

pub static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();
pub static PROMETHEUS_REGISTRY: OnceLock<Registry> = OnceLock::new();

pub static GENERATIONS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static PROVIDER_LATENCY_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static PROVIDER_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static TOKENS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Call once at startup; later calls are ignored.
pub fn init_metrics() -> Result<(), anyhow::Error> {
    if METRICS_HANDLE.get().is_some() {
        return Ok(());
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("failed to install Prometheus recorder: {}", e))?;
    let _ = METRICS_HANDLE.set(handle);

    let registry = Registry::new();

    let generations = IntCounterVec::new(
        Opts::new(
            "syllabus_generations_total",
            "Syllabus generation requests by outcome",
        ),
        &["outcome"], // success, empty, invalid_title, upstream_error
    )?;

    let provider_latency = HistogramVec::new(
        HistogramOpts::new(
            "syllabus_provider_latency_seconds",
            "Latency of generation provider calls",
        )
        .buckets(vec![0.5, 1.0, 2.5, 5.0, 10.0, 20.0, 30.0, 60.0, 120.0]),
        &["model"],
    )?;

    let provider_errors = IntCounterVec::new(
        Opts::new(
            "syllabus_provider_errors_total",
            "Generation provider failures by kind",
        ),
        &["model", "kind"],
    )?;

    let tokens = IntCounterVec::new(
        Opts::new("syllabus_tokens_total", "Tokens reported by the provider"),
        &["model", "type"], // type: input, output
    )?;

    registry.register(Box::new(generations.clone()))?;
    registry.register(Box::new(provider_latency.clone()))?;
    registry.register(Box::new(provider_errors.clone()))?;
    registry.register(Box::new(tokens.clone()))?;

    let _ = PROMETHEUS_REGISTRY.set(registry);
    let _ = GENERATIONS_TOTAL.set(generations);
    let _ = PROVIDER_LATENCY_SECONDS.set(provider_latency);
    let _ = PROVIDER_ERRORS_TOTAL.set(provider_errors);
    let _ = TOKENS_TOTAL.set(tokens);

    Ok(())
}

/// Render every metric in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string());

    if let Some(registry) = PROMETHEUS_REGISTRY.get() {
        let encoder = TextEncoder::new();
        let mut buffer = Vec::new();
        encoder.encode(&registry.gather(), &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

pub fn record_generation(outcome: &str) {
    if let Some(counter) = GENERATIONS_TOTAL.get() {
        counter.with_label_values(&[outcome]).inc();
    }
}

pub fn record_provider_latency(model: &str, seconds: f64) {
    if let Some(histogram) = PROVIDER_LATENCY_SECONDS.get() {
        histogram.with_label_values(&[model]).observe(seconds);
    }
}

pub fn record_provider_error(model: &str, kind: &str) {
    if let Some(counter) = PROVIDER_ERRORS_TOTAL.get() {
        counter.with_label_values(&[model, kind]).inc();
    }
}

pub fn record_tokens(model: &str, input: u64, output: u64) {
    if let Some(counter) = TOKENS_TOTAL.get() {
        counter.with_label_values(&[model, "input"]).inc_by(input);
        counter.with_label_values(&[model, "output"]).inc_by(output);
    }
}
