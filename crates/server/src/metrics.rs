//! Prometheus metrics
//!
//! The recorder is installed once per process; `/metrics` renders it.

use std::time::Duration;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

pub const EXTRACT_REQUESTS_TOTAL: &str = "extract_requests_total";
pub const EXTRACT_MATCHED_TOTAL: &str = "extract_matched_total";
pub const EXTRACT_ERRORS_TOTAL: &str = "extract_errors_total";
pub const EXTRACT_LATENCY_MS: &str = "extract_latency_ms";

const LATENCY_BUCKETS_MS: &[f64] = &[5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0, 2500.0, 5000.0];

static PROMETHEUS: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder
///
/// Returns `None` when another recorder is already installed.
pub fn init_metrics() -> Option<PrometheusHandle> {
    PROMETHEUS
        .get_or_try_init(|| {
            PrometheusBuilder::new()
                .set_buckets_for_metric(
                    Matcher::Full(EXTRACT_LATENCY_MS.to_string()),
                    LATENCY_BUCKETS_MS,
                )?
                .install_recorder()
        })
        .map_err(|e| tracing::warn!(error = %e, "Failed to install Prometheus recorder"))
        .ok()
        .cloned()
}

/// Record one completed extraction
pub fn record_extraction(latency: Duration, matched: bool) {
    metrics::counter!(EXTRACT_REQUESTS_TOTAL).increment(1);
    if matched {
        metrics::counter!(EXTRACT_MATCHED_TOTAL).increment(1);
    }
    metrics::histogram!(EXTRACT_LATENCY_MS).record(latency.as_secs_f64() * 1000.0);
}

pub fn record_error(kind: &'static str) {
    metrics::counter!(EXTRACT_REQUESTS_TOTAL).increment(1);
    metrics::counter!(EXTRACT_ERRORS_TOTAL, "kind" => kind).increment(1);
}

/// `GET /metrics`
pub async fn metrics_handler() -> impl IntoResponse {
    match PROMETHEUS.get() {
        Some(handle) => (StatusCode::OK, handle.render()),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed".to_string(),
        ),
    }
}
