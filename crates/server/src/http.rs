//! HTTP Endpoints
//!
//! REST API for movie query entity extraction.

use std::time::{Duration, Instant};

use axum::{
    extract::{Json, State},
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use movie_ner_core::{CatalogRecord, TaggedToken};

use crate::metrics::{metrics_handler, record_error, record_extraction};
use crate::state::AppState;
use crate::ServerError;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let cors_layer = build_cors_layer(&state.config.server.cors_origins, state.config.server.cors_enabled);
    let timeout = Duration::from_secs(state.config.server.timeout_seconds);

    Router::new()
        .route("/api/extract", post(extract))
        // Health check
        .route("/health", get(health_check))
        // Prometheus metrics
        .route("/metrics", get(metrics_handler))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(timeout))
        .layer(cors_layer)
        .with_state(state)
}

/// Build CORS layer from configured origins
///
/// - If cors_enabled is false, returns permissive layer (for dev)
/// - If cors_origins is empty, defaults to localhost:3000
/// - Otherwise, uses the configured origins
fn build_cors_layer(origins: &[String], enabled: bool) -> CorsLayer {
    if !enabled {
        tracing::warn!("CORS is disabled - allowing all origins (NOT FOR PRODUCTION)");
        return CorsLayer::permissive();
    }

    let parsed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| {
            origin.parse::<HeaderValue>().ok().or_else(|| {
                tracing::warn!("Invalid CORS origin: {}", origin);
                None
            })
        })
        .collect();

    if parsed_origins.is_empty() {
        tracing::info!("No valid CORS origins configured, defaulting to localhost:3000");
        return CorsLayer::new()
            .allow_origin(HeaderValue::from_static("http://localhost:3000"))
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any);
    }

    tracing::info!("CORS configured with {} origins", parsed_origins.len());
    CorsLayer::new()
        .allow_origin(parsed_origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Extraction request
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// Extraction response
#[derive(Debug, Serialize, Deserialize)]
pub struct ExtractResponse {
    pub tokens: Vec<TaggedToken>,
    pub matched_record: Option<CatalogRecord>,
}

/// Label the tokens of a query
///
/// Extraction is synchronous and may block on the model sidecar, so it runs
/// on the blocking pool.
async fn extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ExtractResponse>, ServerError> {
    let started = Instant::now();
    let extractor = state.extractor.clone();

    let result = tokio::task::spawn_blocking(move || extractor.extract(&request.text))
        .await
        .map_err(|e| ServerError::Internal(format!("Extraction task failed: {}", e)))
        .and_then(|result| result.map_err(ServerError::from));

    match result {
        Ok(extraction) => {
            record_extraction(started.elapsed(), extraction.matched_record.is_some());
            Ok(Json(ExtractResponse {
                tokens: extraction.tokens,
                matched_record: extraction.matched_record,
            }))
        }
        Err(e) => {
            tracing::error!(error = %e, "Extraction failed");
            record_error(e.kind());
            Err(e)
        }
    }
}

/// Health check
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    let rows = state.extractor.catalog().len();
    let status = if rows > 0 { "healthy" } else { "degraded" };
    let status_code = if rows > 0 {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status_code,
        Json(serde_json::json!({
            "status": status,
            "version": env!("CARGO_PKG_VERSION"),
            "environment": format!("{:?}", state.config.environment),
            "checks": {
                "catalog": { "rows": rows },
                "models": { "provider": state.config.models.provider },
            }
        })),
    )
}
