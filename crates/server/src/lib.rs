//! Movie NER Server
//!
//! Provides the HTTP extraction endpoint, health check and Prometheus metrics.

pub mod http;
pub mod metrics;
pub mod state;

pub use http::create_router;
pub use metrics::{init_metrics, record_error, record_extraction};
pub use state::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use movie_ner_extraction::ExtractionError;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A model behind the extractor failed
    #[error("Model error: {0}")]
    Model(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Short label for the error counter
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::InvalidRequest(_) => "invalid_request",
            ServerError::Model(_) => "model",
            ServerError::Internal(_) => "internal",
        }
    }
}

impl From<ExtractionError> for ServerError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::Model(e) => ServerError::Model(e.to_string()),
            ExtractionError::Pattern(e) => ServerError::Internal(e.to_string()),
        }
    }
}

impl From<ServerError> for StatusCode {
    fn from(err: ServerError) -> Self {
        match err {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Model(_) => StatusCode::BAD_GATEWAY,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = StatusCode::from(self);
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let model = ServerError::from(ExtractionError::Model(movie_ner_core::Error::model("down")));
        assert_eq!(model.kind(), "model");
        assert_eq!(StatusCode::from(model), StatusCode::BAD_GATEWAY);
        assert_eq!(
            StatusCode::from(ServerError::InvalidRequest("empty".into())),
            StatusCode::BAD_REQUEST
        );
    }
}
