use std::time::Duration;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// Why a single provider produced no jobs. Never leaves the aggregator.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider returned {0}")]
    Status(reqwest::StatusCode),

    #[error("unexpected payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("task aborted: {0}")]
    Aborted(String),
}

/// Errors the search pipeline can return to its caller.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("All job providers are temporarily unavailable.")]
    ProvidersUnavailable,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Search(#[from] SearchError),

    #[error("Invalid limit. Use a number between 1 and {max}.")]
    InvalidLimit { max: usize },

    #[error("Malformed request: {0}")]
    BadRequest(String),

    #[error("Method not allowed.")]
    MethodNotAllowed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Search(SearchError::ProvidersUnavailable) => {
                tracing::error!("All providers failed, returning 502");
                StatusCode::BAD_GATEWAY
            }
            AppError::InvalidLimit { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        };

        let body = axum::Json(json!({ "success": false, "error": self.to_string() }));
        (status, body).into_response()
    }
}
