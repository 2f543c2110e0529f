pub mod api;

use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;

use crate::error::AppError;
use crate::pipeline::JobSearch;

/// Fallback for unsupported methods so 405s carry the usual error body.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub fn router(search: JobSearch) -> Router {
    Router::new()
        .route("/healthz", get(healthz).fallback(method_not_allowed))
        .merge(api::router(search))
}
