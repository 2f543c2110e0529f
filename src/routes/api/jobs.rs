use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::error::AppError;
use crate::models::search::{JobSearchParams, MAX_LIMIT, SearchEnvelope, SearchRequest, parse_limit};
use crate::pipeline::JobSearch;

/// GET /api/jobs?search=&location=&limit=
///
/// The limit is validated before any provider is contacted.
pub async fn search(
    State(search): State<JobSearch>,
    params: Result<Query<JobSearchParams>, QueryRejection>,
) -> Result<Json<SearchEnvelope>, AppError> {
    let Query(params) = params.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let limit = parse_limit(params.limit.as_deref())
        .ok_or(AppError::InvalidLimit { max: MAX_LIMIT })?;

    let request = SearchRequest::new(
        params.search.as_deref().unwrap_or_default().trim(),
        params.location.as_deref().unwrap_or_default().trim(),
        limit,
    );

    let results = search.search(&request).await?;
    Ok(Json(results.into()))
}
