pub mod jobs;

use axum::Router;
use axum::routing::get;

use crate::pipeline::JobSearch;
use crate::routes::method_not_allowed;

pub fn router(search: JobSearch) -> Router {
    let api = Router::new()
        .route("/jobs", get(jobs::search).fallback(method_not_allowed))
        .with_state(search);

    Router::new().nest("/api", api)
}
