use axum::Router;

use crate::state::AppState;

pub mod applications;
pub mod health;
pub mod jobs;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /jobs                       list, publish, bulk delete
/// /jobs/{id}                  get, delete
///
/// /applications               apply
/// /applications/worker/{email}  a worker's applications (postings populated)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/jobs", jobs::router())
        .nest("/applications", applications::router())
}
