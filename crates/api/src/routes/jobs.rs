//! Route definitions for the `/jobs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::jobs;
use crate::state::AppState;

/// Routes mounted at `/jobs`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> publish
/// DELETE /        -> delete_all
/// GET    /{id}    -> get_by_id
/// DELETE /{id}    -> delete_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(jobs::list).post(jobs::publish).delete(jobs::delete_all),
        )
        .route("/{id}", get(jobs::get_by_id).delete(jobs::delete_by_id))
}
