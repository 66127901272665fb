//! Route definitions for the `/applications` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::applications;
use crate::state::AppState;

/// Routes mounted at `/applications`.
///
/// ```text
/// POST   /                 -> create
/// GET    /worker/{email}   -> list_by_worker
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(applications::create))
        .route("/worker/{email}", get(applications::list_by_worker))
}
