//! Handlers for the `/applications` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use hirelink_db::models::application::{Application, ApplicationWithPosting, CreateApplication};
use hirelink_db::repositories::ApplicationRepo;

use crate::error::AppResult;
use crate::handlers::parse_id;
use crate::state::AppState;

/// Request body for POST /api/applications.
///
/// The posting id arrives as an opaque string and is parsed here so a
/// malformed identifier surfaces as a 400, not a body-deserialization
/// rejection. Missing fields deserialize to empty strings for the same
/// reason.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateApplicationRequest {
    pub job_posting_id: String,
    pub worker_email: String,
}

/// POST /api/applications
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateApplicationRequest>,
) -> AppResult<(StatusCode, Json<Application>)> {
    let job_posting_id = parse_id(&input.job_posting_id)?;
    let application = ApplicationRepo::create(
        &state.pool,
        &CreateApplication {
            job_posting_id,
            worker_email: input.worker_email,
        },
    )
    .await?;
    tracing::info!(id = %application.id, posting = %job_posting_id, "Application submitted");
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/applications/worker/{email}
///
/// An unknown worker gets an empty list with 200, not a 404.
pub async fn list_by_worker(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<Vec<ApplicationWithPosting>>> {
    let applications = ApplicationRepo::list_by_worker_email(&state.pool, &email).await?;
    Ok(Json(applications))
}
