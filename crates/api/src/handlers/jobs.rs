//! Handlers for the `/jobs` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use hirelink_core::error::CoreError;
use hirelink_db::models::job_posting::{CreateJobPosting, JobPosting};
use hirelink_db::repositories::JobPostingRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::parse_id;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /api/jobs
pub async fn publish(
    State(state): State<AppState>,
    Json(input): Json<CreateJobPosting>,
) -> AppResult<(StatusCode, Json<JobPosting>)> {
    let posting = JobPostingRepo::create(&state.pool, &input).await?;
    tracing::info!(id = %posting.id, company = %posting.company, "Job posting published");
    Ok((StatusCode::CREATED, Json(posting)))
}

/// GET /api/jobs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<JobPosting>>> {
    let postings = JobPostingRepo::list(&state.pool).await?;
    Ok(Json(postings))
}

/// GET /api/jobs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<JobPosting>> {
    let id = parse_id(&id)?;
    let posting = JobPostingRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Job posting",
            id,
        }))?;
    Ok(Json(posting))
}

/// DELETE /api/jobs/{id}
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;
    let deleted = JobPostingRepo::delete_by_id(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse::new("Job posting deleted successfully")))
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Job posting",
            id,
        }))
    }
}

/// DELETE /api/jobs
pub async fn delete_all(State(state): State<AppState>) -> AppResult<Json<MessageResponse>> {
    let count = JobPostingRepo::delete_all(&state.pool).await?;
    tracing::info!(count, "All job postings deleted");
    Ok(Json(MessageResponse::new(
        "All job postings deleted successfully",
    )))
}
