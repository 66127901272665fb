//! Application model and DTOs.

use hirelink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::job_posting::JobPosting;

/// Lifecycle status of an application.
///
/// Stored as lowercase text. New applications always start as `Pending`;
/// no operation in the current API surface mutates the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Viewed,
    Interviewing,
    Rejected,
    Hired,
}

/// A row from the `applications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: DbId,
    pub job_posting_id: DbId,
    pub worker_email: String,
    pub application_date: Timestamp,
    pub status: ApplicationStatus,
}

/// DTO for submitting a new application.
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub job_posting_id: DbId,
    pub worker_email: String,
}

/// An application with its posting reference resolved at read time.
///
/// `job_posting` is `None` when the referenced posting has been deleted
/// since the application was created (the existence check at creation is
/// not transactional with later deletes).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationWithPosting {
    pub id: DbId,
    pub job_posting: Option<JobPosting>,
    pub worker_email: String,
    pub application_date: Timestamp,
    pub status: ApplicationStatus,
}
