//! Job posting model and DTOs.

use hirelink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `job_postings` table.
///
/// Wire field names are camelCase to match the public API shape.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: DbId,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub posted_at: Timestamp,
}

/// DTO for publishing a new job posting. All four fields are required
/// and must be non-empty; a missing field deserializes to an empty
/// string so presence checks report it as a validation failure instead
/// of a body rejection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateJobPosting {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
}
