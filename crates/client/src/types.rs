//! Wire shapes for the Hirelink API.
//!
//! Identifiers stay opaque strings on this side of the wire; the server
//! decides what a well-formed identifier is.

use hirelink_core::types::Timestamp;
use serde::{Deserialize, Serialize};

/// A published job posting as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub posted_at: Timestamp,
}

/// Payload for publishing a job posting.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJobPosting {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
}

/// Payload for submitting an application.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub job_posting_id: String,
    pub worker_email: String,
}

/// A created application as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_posting_id: String,
    pub worker_email: String,
    pub application_date: Timestamp,
    pub status: String,
}

/// An application from the worker-search endpoint, with the posting
/// reference resolved server-side. `job_posting` is `None` when the
/// posting has been deleted since the application was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationWithPosting {
    pub id: String,
    pub job_posting: Option<JobPosting>,
    pub worker_email: String,
    pub application_date: Timestamp,
    pub status: String,
}

/// Confirmation payload for delete endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
