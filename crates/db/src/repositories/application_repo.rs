//! Repository for the `applications` table.

use hirelink_core::error::CoreError;
use hirelink_core::types::{DbId, Timestamp};
use hirelink_core::validation::require_non_empty;
use sqlx::{FromRow, PgPool};

use crate::error::DbError;
use crate::models::application::{
    Application, ApplicationStatus, ApplicationWithPosting, CreateApplication,
};
use crate::models::job_posting::JobPosting;
use crate::repositories::JobPostingRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, job_posting_id, worker_email, application_date, status";

/// Flat row for the applications-with-posting join. The posting columns
/// are nullable because the join is a LEFT JOIN: an application may
/// outlive the posting it references.
#[derive(FromRow)]
struct JoinedRow {
    id: DbId,
    job_posting_id: DbId,
    worker_email: String,
    application_date: Timestamp,
    status: ApplicationStatus,
    posting_title: Option<String>,
    posting_company: Option<String>,
    posting_description: Option<String>,
    posting_location: Option<String>,
    posting_posted_at: Option<Timestamp>,
}

impl From<JoinedRow> for ApplicationWithPosting {
    fn from(row: JoinedRow) -> Self {
        // All posting columns are NULL together (the whole joined row is
        // absent), so title alone decides whether the posting resolved.
        let job_posting = row.posting_title.map(|title| JobPosting {
            id: row.job_posting_id,
            title,
            company: row.posting_company.unwrap_or_default(),
            description: row.posting_description.unwrap_or_default(),
            location: row.posting_location.unwrap_or_default(),
            posted_at: row.posting_posted_at.unwrap_or_default(),
        });
        ApplicationWithPosting {
            id: row.id,
            job_posting,
            worker_email: row.worker_email,
            application_date: row.application_date,
            status: row.status,
        }
    }
}

/// Provides create and query operations for applications.
pub struct ApplicationRepo;

impl ApplicationRepo {
    /// Insert a new application with status `pending`.
    ///
    /// The referenced posting must exist at creation time; the check and
    /// the insert are two separate statements, so a posting deleted in
    /// between still yields an application (accepted race, no FK).
    pub async fn create(pool: &PgPool, input: &CreateApplication) -> Result<Application, DbError> {
        let posting = JobPostingRepo::find_by_id(pool, input.job_posting_id).await?;
        if posting.is_none() {
            return Err(CoreError::NotFound {
                entity: "Job posting",
                id: input.job_posting_id,
            }
            .into());
        }
        require_non_empty("workerEmail", &input.worker_email)?;

        let query = format!(
            "INSERT INTO applications (job_posting_id, worker_email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let application = sqlx::query_as::<_, Application>(&query)
            .bind(input.job_posting_id)
            .bind(&input.worker_email)
            .fetch_one(pool)
            .await?;
        Ok(application)
    }

    /// List a worker's applications with each posting reference resolved.
    ///
    /// Matching is exact and case-sensitive on the stored email. A worker
    /// with no applications gets an empty list, not an error.
    pub async fn list_by_worker_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Vec<ApplicationWithPosting>, sqlx::Error> {
        let rows = sqlx::query_as::<_, JoinedRow>(
            "SELECT a.id, a.job_posting_id, a.worker_email, a.application_date, a.status,
                    p.title AS posting_title,
                    p.company AS posting_company,
                    p.description AS posting_description,
                    p.location AS posting_location,
                    p.posted_at AS posting_posted_at
             FROM applications a
             LEFT JOIN job_postings p ON p.id = a.job_posting_id
             WHERE a.worker_email = $1
             ORDER BY a.application_date, a.id",
        )
        .bind(email)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(ApplicationWithPosting::from).collect())
    }
}
