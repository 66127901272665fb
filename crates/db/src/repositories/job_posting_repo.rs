//! Repository for the `job_postings` table.

use hirelink_core::types::DbId;
use hirelink_core::validation::require_non_empty;
use sqlx::PgPool;

use crate::error::DbError;
use crate::models::job_posting::{CreateJobPosting, JobPosting};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, company, description, location, posted_at";

/// Provides CRUD operations for job postings.
pub struct JobPostingRepo;

impl JobPostingRepo {
    /// Insert a new posting, returning the created row.
    ///
    /// All four text fields are required; a missing or whitespace-only
    /// field fails with a validation error before any query is issued.
    pub async fn create(pool: &PgPool, input: &CreateJobPosting) -> Result<JobPosting, DbError> {
        require_non_empty("title", &input.title)?;
        require_non_empty("company", &input.company)?;
        require_non_empty("description", &input.description)?;
        require_non_empty("location", &input.location)?;

        let query = format!(
            "INSERT INTO job_postings (title, company, description, location)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let posting = sqlx::query_as::<_, JobPosting>(&query)
            .bind(&input.title)
            .bind(&input.company)
            .bind(&input.description)
            .bind(&input.location)
            .fetch_one(pool)
            .await?;
        Ok(posting)
    }

    /// List all postings in insertion order (`posted_at`, then `id` as a
    /// tie-breaker so the order is stable within a single timestamp).
    pub async fn list(pool: &PgPool) -> Result<Vec<JobPosting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_postings ORDER BY posted_at, id");
        sqlx::query_as::<_, JobPosting>(&query).fetch_all(pool).await
    }

    /// Find a posting by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobPosting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM job_postings WHERE id = $1");
        sqlx::query_as::<_, JobPosting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a single posting. Returns `true` if a row was removed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_postings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every posting. Returns the count of deleted rows; deleting
    /// from an already-empty table succeeds with a count of zero.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM job_postings").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
