//! Integration tests for application creation and worker queries.

use assert_matches::assert_matches;
use chrono::Utc;
use hirelink_core::error::CoreError;
use sqlx::PgPool;
use uuid::Uuid;

use hirelink_db::models::application::{ApplicationStatus, CreateApplication};
use hirelink_db::models::job_posting::CreateJobPosting;
use hirelink_db::repositories::{ApplicationRepo, JobPostingRepo};
use hirelink_db::DbError;

fn engineer_posting() -> CreateJobPosting {
    CreateJobPosting {
        title: "Engineer".to_string(),
        company: "Acme".to_string(),
        description: "Build things".to_string(),
        location: "Remote".to_string(),
    }
}

async fn count_applications(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM applications")
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn create_with_unknown_posting_fails_and_persists_nothing(pool: PgPool) {
    let input = CreateApplication {
        job_posting_id: Uuid::new_v4(),
        worker_email: "a@b.com".to_string(),
    };

    let err = ApplicationRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(
        err,
        DbError::Core(CoreError::NotFound { entity: "Job posting", .. })
    );
    assert_eq!(count_applications(&pool).await, 0);
}

#[sqlx::test]
async fn create_with_empty_email_fails_validation(pool: PgPool) {
    let posting = JobPostingRepo::create(&pool, &engineer_posting())
        .await
        .unwrap();
    let input = CreateApplication {
        job_posting_id: posting.id,
        worker_email: "  ".to_string(),
    };

    let err = ApplicationRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(err, DbError::Core(CoreError::Validation(_)));
    assert_eq!(count_applications(&pool).await, 0);
}

#[sqlx::test]
async fn create_defaults_to_pending_status(pool: PgPool) {
    let posting = JobPostingRepo::create(&pool, &engineer_posting())
        .await
        .unwrap();

    let before = Utc::now();
    let application = ApplicationRepo::create(
        &pool,
        &CreateApplication {
            job_posting_id: posting.id,
            worker_email: "a@b.com".to_string(),
        },
    )
    .await
    .unwrap();

    assert_eq!(application.status, ApplicationStatus::Pending);
    assert_eq!(application.job_posting_id, posting.id);
    assert!(application.application_date >= before);
}

#[sqlx::test]
async fn list_by_worker_email_matches_exactly_and_populates(pool: PgPool) {
    let posting = JobPostingRepo::create(&pool, &engineer_posting())
        .await
        .unwrap();

    for email in ["a@b.com", "A@B.COM", "other@b.com"] {
        ApplicationRepo::create(
            &pool,
            &CreateApplication {
                job_posting_id: posting.id,
                worker_email: email.to_string(),
            },
        )
        .await
        .unwrap();
    }

    // Case-sensitive equality: only the exact spelling matches.
    let apps = ApplicationRepo::list_by_worker_email(&pool, "a@b.com")
        .await
        .unwrap();
    assert_eq!(apps.len(), 1);
    assert_eq!(apps[0].worker_email, "a@b.com");

    let populated = apps[0].job_posting.as_ref().expect("posting should resolve");
    assert_eq!(populated.id, posting.id);
    assert_eq!(populated.title, "Engineer");
    assert_eq!(populated.company, "Acme");
}

#[sqlx::test]
async fn list_by_worker_email_returns_empty_for_unknown_worker(pool: PgPool) {
    let apps = ApplicationRepo::list_by_worker_email(&pool, "nobody@nowhere.com")
        .await
        .unwrap();
    assert!(apps.is_empty());
}

#[sqlx::test]
async fn populated_posting_is_none_after_posting_delete(pool: PgPool) {
    let posting = JobPostingRepo::create(&pool, &engineer_posting())
        .await
        .unwrap();
    ApplicationRepo::create(
        &pool,
        &CreateApplication {
            job_posting_id: posting.id,
            worker_email: "a@b.com".to_string(),
        },
    )
    .await
    .unwrap();

    // The application survives the posting delete (no FK), but the
    // reference no longer resolves.
    JobPostingRepo::delete_by_id(&pool, posting.id).await.unwrap();

    let apps = ApplicationRepo::list_by_worker_email(&pool, "a@b.com")
        .await
        .unwrap();
    assert_eq!(apps.len(), 1);
    assert!(apps[0].job_posting.is_none());
}
