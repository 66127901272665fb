use hirelink_core::error::CoreError;

/// Error type surfaced by repository operations.
///
/// Repositories either fail a domain rule (missing field, dangling posting
/// reference) or fail at the store. Neither is recovered here; callers map
/// both to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}
