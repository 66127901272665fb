//! Request handlers for the job board resources.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `hirelink_db`
//! and map errors via [`AppError`](crate::error::AppError).

use hirelink_core::error::CoreError;
use hirelink_core::types::DbId;
use uuid::Uuid;

use crate::error::AppError;

pub mod applications;
pub mod jobs;

/// Parse a path segment into an identifier, rejecting malformed input
/// before any repository call.
pub(crate) fn parse_id(raw: &str) -> Result<DbId, AppError> {
    Uuid::parse_str(raw)
        .map_err(|_| AppError::Core(CoreError::InvalidIdentifier(raw.to_string())))
}
