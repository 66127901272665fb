//! Field-presence checks.
//!
//! The platform validates nothing beyond presence: a required text field
//! must contain at least one non-whitespace character.

use crate::error::CoreError;

/// Reject missing/empty required text fields.
///
/// Whitespace-only input counts as empty.
pub fn require_non_empty(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::Validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}
