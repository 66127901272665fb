use crate::types::DbId;

/// Domain error taxonomy shared by repositories and the API layer.
///
/// Repositories surface these unmodified; the API layer maps each variant
/// to an HTTP status without recovering any of them.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("'{0}' is not a valid identifier")]
    InvalidIdentifier(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
