//! Shared response payload types for API handlers.

use serde::Serialize;

/// Confirmation payload for delete operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
