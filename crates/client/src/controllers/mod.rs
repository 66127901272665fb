//! Per-role view state machines.
//!
//! Controllers hold explicit state unions instead of boolean loading
//! flags, so illegal overlapping states are unrepresentable and every
//! transition can be unit-tested without a UI. Failure feedback keeps
//! the platform's "Failed ..." message convention.

use crate::gateway::GatewayError;

pub mod company;
pub mod worker;

pub use company::CompanyFormController;
pub use worker::WorkerController;

/// Lifecycle of one fetched collection or resource.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Last request succeeded.
    Ready(T),
    /// Last request failed; the reason is kept for diagnostics.
    Failed(String),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// The loaded value, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }
}

/// Trailing text for user-facing failure messages: the server's message
/// when it sent one, a generic retry hint otherwise.
fn failure_suffix(err: &GatewayError) -> String {
    match err {
        GatewayError::Api { message, .. } => message.clone(),
        GatewayError::Transport(_) => "Please try again.".to_string(),
    }
}
