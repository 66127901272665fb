//! UI-agnostic client for the Hirelink API.
//!
//! Two layers:
//!
//! - [`gateway`]: a thin HTTP wrapper with one method per API endpoint.
//!   No retries, no caching; failures are logged and propagated.
//! - [`controllers`]: per-role view state machines (company form, worker
//!   browsing/applying) that drive the gateway through the
//!   [`JobBoardGateway`] trait, so any front end -- or a test harness --
//!   can render their state.

pub mod controllers;
pub mod gateway;
pub mod types;

pub use gateway::{ApiClient, GatewayError, JobBoardGateway};
