//! HTTP API for the Hirelink job board.
//!
//! Stateless axum handlers over the repositories in `hirelink_db`:
//! companies publish and delete postings, workers apply and query their
//! application history.

pub mod config;
pub mod error;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod state;
