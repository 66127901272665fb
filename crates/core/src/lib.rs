//! Shared domain types for the Hirelink job board.
//!
//! This crate is dependency-light on purpose: it holds the identifier and
//! timestamp aliases, the domain error taxonomy, and the field-presence
//! validation helpers used by both the server and the client crates.

pub mod error;
pub mod types;
pub mod validation;
