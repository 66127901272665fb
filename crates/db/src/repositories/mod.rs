//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod application_repo;
pub mod job_posting_repo;

pub use application_repo::ApplicationRepo;
pub use job_posting_repo::JobPostingRepo;
