//! Row structs and DTOs for the job board tables.

pub mod application;
pub mod job_posting;
