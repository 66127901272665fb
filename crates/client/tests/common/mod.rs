//! Mock gateway for driving controllers without a server.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use hirelink_client::gateway::{GatewayError, JobBoardGateway};
use hirelink_client::types::{
    Application, ApplicationWithPosting, JobPosting, NewApplication, NewJobPosting,
};

pub fn posting(id: &str, title: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        description: "Build things".to_string(),
        location: "Remote".to_string(),
        posted_at: Utc::now(),
    }
}

pub fn application_for(posting: &JobPosting, email: &str) -> ApplicationWithPosting {
    ApplicationWithPosting {
        id: "app-1".to_string(),
        job_posting: Some(posting.clone()),
        worker_email: email.to_string(),
        application_date: Utc::now(),
        status: "pending".to_string(),
    }
}

fn server_error() -> GatewayError {
    GatewayError::Api {
        status: 500,
        message: "An internal error occurred".to_string(),
    }
}

/// Canned gateway: serves fixed data, optionally failing every call,
/// and records which endpoints were hit.
#[derive(Default)]
pub struct MockGateway {
    pub jobs: Vec<JobPosting>,
    pub applications: Vec<ApplicationWithPosting>,
    pub fail: bool,
    pub calls: Mutex<Vec<&'static str>>,
}

impl MockGateway {
    pub fn with_jobs(jobs: Vec<JobPosting>) -> Self {
        Self {
            jobs,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, endpoint: &'static str) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(endpoint);
        if self.fail {
            Err(server_error())
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl JobBoardGateway for MockGateway {
    async fn publish_job(&self, input: &NewJobPosting) -> Result<JobPosting, GatewayError> {
        self.record("publish_job")?;
        Ok(JobPosting {
            id: "job-1".to_string(),
            title: input.title.clone(),
            company: input.company.clone(),
            description: input.description.clone(),
            location: input.location.clone(),
            posted_at: Utc::now(),
        })
    }

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, GatewayError> {
        self.record("list_jobs")?;
        Ok(self.jobs.clone())
    }

    async fn get_job(&self, id: &str) -> Result<JobPosting, GatewayError> {
        self.record("get_job")?;
        self.jobs
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(GatewayError::Api {
                status: 404,
                message: format!("Job posting with id {id} not found"),
            })
    }

    async fn delete_job(&self, _id: &str) -> Result<String, GatewayError> {
        self.record("delete_job")?;
        Ok("Job posting deleted successfully".to_string())
    }

    async fn delete_all_jobs(&self) -> Result<String, GatewayError> {
        self.record("delete_all_jobs")?;
        Ok("All job postings deleted successfully".to_string())
    }

    async fn apply_for_job(&self, input: &NewApplication) -> Result<Application, GatewayError> {
        self.record("apply_for_job")?;
        Ok(Application {
            id: "app-1".to_string(),
            job_posting_id: input.job_posting_id.clone(),
            worker_email: input.worker_email.clone(),
            application_date: Utc::now(),
            status: "pending".to_string(),
        })
    }

    async fn worker_applications(
        &self,
        email: &str,
    ) -> Result<Vec<ApplicationWithPosting>, GatewayError> {
        self.record("worker_applications")?;
        Ok(self
            .applications
            .iter()
            .filter(|a| a.worker_email == email)
            .cloned()
            .collect())
    }
}
