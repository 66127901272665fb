//! Worker-side view state: browse postings, inspect one, apply, and
//! search own applications by email.

use crate::controllers::{failure_suffix, LoadState};
use crate::gateway::JobBoardGateway;
use crate::types::{ApplicationWithPosting, JobPosting, NewApplication};

/// Detail panel for a single posting.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailState {
    #[default]
    Hidden,
    Loading,
    Visible(JobPosting),
}

/// The apply flow. Collecting the worker's email is an explicit
/// input-required step so any front end (web form, CLI prompt, test
/// harness) can drive it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ApplyState {
    #[default]
    Idle,
    /// Waiting for the worker to supply an email address.
    AwaitingEmail { job_posting_id: String },
    Submitting,
}

/// State machine behind the worker view.
///
/// Each async operation runs to completion and settles its own state
/// before returning; `&mut self` serializes overlapping actions on one
/// controller instance.
pub struct WorkerController<G> {
    gateway: G,
    pub jobs: LoadState<Vec<JobPosting>>,
    pub detail: DetailState,
    pub apply: ApplyState,
    pub applications: LoadState<Vec<ApplicationWithPosting>>,
    pub feedback: Option<String>,
}

impl<G: JobBoardGateway> WorkerController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            jobs: LoadState::Idle,
            detail: DetailState::Hidden,
            apply: ApplyState::Idle,
            applications: LoadState::Idle,
            feedback: None,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Fetch the job list. Invoked once on mount and again on demand.
    pub async fn load_jobs(&mut self) {
        self.jobs = LoadState::Loading;
        self.feedback = None;
        match self.gateway.list_jobs().await {
            Ok(jobs) => self.jobs = LoadState::Ready(jobs),
            Err(err) => {
                self.jobs = LoadState::Failed(err.to_string());
                self.feedback = Some("Failed to fetch jobs.".to_string());
            }
        }
    }

    /// Fetch and show one posting's details.
    pub async fn view_details(&mut self, job_id: &str) {
        self.detail = DetailState::Loading;
        self.feedback = None;
        match self.gateway.get_job(job_id).await {
            Ok(posting) => self.detail = DetailState::Visible(posting),
            Err(_) => {
                self.detail = DetailState::Hidden;
                self.feedback = Some(format!("Failed to fetch job details for ID: {job_id}."));
            }
        }
    }

    pub fn close_details(&mut self) {
        self.detail = DetailState::Hidden;
    }

    /// Start the apply flow: remember the posting and wait for an email.
    pub fn begin_apply(&mut self, job_posting_id: &str) {
        self.feedback = None;
        self.apply = ApplyState::AwaitingEmail {
            job_posting_id: job_posting_id.to_string(),
        };
    }

    /// Abandon the apply flow without a network call.
    pub fn cancel_apply(&mut self) {
        self.apply = ApplyState::Idle;
        self.feedback = Some("Application cancelled: Email is required.".to_string());
    }

    /// Complete the apply flow with the supplied email. An empty email
    /// takes the cancellation path; no request is made.
    pub async fn submit_application(&mut self, email: &str) {
        let job_posting_id = match &self.apply {
            ApplyState::AwaitingEmail { job_posting_id } => job_posting_id.clone(),
            _ => return,
        };

        if email.trim().is_empty() {
            self.cancel_apply();
            return;
        }

        self.apply = ApplyState::Submitting;
        self.feedback = None;
        let input = NewApplication {
            job_posting_id,
            worker_email: email.to_string(),
        };
        match self.gateway.apply_for_job(&input).await {
            Ok(application) => {
                self.feedback = Some(format!(
                    "Successfully applied for job! Application ID: {}",
                    application.id
                ));
            }
            Err(err) => {
                self.feedback = Some(format!("Failed to apply for job. {}", failure_suffix(&err)));
            }
        }
        self.apply = ApplyState::Idle;
    }

    /// Fetch the applications submitted under `email`. Empty input is
    /// rejected locally; an empty result is reported as feedback, not an
    /// error.
    pub async fn search_applications(&mut self, email: &str) {
        if email.trim().is_empty() {
            self.feedback =
                Some("Please enter an email to search for applications.".to_string());
            return;
        }

        self.applications = LoadState::Loading;
        self.feedback = None;
        match self.gateway.worker_applications(email).await {
            Ok(applications) => {
                if applications.is_empty() {
                    self.feedback = Some(format!("No applications found for {email}."));
                }
                self.applications = LoadState::Ready(applications);
            }
            Err(err) => {
                self.feedback = Some(format!(
                    "Failed to fetch applications for {email}. {}",
                    failure_suffix(&err)
                ));
                self.applications = LoadState::Failed(err.to_string());
            }
        }
    }
}
