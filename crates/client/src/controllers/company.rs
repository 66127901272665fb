//! Company-side view state: a single publish form.

use crate::gateway::JobBoardGateway;
use crate::types::NewJobPosting;

/// The four posting fields as entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobPostingForm {
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
}

/// Submission lifecycle; `Submitting` gates the submit control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PublishState {
    #[default]
    Idle,
    Submitting,
}

/// State machine behind the company publish form.
pub struct CompanyFormController<G> {
    gateway: G,
    pub form: JobPostingForm,
    pub publish: PublishState,
    pub feedback: Option<String>,
}

impl<G: JobBoardGateway> CompanyFormController<G> {
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            form: JobPostingForm::default(),
            publish: PublishState::Idle,
            feedback: None,
        }
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn is_submitting(&self) -> bool {
        self.publish == PublishState::Submitting
    }

    /// Submit the form. On success the fields reset and the feedback
    /// carries the new posting's identifier; on failure the fields are
    /// kept so the user can retry.
    pub async fn submit(&mut self) {
        if self.is_submitting() {
            return;
        }
        self.publish = PublishState::Submitting;
        self.feedback = None;

        let input = NewJobPosting {
            title: self.form.title.clone(),
            company: self.form.company.clone(),
            description: self.form.description.clone(),
            location: self.form.location.clone(),
        };
        match self.gateway.publish_job(&input).await {
            Ok(posting) => {
                self.feedback = Some(format!("Job published successfully! ID: {}", posting.id));
                self.form = JobPostingForm::default();
            }
            Err(_) => {
                self.feedback = Some("Failed to publish job. Please try again.".to_string());
            }
        }
        self.publish = PublishState::Idle;
    }
}
