//! HTTP gateway: one method per API endpoint.
//!
//! Each method performs a single call, decodes the payload on success,
//! and on failure logs the error and propagates it unchanged. No
//! retries, no caching, no request deduplication.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::types::{
    Application, ApplicationWithPosting, JobPosting, MessageResponse, NewApplication,
    NewJobPosting,
};

/// Failure surfaced by gateway calls.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The request never produced a usable response (connection refused,
    /// decode failure, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

/// Seam between view controllers and the HTTP client, so controllers can
/// be driven by a test double instead of a live server.
#[async_trait]
pub trait JobBoardGateway: Send + Sync {
    async fn publish_job(&self, input: &NewJobPosting) -> Result<JobPosting, GatewayError>;
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, GatewayError>;
    async fn get_job(&self, id: &str) -> Result<JobPosting, GatewayError>;
    async fn delete_job(&self, id: &str) -> Result<String, GatewayError>;
    async fn delete_all_jobs(&self) -> Result<String, GatewayError>;
    async fn apply_for_job(&self, input: &NewApplication) -> Result<Application, GatewayError>;
    async fn worker_applications(
        &self,
        email: &str,
    ) -> Result<Vec<ApplicationWithPosting>, GatewayError>;
}

/// `reqwest`-backed gateway against a running API server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` points at the API prefix, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn send(
        &self,
        endpoint: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, GatewayError> {
        request.send().await.map_err(|err| {
            tracing::error!(endpoint, error = %err, "API request failed to send");
            GatewayError::Transport(err)
        })
    }
}

/// Decode a response: JSON payload on success, logged [`GatewayError::Api`]
/// carrying the server's error message otherwise.
async fn decode<T: DeserializeOwned>(
    endpoint: &'static str,
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    let status = response.status();
    if status.is_success() {
        response.json::<T>().await.map_err(|err| {
            tracing::error!(endpoint, error = %err, "Failed to decode API response");
            GatewayError::Transport(err)
        })
    } else {
        let body = response.bytes().await.unwrap_or_default();
        let message = error_message(status.as_u16(), &body);
        tracing::error!(endpoint, status = status.as_u16(), %message, "API request failed");
        Err(GatewayError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Extract a human-readable message from an error body.
///
/// The API sends `{ "error": ..., "code": ... }`; older deployments used
/// `{ "message": ... }`. Anything else falls back to the status code.
fn error_message(status: u16, body: &[u8]) -> String {
    if let Ok(json) = serde_json::from_slice::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = json.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    format!("HTTP {status}")
}

#[async_trait]
impl JobBoardGateway for ApiClient {
    async fn publish_job(&self, input: &NewJobPosting) -> Result<JobPosting, GatewayError> {
        let request = self.http.post(self.url("/jobs")).json(input);
        let response = self.send("POST /jobs", request).await?;
        decode("POST /jobs", response).await
    }

    async fn list_jobs(&self) -> Result<Vec<JobPosting>, GatewayError> {
        let request = self.http.get(self.url("/jobs"));
        let response = self.send("GET /jobs", request).await?;
        decode("GET /jobs", response).await
    }

    async fn get_job(&self, id: &str) -> Result<JobPosting, GatewayError> {
        let request = self.http.get(self.url(&format!("/jobs/{id}")));
        let response = self.send("GET /jobs/{id}", request).await?;
        decode("GET /jobs/{id}", response).await
    }

    async fn delete_job(&self, id: &str) -> Result<String, GatewayError> {
        let request = self.http.delete(self.url(&format!("/jobs/{id}")));
        let response = self.send("DELETE /jobs/{id}", request).await?;
        let confirmation: MessageResponse = decode("DELETE /jobs/{id}", response).await?;
        Ok(confirmation.message)
    }

    async fn delete_all_jobs(&self) -> Result<String, GatewayError> {
        let request = self.http.delete(self.url("/jobs"));
        let response = self.send("DELETE /jobs", request).await?;
        let confirmation: MessageResponse = decode("DELETE /jobs", response).await?;
        Ok(confirmation.message)
    }

    async fn apply_for_job(&self, input: &NewApplication) -> Result<Application, GatewayError> {
        let request = self.http.post(self.url("/applications")).json(input);
        let response = self.send("POST /applications", request).await?;
        decode("POST /applications", response).await
    }

    async fn worker_applications(
        &self,
        email: &str,
    ) -> Result<Vec<ApplicationWithPosting>, GatewayError> {
        let request = self
            .http
            .get(self.url(&format!("/applications/worker/{email}")));
        let response = self.send("GET /applications/worker/{email}", request).await?;
        decode("GET /applications/worker/{email}", response).await
    }
}
