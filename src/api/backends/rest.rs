//! REST implementation of [`TutorBackend`].
//!
//! Thin JSON-over-HTTP calls. Every method is one request with no client-side
//! bookkeeping, retries, or caching; the backend owns all session state.

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use crate::api::backend::{BackendError, TutorBackend};
use crate::api::types::{
    CheckpointSubmission, GradeSummary, ProgressUpdate, SendMessageRequest, StartSessionRequest,
    TutorTurn, TutoringSession,
};

pub struct RestBackend {
    base_url: String,
    api_token: Option<String>,
    learner_id: String,
    client: reqwest::Client,
}

impl RestBackend {
    /// Creates a new REST backend client.
    ///
    /// # Arguments
    /// * `base_url` - Service root, http(s), without a trailing slash
    /// * `api_token` - Optional bearer token; unauthenticated in dev setups
    /// * `learner_id` - Learner on whose behalf sessions are started
    pub fn new(
        base_url: String,
        api_token: Option<String>,
        learner_id: String,
    ) -> Result<Self, BackendError> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(BackendError::Config(format!(
                "base URL must be http(s), got: {base_url}"
            )));
        }
        if learner_id.trim().is_empty() {
            return Err(BackendError::Config("learner ID is empty".to_string()));
        }
        Ok(Self {
            base_url,
            api_token,
            learner_id,
            client: reqwest::Client::new(),
        })
    }

    /// Attaches auth and a request ID, sends, and maps non-2xx to `Api` errors.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, BackendError> {
        let mut request = request.header("X-Request-Id", Uuid::new_v4().to_string());
        if let Some(token) = &self.api_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        debug!("Backend response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Backend API error: {} - {}", status, message);
            return Err(BackendError::Api { status, message });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self
            .execute(self.client.get(format!("{}{}", self.base_url, path)))
            .await?;
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, BackendError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.client.post(format!("{}{}", self.base_url, path)).json(body))
            .await?;
        response
            .json::<T>()
            .await
            .map_err(|e| BackendError::Parse(e.to_string()))
    }
}

#[async_trait]
impl TutorBackend for RestBackend {
    fn name(&self) -> &str {
        "rest"
    }

    async fn start_session(&self, lesson_id: &str) -> Result<TutoringSession, BackendError> {
        info!("Starting tutoring session for lesson {}", lesson_id);
        let body = StartSessionRequest {
            lesson_id: lesson_id.to_string(),
            learner_id: self.learner_id.clone(),
        };
        self.post_json("/tutor/sessions", &body).await
    }

    async fn fetch_session(&self, session_id: &str) -> Result<TutoringSession, BackendError> {
        self.get_json(&format!("/tutor/sessions/{}", session_id))
            .await
    }

    async fn send_message(
        &self,
        session_id: &str,
        text: &str,
    ) -> Result<TutorTurn, BackendError> {
        info!(
            "Sending message to session {} ({} bytes)",
            session_id,
            text.len()
        );
        let body = SendMessageRequest {
            text: text.to_string(),
        };
        self.post_json(&format!("/tutor/sessions/{}/messages", session_id), &body)
            .await
    }

    async fn submit_checkpoint(
        &self,
        session_id: &str,
        submission: &CheckpointSubmission,
    ) -> Result<TutorTurn, BackendError> {
        info!("Submitting checkpoint for session {}", session_id);
        self.post_json(
            &format!("/tutor/sessions/{}/checkpoint", session_id),
            submission,
        )
        .await
    }

    async fn record_progress(
        &self,
        session_id: &str,
        update: &ProgressUpdate,
    ) -> Result<(), BackendError> {
        // Progress acks with an empty body; only the status matters.
        self.execute(
            self.client
                .post(format!("{}/progress/sessions/{}", self.base_url, session_id))
                .json(update),
        )
        .await?;
        Ok(())
    }

    async fn fetch_grades(&self, learner_id: &str) -> Result<Vec<GradeSummary>, BackendError> {
        self.get_json(&format!("/grades/learners/{}", learner_id))
            .await
    }
}
