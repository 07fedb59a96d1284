use std::fmt;

use async_trait::async_trait;

use super::types::{
    CheckpointSubmission, GradeSummary, ProgressUpdate, TutorTurn, TutoringSession,
};

/// Errors that can occur while talking to the tutoring backend.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum BackendError {
    /// Client misconfigured (missing token, bad URL). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// The backend returned an error response. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Failed to parse the backend's response body. Not retryable.
    Parse(String),
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Config(msg) => write!(f, "config error: {msg}"),
            BackendError::Network(msg) => write!(f, "network error: {msg}"),
            BackendError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            BackendError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for BackendError {}

/// The remote services the client talks to: tutor sessions, progress
/// reporting, and grades. Every operation is a single request; the backend
/// owns all durable state.
#[async_trait]
pub trait TutorBackend: Send + Sync {
    /// Returns the name of the backend.
    fn name(&self) -> &str;

    /// Opens a new tutoring session for a lesson.
    async fn start_session(&self, lesson_id: &str) -> Result<TutoringSession, BackendError>;

    /// Fetches the current state of an existing session.
    async fn fetch_session(&self, session_id: &str) -> Result<TutoringSession, BackendError>;

    /// Sends a learner message and returns the tutor's next turn.
    async fn send_message(&self, session_id: &str, text: &str)
    -> Result<TutorTurn, BackendError>;

    /// Submits a checkpoint and returns the turn that follows it.
    async fn submit_checkpoint(
        &self,
        session_id: &str,
        submission: &CheckpointSubmission,
    ) -> Result<TutorTurn, BackendError>;

    /// Reports lesson progress for a session.
    async fn record_progress(
        &self,
        session_id: &str,
        update: &ProgressUpdate,
    ) -> Result<(), BackendError>;

    /// Fetches the learner's grade summaries across courses.
    async fn fetch_grades(&self, learner_id: &str) -> Result<Vec<GradeSummary>, BackendError>;
}
