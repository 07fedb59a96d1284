//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::api::{
    BackendError, CheckpointSubmission, GradeSummary, ProgressUpdate, SessionStatus, TutorBackend,
    TutorTurn, TutoringSession,
};

/// A no-op backend for tests that don't need real API calls.
pub struct NoopBackend;

#[async_trait]
impl TutorBackend for NoopBackend {
    fn name(&self) -> &str {
        "noop"
    }

    async fn start_session(&self, lesson_id: &str) -> Result<TutoringSession, BackendError> {
        let mut session = test_session(SessionStatus::Active);
        session.lesson_id = lesson_id.to_string();
        Ok(session)
    }

    async fn fetch_session(&self, _session_id: &str) -> Result<TutoringSession, BackendError> {
        Ok(test_session(SessionStatus::Active))
    }

    async fn send_message(
        &self,
        _session_id: &str,
        _text: &str,
    ) -> Result<TutorTurn, BackendError> {
        Ok(TutorTurn::default())
    }

    async fn submit_checkpoint(
        &self,
        _session_id: &str,
        _submission: &CheckpointSubmission,
    ) -> Result<TutorTurn, BackendError> {
        Ok(TutorTurn::default())
    }

    async fn record_progress(
        &self,
        _session_id: &str,
        _update: &ProgressUpdate,
    ) -> Result<(), BackendError> {
        Ok(())
    }

    async fn fetch_grades(&self, _learner_id: &str) -> Result<Vec<GradeSummary>, BackendError> {
        Ok(vec![])
    }
}

/// Creates a test App backed by a NoopBackend.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(NoopBackend))
}

/// A session with fixed identifiers and the given status.
pub fn test_session(status: SessionStatus) -> TutoringSession {
    TutoringSession {
        session_id: "sess-test".to_string(),
        status,
        lesson_id: "lesson-test".to_string(),
        started_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// A bare narration turn carrying the given follow-up prompts.
pub fn test_turn(prompts: &[&str]) -> TutorTurn {
    TutorTurn {
        narration: "Narration for the test turn.".to_string(),
        follow_up_prompts: prompts.iter().map(|p| p.to_string()).collect(),
        ..TutorTurn::default()
    }
}
