//! Wire types for the tutoring backend REST API.
//!
//! The backend owns every session: the client fetches, deserializes, and
//! derives view state from these values, but never mutates or persists them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Remote session lifecycle status, as reported by the backend.
///
/// The client never transitions a session itself; it only reads the status
/// the backend last reported. Statuses the backend adds later deserialize
/// as [`SessionStatus::Unknown`] and render the same as no session at all.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Active,
    AwaitingCheckpoint,
    Completed,
    Abandoned,
    Error,
    #[serde(other)]
    Unknown,
}

/// A remote tutoring session. Identifiers and timestamps are opaque to the
/// client; only `status` feeds into display logic.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TutoringSession {
    pub session_id: String,
    pub status: SessionStatus,
    pub lesson_id: String,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One server-produced response unit within a session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TutorTurn {
    /// Free narration text from the tutor.
    #[serde(default)]
    pub narration: String,
    #[serde(default)]
    pub comprehension_check: Option<ComprehensionCheck>,
    #[serde(default)]
    pub checkpoint: Option<Checkpoint>,
    /// Ordered suggestion strings. The backend has emitted this field under
    /// both names, so both deserialize here.
    #[serde(default, alias = "follow_up_options")]
    pub follow_up_prompts: Vec<String>,
    /// Short summary of the narration, used as a highlight hint.
    #[serde(default)]
    pub summary: Option<String>,
}

/// A comprehension question attached to a turn. The backend emits either a
/// bare question string or a structured object, depending on lesson type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum ComprehensionCheck {
    Plain(String),
    Structured {
        question: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        choices: Vec<String>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        expected_answers: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        hint: Option<String>,
    },
}

impl ComprehensionCheck {
    /// The question text, regardless of which wire shape carried it.
    pub fn question(&self) -> &str {
        match self {
            ComprehensionCheck::Plain(q) => q,
            ComprehensionCheck::Structured { question, .. } => question,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CheckpointType {
    Photo,
    Reflection,
    Quiz,
}

/// A learner submission gating session progress.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Checkpoint {
    #[serde(default)]
    pub required: bool,
    pub checkpoint_type: CheckpointType,
    pub instructions: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

// ============================================================================
// Request Bodies
// ============================================================================

#[derive(Serialize, Debug)]
pub struct StartSessionRequest {
    pub lesson_id: String,
    pub learner_id: String,
}

#[derive(Serialize, Debug)]
pub struct SendMessageRequest {
    pub text: String,
}

/// What the learner submits to clear a checkpoint. Reflections and quiz
/// answers carry text; photo checkpoints carry an upload reference.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CheckpointSubmission {
    pub checkpoint_type: CheckpointType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub lesson_id: String,
    pub blocks_completed: u32,
    pub minutes_spent: u32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct GradeSummary {
    pub course_id: String,
    pub course_title: String,
    pub score_percent: f64,
    pub graded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_status_deserializes_known_values() {
        let status: SessionStatus = serde_json::from_str(r#""awaiting_checkpoint""#).unwrap();
        assert_eq!(status, SessionStatus::AwaitingCheckpoint);
        let status: SessionStatus = serde_json::from_str(r#""active""#).unwrap();
        assert_eq!(status, SessionStatus::Active);
    }

    #[test]
    fn test_session_status_unknown_value_falls_through() {
        let status: SessionStatus = serde_json::from_str(r#""paused_for_review""#).unwrap();
        assert_eq!(status, SessionStatus::Unknown);
    }

    #[test]
    fn test_turn_with_plain_question() {
        let json = r#"{
            "narration": "Photosynthesis turns light into sugar.",
            "comprehension_check": "What do plants produce?"
        }"#;
        let turn: TutorTurn = serde_json::from_str(json).unwrap();
        assert_eq!(
            turn.comprehension_check.as_ref().unwrap().question(),
            "What do plants produce?"
        );
        assert!(turn.checkpoint.is_none());
        assert!(turn.follow_up_prompts.is_empty());
    }

    #[test]
    fn test_turn_with_structured_question() {
        let json = r#"{
            "narration": "Let's check in.",
            "comprehension_check": {
                "question": "Pick the gas plants absorb.",
                "choices": ["Oxygen", "Carbon dioxide"],
                "expected_answers": ["Carbon dioxide"]
            }
        }"#;
        let turn: TutorTurn = serde_json::from_str(json).unwrap();
        let check = turn.comprehension_check.unwrap();
        assert_eq!(check.question(), "Pick the gas plants absorb.");
        assert!(matches!(
            check,
            ComprehensionCheck::Structured { ref choices, .. } if choices.len() == 2
        ));
    }

    #[test]
    fn test_turn_follow_up_options_alias() {
        let json = r#"{
            "narration": "Nice work.",
            "follow_up_options": ["Tell me more", "Quiz me"]
        }"#;
        let turn: TutorTurn = serde_json::from_str(json).unwrap();
        assert_eq!(turn.follow_up_prompts, vec!["Tell me more", "Quiz me"]);
    }

    #[test]
    fn test_turn_sparse_body_defaults() {
        let turn: TutorTurn = serde_json::from_str(r#"{"narration": "Hi!"}"#).unwrap();
        assert_eq!(turn.narration, "Hi!");
        assert!(turn.comprehension_check.is_none());
        assert!(turn.checkpoint.is_none());
        assert!(turn.summary.is_none());
    }

    #[test]
    fn test_checkpoint_deserializes() {
        let json = r#"{
            "required": true,
            "checkpoint_type": "photo",
            "instructions": "Snap a photo of your worksheet.",
            "tips": ["Good lighting helps."]
        }"#;
        let cp: Checkpoint = serde_json::from_str(json).unwrap();
        assert!(cp.required);
        assert_eq!(cp.checkpoint_type, CheckpointType::Photo);
        assert_eq!(cp.tips.len(), 1);
    }

    /// Contract test: checkpoint submissions omit absent optional fields.
    #[test]
    fn test_checkpoint_submission_serialization() {
        let submission = CheckpointSubmission {
            checkpoint_type: CheckpointType::Reflection,
            response_text: Some("I learned about leaves.".to_string()),
            media_url: None,
        };
        let serialized = serde_json::to_string(&submission).unwrap();
        assert_eq!(
            serialized,
            r#"{"checkpoint_type":"reflection","response_text":"I learned about leaves."}"#
        );
    }
}
