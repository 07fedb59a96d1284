//! # Display State
//!
//! Maps the latest known session status plus the latest tutor turn onto the
//! four UI regions the tutor overlay can show:
//!
//! ```text
//! (session.status, turn)  →  compute_display_state()  →  DisplayState
//!                                                         ├── show_narration
//!                                                         ├── show_question
//!                                                         ├── show_checkpoint
//!                                                         └── show_suggestions
//! ```
//!
//! This is a derived view, not a state machine: the backend owns the session
//! lifecycle, and this function is recomputed from scratch on every render.
//! It is total and pure — every status maps to exactly one branch, nothing
//! panics, and the same inputs always produce the same flags.

use crate::api::types::{SessionStatus, TutorTurn, TutoringSession};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    Idle,
    Active,
    AwaitingCheckpoint,
    Completed,
}

/// Which overlay regions are visible. Ephemeral — recomputed per render,
/// never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub mode: DisplayMode,
    pub show_narration: bool,
    pub show_question: bool,
    pub show_checkpoint: bool,
    pub show_suggestions: bool,
}

impl DisplayState {
    /// The everything-hidden state: no session, or a terminal/unknown one.
    pub fn idle() -> Self {
        Self {
            mode: DisplayMode::Idle,
            show_narration: false,
            show_question: false,
            show_checkpoint: false,
            show_suggestions: false,
        }
    }
}

/// Derives the visible overlay regions from the session and latest turn.
///
/// Precedence rules:
/// - No session wins over everything; the turn is ignored.
/// - `awaiting_checkpoint` shows the checkpoint panel on the strength of the
///   status alone, even when the turn carries no checkpoint payload.
/// - In `active`, a pending question strictly dominates a required
///   checkpoint; a turn never renders both. Suggestions show only when
///   neither is pending (an empty suggestion list is still "shown" — list
///   emptiness is a rendering concern, not a visibility one).
/// - `completed` is terminal and suppresses any dangling question or
///   checkpoint on the turn.
/// - Abandoned, errored, and unrecognized statuses render as idle.
pub fn compute_display_state(
    session: Option<&TutoringSession>,
    turn: Option<&TutorTurn>,
) -> DisplayState {
    let Some(session) = session else {
        return DisplayState::idle();
    };

    match session.status {
        SessionStatus::AwaitingCheckpoint => DisplayState {
            mode: DisplayMode::AwaitingCheckpoint,
            show_narration: true,
            show_question: false,
            show_checkpoint: true,
            show_suggestions: false,
        },
        SessionStatus::Active => {
            let has_question = turn.is_some_and(|t| t.comprehension_check.is_some());
            let has_checkpoint = turn
                .and_then(|t| t.checkpoint.as_ref())
                .is_some_and(|cp| cp.required);
            DisplayState {
                mode: DisplayMode::Active,
                show_narration: true,
                show_question: has_question,
                show_checkpoint: has_checkpoint && !has_question,
                show_suggestions: !has_checkpoint && !has_question,
            }
        }
        SessionStatus::Completed => DisplayState {
            mode: DisplayMode::Completed,
            show_narration: false,
            show_question: false,
            show_checkpoint: false,
            show_suggestions: false,
        },
        SessionStatus::Abandoned | SessionStatus::Error | SessionStatus::Unknown => {
            DisplayState::idle()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{Checkpoint, CheckpointType, ComprehensionCheck};
    use chrono::Utc;

    fn session(status: SessionStatus) -> TutoringSession {
        TutoringSession {
            session_id: "sess-1".to_string(),
            status,
            lesson_id: "lesson-1".to_string(),
            started_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Builds a turn with an optional plain question and an optional
    /// checkpoint whose `required` flag is the given value.
    fn turn(question: bool, checkpoint_required: Option<bool>) -> TutorTurn {
        TutorTurn {
            narration: "Here's the idea.".to_string(),
            comprehension_check: question
                .then(|| ComprehensionCheck::Plain("What did we learn?".to_string())),
            checkpoint: checkpoint_required.map(|required| Checkpoint {
                required,
                checkpoint_type: CheckpointType::Reflection,
                instructions: "Write a sentence about it.".to_string(),
                tips: vec![],
            }),
            follow_up_prompts: vec!["Tell me more".to_string()],
            summary: None,
        }
    }

    /// Macro to generate display-rule test cases.
    /// $name:ident names the test (describe the rule being exercised)
    /// The inputs are `Option<TutoringSession>` / `Option<TutorTurn>` exprs;
    /// the expected tuple is (mode, narration, question, checkpoint, suggestions).
    macro_rules! test_display_rules {
        ( $($name:ident: ($session:expr, $turn:expr) => ($mode:expr, $n:expr, $q:expr, $c:expr, $s:expr),)+ ) => {
            $(
                #[test]
                fn $name() {
                    let state = compute_display_state($session.as_ref(), $turn.as_ref());
                    assert_eq!(state.mode, $mode);
                    assert_eq!(state.show_narration, $n, "narration");
                    assert_eq!(state.show_question, $q, "question");
                    assert_eq!(state.show_checkpoint, $c, "checkpoint");
                    assert_eq!(state.show_suggestions, $s, "suggestions");
                }
            )+
        };
    }

    test_display_rules! {
        test_no_session_is_idle:
            (None::<TutoringSession>, Some(turn(true, Some(true))))
            => (DisplayMode::Idle, false, false, false, false),
        test_active_bare_turn_shows_suggestions:
            (Some(session(SessionStatus::Active)), Some(turn(false, None)))
            => (DisplayMode::Active, true, false, false, true),
        test_active_no_turn_shows_suggestions:
            (Some(session(SessionStatus::Active)), None::<TutorTurn>)
            => (DisplayMode::Active, true, false, false, true),
        test_active_question_only:
            (Some(session(SessionStatus::Active)), Some(turn(true, None)))
            => (DisplayMode::Active, true, true, false, false),
        test_active_required_checkpoint_only:
            (Some(session(SessionStatus::Active)), Some(turn(false, Some(true))))
            => (DisplayMode::Active, true, false, true, false),
        test_active_optional_checkpoint_is_not_shown:
            (Some(session(SessionStatus::Active)), Some(turn(false, Some(false))))
            => (DisplayMode::Active, true, false, false, true),
        test_active_question_dominates_checkpoint:
            (Some(session(SessionStatus::Active)), Some(turn(true, Some(true))))
            => (DisplayMode::Active, true, true, false, false),
        test_awaiting_checkpoint_without_payload_still_shows_panel:
            (Some(session(SessionStatus::AwaitingCheckpoint)), Some(turn(false, None)))
            => (DisplayMode::AwaitingCheckpoint, true, false, true, false),
        test_awaiting_checkpoint_hides_question:
            (Some(session(SessionStatus::AwaitingCheckpoint)), Some(turn(true, Some(true))))
            => (DisplayMode::AwaitingCheckpoint, true, false, true, false),
        test_completed_suppresses_pending_interactions:
            (Some(session(SessionStatus::Completed)), Some(turn(true, Some(true))))
            => (DisplayMode::Completed, false, false, false, false),
        test_abandoned_is_idle:
            (Some(session(SessionStatus::Abandoned)), Some(turn(false, None)))
            => (DisplayMode::Idle, false, false, false, false),
        test_error_is_idle:
            (Some(session(SessionStatus::Error)), None::<TutorTurn>)
            => (DisplayMode::Idle, false, false, false, false),
        test_unknown_status_is_idle:
            (Some(session(SessionStatus::Unknown)), Some(turn(true, Some(true))))
            => (DisplayMode::Idle, false, false, false, false),
    }

    #[test]
    fn test_same_inputs_same_output() {
        let sess = session(SessionStatus::Active);
        let t = turn(true, Some(true));
        let first = compute_display_state(Some(&sess), Some(&t));
        let second = compute_display_state(Some(&sess), Some(&t));
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_status_from_wire_renders_idle() {
        // End-to-end with serde: a status this build has never heard of.
        let json = r#"{
            "session_id": "s1",
            "status": "migrating",
            "lesson_id": "l1",
            "started_at": "2026-01-10T12:00:00Z",
            "updated_at": "2026-01-10T12:05:00Z"
        }"#;
        let sess: TutoringSession = serde_json::from_str(json).unwrap();
        let state = compute_display_state(Some(&sess), None);
        assert_eq!(state, DisplayState::idle());
    }
}
