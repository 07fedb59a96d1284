//! # Application State
//!
//! In-memory client state for Aurora. This module contains domain logic
//! only — nothing UI-framework-specific, and nothing durable: every field
//! here is UI-session-scoped and rebuilt from the backend on demand.
//!
//! ```text
//! App
//! ├── backend: Arc<dyn TutorBackend>   // remote service handle
//! ├── session: Option<TutoringSession> // last fetched session
//! ├── latest_turn: Option<TutorTurn>   // last tutor response
//! ├── dismissed_cues: HashSet<String>  // suggestions the learner waved off
//! ├── status_message: String           // status bar text
//! ├── is_loading: bool                 // waiting for the backend
//! └── error: Option<String>            // last error message
//! ```
//!
//! Dismissed-cue tracking lives here as explicit state rather than in a
//! module-level cell, so it resets with the `App` and stays testable.

use std::collections::HashSet;
use std::sync::Arc;

use crate::api::{TutorBackend, TutorTurn, TutoringSession};
use crate::core::display::{DisplayState, compute_display_state};

pub struct App {
    pub backend: Arc<dyn TutorBackend>,
    pub session: Option<TutoringSession>,
    pub latest_turn: Option<TutorTurn>,
    /// Suggestion strings the learner dismissed for the current turn.
    pub dismissed_cues: HashSet<String>,
    pub status_message: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl App {
    pub fn new(backend: Arc<dyn TutorBackend>) -> Self {
        Self {
            backend,
            session: None,
            latest_turn: None,
            dismissed_cues: HashSet::new(),
            status_message: String::from("Ready when you are!"),
            is_loading: false,
            error: None,
        }
    }

    /// Derives the current overlay visibility from session + latest turn.
    pub fn display_state(&self) -> DisplayState {
        compute_display_state(self.session.as_ref(), self.latest_turn.as_ref())
    }

    /// Installs a freshly fetched turn. Dismissals are per-turn, so the set
    /// resets here.
    pub fn apply_turn(&mut self, turn: TutorTurn) {
        self.latest_turn = Some(turn);
        self.reset_cues();
    }

    /// The current turn's suggestions, minus any the learner dismissed,
    /// original order preserved.
    pub fn visible_suggestions(&self) -> Vec<&str> {
        self.latest_turn
            .iter()
            .flat_map(|turn| turn.follow_up_prompts.iter())
            .map(String::as_str)
            .filter(|cue| !self.dismissed_cues.contains(*cue))
            .collect()
    }

    pub fn dismiss_cue(&mut self, cue: &str) {
        self.dismissed_cues.insert(cue.to_string());
    }

    /// Clears all dismissals, restoring the current turn's full suggestion
    /// list.
    pub fn reset_cues(&mut self) {
        self.dismissed_cues.clear();
    }
}
