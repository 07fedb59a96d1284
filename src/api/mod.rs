pub mod backend;
pub mod backends;
pub mod types;

pub use backend::{BackendError, TutorBackend};
pub use backends::RestBackend;
pub use types::{
    Checkpoint, CheckpointSubmission, CheckpointType, ComprehensionCheck, GradeSummary,
    ProgressUpdate, SessionStatus, TutorTurn, TutoringSession,
};
