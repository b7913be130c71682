//! Decision engine: resolution, progression, feedback, sessions.

pub mod feedback;
pub mod resolve;
pub mod session;

pub use feedback::{
    warnings_for, CharacterReaction, DecisionFeedback, MetricChange, MetricWarning, WarningLevel,
};
pub use resolve::{apply_option, evaluate_progress, Outcome};
pub use session::{DecisionRecord, Phase, Session, SessionError};
