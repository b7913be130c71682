//! # cardswipe
//!
//! A content-driven engine for swipe-card decision games: a fixed sequence
//! of narrative events, each offering two options; options shift four
//! bounded metrics and per-character support scores. The session is won
//! when the deck runs out and lost the moment any metric hits zero.
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: No hardcoded events or characters. Games supply
//!    datasets; the built-in default set keeps the engine playable when
//!    they don't.
//!
//! 2. **Pure Resolution**: `apply_option` and `evaluate_progress` are
//!    deterministic functions over snapshots. Each decision produces a
//!    full replacement snapshot - callers never observe partial mutation.
//!
//! 3. **Explicit State Machine**: The session phase
//!    (`Menu -> Play -> Results | GameOver`) is an owned value with
//!    checked transitions, not ambient view state.
//!
//! 4. **Presentation Stays Outside**: Drag thresholds, theming, and asset
//!    fallbacks live in the view layer. The engine hears only
//!    "the player chose A or B" and answers with a new snapshot, feedback,
//!    and a progression outcome.
//!
//! ## Modules
//!
//! - `core`: Metrics, characters, events, options, choices
//! - `engine`: Decision resolution, progression, feedback, sessions
//! - `data`: Datasets, the provider interface, the built-in fallback set

pub mod core;
pub mod data;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Character, CharacterId, CharacterImpact, Choice, DecisionOption, EventId, FailureReason,
    GameEvent, Metric, MetricChanges, Metrics,
};

pub use crate::engine::{
    apply_option, evaluate_progress, CharacterReaction, DecisionFeedback, DecisionRecord,
    MetricChange, MetricWarning, Outcome, Phase, Session, SessionError, WarningLevel,
};

pub use crate::data::{
    default_dataset, DataError, DataProvider, DataSource, Dataset, JsonProvider,
};
