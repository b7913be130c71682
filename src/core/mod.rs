//! Core domain types: metrics, characters, events, options, choices.
//!
//! These are the content-agnostic building blocks. Games configure them
//! through datasets rather than by modifying the engine.

pub mod character;
pub mod event;
pub mod metric;

pub use character::{clamp_support, Character, CharacterId, SUPPORT_MAX, SUPPORT_MIN};
pub use event::{CharacterImpact, Choice, DecisionOption, EventId, GameEvent, MetricChanges};
pub use metric::{
    clamp_metric, FailureReason, Metric, Metrics, CRITICAL_THRESHOLD, METRIC_MAX, METRIC_MIN,
    METRIC_START,
};
