//! Decision feedback: what one resolved decision changed.
//!
//! The feedback-screen edition of the game shows the computed deltas and
//! threshold warnings before the player continues. Feedback is derived
//! data - it never feeds back into resolution.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::resolve::Outcome;
use crate::core::{
    Character, Choice, DecisionOption, EventId, GameEvent, Metric, Metrics, CRITICAL_THRESHOLD,
    METRIC_MIN,
};

/// Old and new values for one metric.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricChange {
    pub metric: Metric,
    pub old_value: i64,
    pub new_value: i64,
}

impl MetricChange {
    /// Signed change, after clamping.
    #[must_use]
    pub const fn change(&self) -> i64 {
        self.new_value - self.old_value
    }
}

/// One character's reaction to a decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterReaction {
    /// Post-decision character snapshot.
    pub character: Character,
    /// The raw impact delta from the option (pre-clamp).
    pub change: i64,
    pub old_support: i64,
    pub new_support: i64,
}

/// Severity of a metric warning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningLevel {
    /// Value at or below zero.
    Collapsed,
    /// Value above zero but below [`CRITICAL_THRESHOLD`].
    Critical,
}

/// A metric at or near collapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricWarning {
    pub metric: Metric,
    pub level: WarningLevel,
    pub value: i64,
}

impl std::fmt::Display for MetricWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.level {
            WarningLevel::Collapsed => {
                write!(f, "{} has COLLAPSED ({})", self.metric, self.value)
            }
            WarningLevel::Critical => {
                write!(f, "{} is CRITICAL ({})", self.metric, self.value)
            }
        }
    }
}

/// Warnings for every metric at or near collapse, in priority order.
#[must_use]
pub fn warnings_for(metrics: &Metrics) -> Vec<MetricWarning> {
    metrics
        .iter()
        .filter_map(|(metric, value)| {
            let level = if value <= METRIC_MIN {
                WarningLevel::Collapsed
            } else if value < CRITICAL_THRESHOLD {
                WarningLevel::Critical
            } else {
                return None;
            };
            Some(MetricWarning {
                metric,
                level,
                value,
            })
        })
        .collect()
}

/// Everything the feedback screen needs about one resolved decision.
///
/// Built at decision time from the before/after snapshots. The outcome is
/// included so callers running without a feedback gate can act on it
/// directly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecisionFeedback {
    /// Which option was chosen.
    pub choice: Choice,

    /// Event the decision resolved.
    pub event_id: EventId,
    pub event_title: String,

    /// Old/new values for all four metrics, in priority order.
    pub metric_changes: Vec<MetricChange>,

    /// Reactions for each impact whose character exists in the roster.
    pub character_reactions: Vec<CharacterReaction>,

    /// Metrics at or near collapse after the decision.
    pub warnings: Vec<MetricWarning>,

    /// Progression outcome computed from the new snapshot.
    pub outcome: Outcome,
}

impl DecisionFeedback {
    pub(crate) fn build(
        choice: Choice,
        event: &GameEvent,
        option: &DecisionOption,
        old_metrics: &Metrics,
        new_metrics: &Metrics,
        old_characters: &Vector<Character>,
        new_characters: &Vector<Character>,
        outcome: Outcome,
    ) -> Self {
        let metric_changes = Metric::ALL
            .iter()
            .map(|&metric| MetricChange {
                metric,
                old_value: old_metrics.get(metric),
                new_value: new_metrics.get(metric),
            })
            .collect();

        // Impacts naming unknown ids produce no reaction, mirroring the
        // leniency of apply_option.
        let character_reactions = option
            .character_impacts
            .iter()
            .filter_map(|impact| {
                let character = new_characters.iter().find(|c| c.id == impact.id)?;
                let old = old_characters.iter().find(|c| c.id == impact.id)?;
                Some(CharacterReaction {
                    character: character.clone(),
                    change: impact.change,
                    old_support: old.support,
                    new_support: character.support,
                })
            })
            .collect();

        Self {
            choice,
            event_id: event.id,
            event_title: event.title.clone(),
            metric_changes,
            character_reactions,
            warnings: warnings_for(new_metrics),
            outcome,
        }
    }
}
