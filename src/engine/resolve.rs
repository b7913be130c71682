//! Decision resolution and game progression.
//!
//! The heart of the engine: a pure function that applies a chosen option
//! to the current snapshot, and a terminal-state check that decides
//! whether the session continues, wins, or loses.
//!
//! Both are deterministic and side-effect free; callers get a full new
//! snapshot rather than observing partial mutation.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Character, DecisionOption, FailureReason, Metrics};

/// Progression outcome after one resolved decision.
///
/// Checked in a fixed priority order: defeat first, then victory, then
/// continuation. A decision that both empties a metric and exhausts the
/// event deck is a defeat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// More events remain; advance to `next_index`.
    Continue { next_index: usize },
    /// Every event resolved with all metrics above zero.
    Results,
    /// A metric hit zero.
    GameOver(FailureReason),
}

impl Outcome {
    /// True for `Results` and `GameOver`.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue { .. })
    }
}

/// Apply a chosen option to the current snapshot.
///
/// - Every metric named in the option's `metric_changes` is shifted by its
///   delta and clamped to [0, 100]; metrics not named are copied unchanged.
/// - Every character named in `character_impacts` has support shifted and
///   clamped to [-100, 100]; characters not named are copied unchanged.
///   Impacts naming an id not present in the roster are silently ignored.
///
/// Pure: the inputs are untouched and the returned pair fully replaces the
/// prior snapshot.
#[must_use]
pub fn apply_option(
    metrics: &Metrics,
    characters: &Vector<Character>,
    option: &DecisionOption,
) -> (Metrics, Vector<Character>) {
    let mut new_metrics = *metrics;
    for (&metric, &delta) in &option.metric_changes {
        new_metrics = new_metrics.applied(metric, delta);
    }

    let new_characters = characters
        .iter()
        .map(|ch| match option.impact_on(&ch.id) {
            Some(impact) => ch.with_support_delta(impact.change),
            None => ch.clone(),
        })
        .collect();

    (new_metrics, new_characters)
}

/// Decide whether the session continues, wins, or loses.
///
/// Priority order:
/// 1. [`Outcome::GameOver`] if any metric is at or below zero - an
///    immediate loss overrides reaching the final event on the same
///    decision. The reason names the first collapsed metric in
///    [`crate::core::Metric::ALL`] order.
/// 2. [`Outcome::Results`] if the deck is exhausted
///    (`current_index + 1 >= total_events`).
/// 3. [`Outcome::Continue`] with `next_index = current_index + 1`.
#[must_use]
pub fn evaluate_progress(metrics: &Metrics, current_index: usize, total_events: usize) -> Outcome {
    if let Some(metric) = metrics.first_collapsed() {
        return Outcome::GameOver(FailureReason::for_metric(metric));
    }

    if current_index + 1 >= total_events {
        return Outcome::Results;
    }

    Outcome::Continue {
        next_index: current_index + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Metric;

    fn roster() -> Vector<Character> {
        Vector::from(vec![
            Character::new("duck", "Duck"),
            Character::new("fox", "Fox").with_support_delta(90),
        ])
    }

    #[test]
    fn test_apply_option_metric_changes() {
        let metrics = Metrics::new();
        let option = DecisionOption::new("cut spending")
            .with_metric_change(Metric::Treasury, 20)
            .with_metric_change(Metric::PublicTrust, -15);

        let (new_metrics, _) = apply_option(&metrics, &roster(), &option);

        assert_eq!(new_metrics.get(Metric::Treasury), 70);
        assert_eq!(new_metrics.get(Metric::PublicTrust), 35);
        // Metrics absent from the option are untouched.
        assert_eq!(new_metrics.get(Metric::IntlReputation), 50);
        assert_eq!(new_metrics.get(Metric::SocialStability), 50);
    }

    #[test]
    fn test_apply_option_clamps_metrics() {
        let metrics = Metrics::new();
        let option = DecisionOption::new("overspend").with_metric_change(Metric::Treasury, -60);

        let (new_metrics, _) = apply_option(&metrics, &roster(), &option);
        assert_eq!(new_metrics.get(Metric::Treasury), 0);
    }

    #[test]
    fn test_apply_option_character_impacts() {
        let option = DecisionOption::new("side with the duck")
            .with_impact("duck", 15)
            .with_impact("fox", 30);

        let (_, new_chars) = apply_option(&Metrics::new(), &roster(), &option);

        assert_eq!(new_chars[0].support, 15);
        // 90 + 30 clamps to 100.
        assert_eq!(new_chars[1].support, 100);
    }

    #[test]
    fn test_apply_option_unknown_impact_ignored() {
        let option = DecisionOption::new("noop").with_impact("ZZZ", 50);
        let characters = roster();

        let (_, new_chars) = apply_option(&Metrics::new(), &characters, &option);

        assert_eq!(new_chars, characters);
    }

    #[test]
    fn test_apply_option_is_pure() {
        let metrics = Metrics::new();
        let characters = roster();
        let option = DecisionOption::new("anything")
            .with_metric_change(Metric::SocialStability, -30)
            .with_impact("duck", -10);

        let first = apply_option(&metrics, &characters, &option);
        let second = apply_option(&metrics, &characters, &option);

        assert_eq!(first, second);
        // Inputs are untouched.
        assert_eq!(metrics, Metrics::new());
        assert_eq!(characters, roster());
    }

    #[test]
    fn test_evaluate_progress_continue() {
        let outcome = evaluate_progress(&Metrics::new(), 3, 10);
        assert_eq!(outcome, Outcome::Continue { next_index: 4 });
        assert!(!outcome.is_terminal());
    }

    #[test]
    fn test_evaluate_progress_results_on_last_event() {
        let outcome = evaluate_progress(&Metrics::new(), 9, 10);
        assert_eq!(outcome, Outcome::Results);
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_evaluate_progress_defeat_beats_victory() {
        // Last event and a collapsed metric on the same decision: loss wins.
        let metrics = Metrics::with_values(50, 50, 0, 50);
        let outcome = evaluate_progress(&metrics, 9, 10);

        assert_eq!(
            outcome,
            Outcome::GameOver(FailureReason::InternationalCrisis)
        );
    }

    #[test]
    fn test_evaluate_progress_reason_priority() {
        // treasury and socialStability both collapsed; treasury is checked
        // first, so the reason is bankruptcy.
        let metrics = Metrics::with_values(0, 50, 50, 0);
        let outcome = evaluate_progress(&metrics, 2, 10);

        assert_eq!(outcome, Outcome::GameOver(FailureReason::Bankruptcy));
    }
}
