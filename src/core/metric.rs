//! Bounded governance metrics.
//!
//! Four gauges, each clamped to [0, 100]. The session is lost the moment
//! any gauge reaches zero; `FailureReason` names which one, using a fixed
//! priority order when several collapse on the same decision.

use serde::{Deserialize, Serialize};

/// Lower bound for metric values.
pub const METRIC_MIN: i64 = 0;

/// Upper bound for metric values.
pub const METRIC_MAX: i64 = 100;

/// Value every metric starts at in a fresh session.
pub const METRIC_START: i64 = 50;

/// Values strictly below this (and above zero) are reported as CRITICAL
/// in decision feedback.
pub const CRITICAL_THRESHOLD: i64 = 25;

/// One of the four governance gauges.
///
/// Serialized with the wire names used by the JSON data contract
/// (`treasury`, `publicTrust`, `intlReputation`, `socialStability`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "treasury")]
    Treasury,
    #[serde(rename = "publicTrust")]
    PublicTrust,
    #[serde(rename = "intlReputation")]
    IntlReputation,
    #[serde(rename = "socialStability")]
    SocialStability,
}

impl Metric {
    /// All metrics, in failure-check priority order.
    ///
    /// When several metrics hit zero on the same decision, the first one
    /// in this order is reported as the cause. First-checked-wins, not a
    /// tie-break by magnitude.
    pub const ALL: [Metric; 4] = [
        Metric::Treasury,
        Metric::PublicTrust,
        Metric::IntlReputation,
        Metric::SocialStability,
    ];

    /// Wire name, as used in JSON documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Metric::Treasury => "treasury",
            Metric::PublicTrust => "publicTrust",
            Metric::IntlReputation => "intlReputation",
            Metric::SocialStability => "socialStability",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Why a session ended in defeat.
///
/// One reason per metric; derived from the first collapsed metric in
/// `Metric::ALL` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    Bankruptcy,
    NoConfidence,
    InternationalCrisis,
    CivilUnrest,
}

impl FailureReason {
    /// The reason reported when `metric` collapses.
    #[must_use]
    pub const fn for_metric(metric: Metric) -> Self {
        match metric {
            Metric::Treasury => FailureReason::Bankruptcy,
            Metric::PublicTrust => FailureReason::NoConfidence,
            Metric::IntlReputation => FailureReason::InternationalCrisis,
            Metric::SocialStability => FailureReason::CivilUnrest,
        }
    }

    /// The metric whose collapse this reason reports.
    #[must_use]
    pub const fn metric(self) -> Metric {
        match self {
            FailureReason::Bankruptcy => Metric::Treasury,
            FailureReason::NoConfidence => Metric::PublicTrust,
            FailureReason::InternationalCrisis => Metric::IntlReputation,
            FailureReason::CivilUnrest => Metric::SocialStability,
        }
    }

    /// Headline shown on the game-over screen.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            FailureReason::Bankruptcy => "BANKRUPTCY",
            FailureReason::NoConfidence => "NO CONFIDENCE",
            FailureReason::InternationalCrisis => "INTERNATIONAL CRISIS",
            FailureReason::CivilUnrest => "CIVIL UNREST",
        }
    }

    /// One-line explanation to go with the headline.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            FailureReason::Bankruptcy => "The treasury is depleted.",
            FailureReason::NoConfidence => "Public trust has collapsed.",
            FailureReason::InternationalCrisis => "International reputation is destroyed.",
            FailureReason::CivilUnrest => "Social order has collapsed.",
        }
    }
}

impl std::fmt::Display for FailureReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

/// Clamp a raw value into the metric range.
#[must_use]
pub const fn clamp_metric(value: i64) -> i64 {
    if value < METRIC_MIN {
        METRIC_MIN
    } else if value > METRIC_MAX {
        METRIC_MAX
    } else {
        value
    }
}

/// Snapshot of all four metric values.
///
/// Invariant: every stored value lies in [`METRIC_MIN`, `METRIC_MAX`].
/// All mutation goes through [`Metrics::set`], which saturates at the
/// bounds, so the invariant holds regardless of how large a delta is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    treasury: i64,
    public_trust: i64,
    intl_reputation: i64,
    social_stability: i64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Fresh-session snapshot: every metric at [`METRIC_START`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            treasury: METRIC_START,
            public_trust: METRIC_START,
            intl_reputation: METRIC_START,
            social_stability: METRIC_START,
        }
    }

    /// Build a snapshot from explicit values, clamping each into range.
    #[must_use]
    pub const fn with_values(
        treasury: i64,
        public_trust: i64,
        intl_reputation: i64,
        social_stability: i64,
    ) -> Self {
        Self {
            treasury: clamp_metric(treasury),
            public_trust: clamp_metric(public_trust),
            intl_reputation: clamp_metric(intl_reputation),
            social_stability: clamp_metric(social_stability),
        }
    }

    /// Get a metric value.
    #[must_use]
    pub const fn get(&self, metric: Metric) -> i64 {
        match metric {
            Metric::Treasury => self.treasury,
            Metric::PublicTrust => self.public_trust,
            Metric::IntlReputation => self.intl_reputation,
            Metric::SocialStability => self.social_stability,
        }
    }

    /// Set a metric value, clamping into range.
    pub fn set(&mut self, metric: Metric, value: i64) {
        let value = clamp_metric(value);
        match metric {
            Metric::Treasury => self.treasury = value,
            Metric::PublicTrust => self.public_trust = value,
            Metric::IntlReputation => self.intl_reputation = value,
            Metric::SocialStability => self.social_stability = value,
        }
    }

    /// Copy with one metric shifted by `delta`, saturating at the bounds.
    #[must_use]
    pub fn applied(mut self, metric: Metric, delta: i64) -> Self {
        self.set(metric, self.get(metric).saturating_add(delta));
        self
    }

    /// Iterate over (metric, value) pairs in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, i64)> + '_ {
        Metric::ALL.iter().map(move |&m| (m, self.get(m)))
    }

    /// First metric at or below zero, in priority order.
    #[must_use]
    pub fn first_collapsed(&self) -> Option<Metric> {
        Metric::ALL
            .iter()
            .copied()
            .find(|&m| self.get(m) <= METRIC_MIN)
    }

    /// True if any metric has hit zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.first_collapsed().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new();
        for (_, value) in metrics.iter() {
            assert_eq!(value, METRIC_START);
        }
        assert!(!metrics.is_defeated());
    }

    #[test]
    fn test_set_clamps() {
        let mut metrics = Metrics::new();

        metrics.set(Metric::Treasury, 250);
        assert_eq!(metrics.get(Metric::Treasury), METRIC_MAX);

        metrics.set(Metric::PublicTrust, -40);
        assert_eq!(metrics.get(Metric::PublicTrust), METRIC_MIN);
    }

    #[test]
    fn test_applied_saturates() {
        let metrics = Metrics::new().applied(Metric::Treasury, -60);
        assert_eq!(metrics.get(Metric::Treasury), 0);

        // Pushing further below the floor keeps it at the floor.
        let metrics = metrics.applied(Metric::Treasury, -10);
        assert_eq!(metrics.get(Metric::Treasury), 0);

        let metrics = metrics.applied(Metric::Treasury, 500);
        assert_eq!(metrics.get(Metric::Treasury), 100);
    }

    #[test]
    fn test_applied_leaves_others_untouched() {
        let metrics = Metrics::new().applied(Metric::IntlReputation, -20);

        assert_eq!(metrics.get(Metric::IntlReputation), 30);
        assert_eq!(metrics.get(Metric::Treasury), METRIC_START);
        assert_eq!(metrics.get(Metric::PublicTrust), METRIC_START);
        assert_eq!(metrics.get(Metric::SocialStability), METRIC_START);
    }

    #[test]
    fn test_first_collapsed_priority_order() {
        // Both trust and stability are at zero; treasury outranks neither,
        // so publicTrust (earlier in priority order) wins.
        let metrics = Metrics::with_values(10, 0, 40, 0);
        assert_eq!(metrics.first_collapsed(), Some(Metric::PublicTrust));

        let metrics = Metrics::with_values(0, 0, 0, 0);
        assert_eq!(metrics.first_collapsed(), Some(Metric::Treasury));
    }

    #[test]
    fn test_failure_reason_round_trip() {
        for metric in Metric::ALL {
            assert_eq!(FailureReason::for_metric(metric).metric(), metric);
        }
    }

    #[test]
    fn test_failure_reason_titles() {
        assert_eq!(FailureReason::Bankruptcy.title(), "BANKRUPTCY");
        assert_eq!(FailureReason::NoConfidence.title(), "NO CONFIDENCE");
        assert_eq!(
            FailureReason::InternationalCrisis.title(),
            "INTERNATIONAL CRISIS"
        );
        assert_eq!(FailureReason::CivilUnrest.title(), "CIVIL UNREST");
    }

    #[test]
    fn test_metric_wire_names() {
        assert_eq!(Metric::Treasury.name(), "treasury");
        assert_eq!(Metric::PublicTrust.name(), "publicTrust");
        assert_eq!(Metric::IntlReputation.name(), "intlReputation");
        assert_eq!(Metric::SocialStability.name(), "socialStability");

        let json = serde_json::to_string(&Metric::PublicTrust).unwrap();
        assert_eq!(json, "\"publicTrust\"");
    }

    #[test]
    fn test_metrics_serialization() {
        let metrics = Metrics::with_values(10, 20, 30, 40);
        let json = serde_json::to_string(&metrics).unwrap();
        assert_eq!(
            json,
            "{\"treasury\":10,\"publicTrust\":20,\"intlReputation\":30,\"socialStability\":40}"
        );

        let back: Metrics = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metrics);
    }
}
