//! Narrative events and their two options.
//!
//! An event is one fixed decision point: descriptive text plus exactly two
//! options. Options carry the deltas that decisions apply - a subset map of
//! metric changes and a list of character impacts. Events are consumed
//! strictly in order; there is no branching or skipping.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::character::CharacterId;
use super::metric::Metric;

/// Unique identifier for an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u32);

impl EventId {
    /// Create a new event ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Event({})", self.0)
    }
}

/// Which side of the card the player swiped.
///
/// The only thing the presentation layer (drag thresholds, clicks, taps)
/// communicates to the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
}

impl Choice {
    /// Display label ("A" or "B").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
        }
    }

    /// The other choice.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Choice::A => Choice::B,
            Choice::B => Choice::A,
        }
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A support delta aimed at one character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterImpact {
    /// Character the delta applies to. Unknown ids are silently ignored
    /// at resolution time - a defined leniency, not an error.
    pub id: CharacterId,

    /// Signed support delta.
    pub change: i64,
}

impl CharacterImpact {
    /// Create a new impact.
    pub fn new(id: impl Into<CharacterId>, change: i64) -> Self {
        Self {
            id: id.into(),
            change,
        }
    }
}

/// Per-metric deltas carried by an option.
///
/// A subset map: metrics absent from it are unaffected.
pub type MetricChanges = FxHashMap<Metric, i64>;

/// One of the two choices attached to an event.
///
/// ## Example
///
/// ```
/// use cardswipe::core::{DecisionOption, Metric};
///
/// let raise = DecisionOption::new("SUPPORT: Raise to $20")
///     .with_metric_change(Metric::Treasury, -10)
///     .with_metric_change(Metric::PublicTrust, 15)
///     .with_impact("B5", 20)
///     .with_impact("A4", -20);
///
/// assert_eq!(raise.metric_changes.get(&Metric::Treasury), Some(&-10));
/// assert_eq!(raise.metric_changes.get(&Metric::IntlReputation), None);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOption {
    /// Text shown on the option card.
    pub text: String,

    /// Metric deltas. Metrics not listed are unaffected.
    #[serde(default)]
    pub metric_changes: MetricChanges,

    /// Support deltas. Characters not listed are unaffected.
    /// SmallVec: options touch a handful of characters at most.
    #[serde(default)]
    pub character_impacts: SmallVec<[CharacterImpact; 4]>,
}

impl DecisionOption {
    /// Create an option with no deltas.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metric_changes: MetricChanges::default(),
            character_impacts: SmallVec::new(),
        }
    }

    /// Add a metric delta.
    #[must_use]
    pub fn with_metric_change(mut self, metric: Metric, delta: i64) -> Self {
        self.metric_changes.insert(metric, delta);
        self
    }

    /// Add a character impact.
    #[must_use]
    pub fn with_impact(mut self, id: impl Into<CharacterId>, change: i64) -> Self {
        self.character_impacts.push(CharacterImpact::new(id, change));
        self
    }

    /// The impact this option has on a character, if any.
    #[must_use]
    pub fn impact_on(&self, id: &CharacterId) -> Option<&CharacterImpact> {
        self.character_impacts.iter().find(|imp| &imp.id == id)
    }
}

/// One narrative decision point with exactly two options.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    /// Unique identifier for this event.
    pub id: EventId,

    /// Headline shown above the card text.
    #[serde(default)]
    pub title: String,

    /// Narrative text on the card.
    pub description: String,

    /// Content grouping ("economic", "social", ...). Display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Character featured on the card, if any. Display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<CharacterId>,

    /// Option chosen by swiping left.
    pub option_a: DecisionOption,

    /// Option chosen by swiping right.
    pub option_b: DecisionOption,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        description: impl Into<String>,
        option_a: DecisionOption,
        option_b: DecisionOption,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            category: None,
            character: None,
            option_a,
            option_b,
        }
    }

    /// Set the content category.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the featured character.
    #[must_use]
    pub fn with_character(mut self, id: impl Into<CharacterId>) -> Self {
        self.character = Some(id.into());
        self
    }

    /// The option matching a choice.
    #[must_use]
    pub fn option(&self, choice: Choice) -> &DecisionOption {
        match choice {
            Choice::A => &self.option_a,
            Choice::B => &self.option_b,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> GameEvent {
        GameEvent::new(
            EventId::new(1),
            "Minimum Wage",
            "City Council proposes raising minimum wage.",
            DecisionOption::new("SUPPORT")
                .with_metric_change(Metric::Treasury, -10)
                .with_impact("B5", 20),
            DecisionOption::new("OPPOSE")
                .with_metric_change(Metric::Treasury, 8)
                .with_impact("B5", -20),
        )
        .with_category("economic")
    }

    #[test]
    fn test_option_lookup_by_choice() {
        let event = sample_event();

        assert_eq!(event.option(Choice::A).text, "SUPPORT");
        assert_eq!(event.option(Choice::B).text, "OPPOSE");
    }

    #[test]
    fn test_choice_labels() {
        assert_eq!(Choice::A.label(), "A");
        assert_eq!(Choice::B.label(), "B");
        assert_eq!(Choice::A.other(), Choice::B);
        assert_eq!(Choice::B.other(), Choice::A);
    }

    #[test]
    fn test_impact_on() {
        let event = sample_event();
        let option = event.option(Choice::A);

        assert_eq!(option.impact_on(&CharacterId::new("B5")).unwrap().change, 20);
        assert!(option.impact_on(&CharacterId::new("ZZZ")).is_none());
    }

    #[test]
    fn test_event_deserialization_wire_format() {
        // Shape matches data/events.json documents.
        let json = r#"{
            "id": 1,
            "title": "Minimum Wage → $20/hour",
            "description": "City Council proposes raising minimum wage from $15 to $20.",
            "category": "economic",
            "optionA": {
                "text": "SUPPORT: Raise to $20",
                "metricChanges": { "treasury": -10, "publicTrust": 15 },
                "characterImpacts": [
                    { "id": "B5", "change": 20 },
                    { "id": "A4", "change": -20 }
                ]
            },
            "optionB": {
                "text": "OPPOSE: Keep at $15",
                "metricChanges": { "treasury": 8 },
                "characterImpacts": []
            }
        }"#;

        let event: GameEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, EventId::new(1));
        assert_eq!(event.category.as_deref(), Some("economic"));
        assert_eq!(
            event.option_a.metric_changes.get(&Metric::PublicTrust),
            Some(&15)
        );
        assert_eq!(event.option_a.character_impacts.len(), 2);
        assert!(event.option_b.character_impacts.is_empty());
    }

    #[test]
    fn test_option_missing_deltas_default_empty() {
        let json = r#"{ "text": "Do nothing" }"#;
        let option: DecisionOption = serde_json::from_str(json).unwrap();

        assert!(option.metric_changes.is_empty());
        assert!(option.character_impacts.is_empty());
    }

    #[test]
    fn test_event_serialization_round_trip() {
        let event = sample_event().with_character("B5");
        let json = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(back, event);
    }
}
