//! Data contract tests: JSON documents, the two-tier source, and sessions
//! built on top of loaded datasets.

use std::sync::Arc;

use cardswipe::core::{CharacterId, Choice, EventId, Metric};
use cardswipe::data::{DataProvider, DataSource, JsonProvider};
use cardswipe::engine::{Phase, Session};

const CHARACTERS_DOC: &str = r#"{
    "characters": [
        { "id": "A1", "name": "Sal", "title": "Union Boss", "icon": "🚇" },
        { "id": "B5", "name": "Carlos", "title": "Organizer", "icon": "🍽️" }
    ]
}"#;

const EVENTS_DOC: &str = r#"{
    "events": [
        {
            "id": 1,
            "title": "Minimum Wage → $20/hour",
            "description": "City Council proposes raising minimum wage from $15 to $20.",
            "category": "economic",
            "optionA": {
                "text": "SUPPORT: Raise to $20",
                "metricChanges": { "treasury": -10, "publicTrust": 15, "intlReputation": 5, "socialStability": 10 },
                "characterImpacts": [
                    { "id": "B5", "change": 20 },
                    { "id": "A4", "change": -20 }
                ]
            },
            "optionB": {
                "text": "OPPOSE: Keep at $15",
                "metricChanges": { "treasury": 8, "publicTrust": -12 },
                "characterImpacts": [
                    { "id": "B5", "change": -20 }
                ]
            }
        }
    ]
}"#;

#[test]
fn test_load_wire_format_documents() {
    let provider = JsonProvider::new()
        .with_characters(CHARACTERS_DOC)
        .with_events(EVENTS_DOC);

    let dataset = DataSource::new(provider).load();

    assert_eq!(dataset.character_count(), 2);
    assert_eq!(dataset.event_count(), 1);

    let sal = dataset.character(&CharacterId::new("A1")).unwrap();
    assert_eq!(sal.title.as_deref(), Some("Union Boss"));

    let event = dataset.event(EventId::new(1)).unwrap();
    assert_eq!(event.category.as_deref(), Some("economic"));
    assert_eq!(
        event.option_a.metric_changes.get(&Metric::SocialStability),
        Some(&10)
    );
}

#[test]
fn test_session_over_loaded_dataset() {
    let provider = JsonProvider::new()
        .with_characters(CHARACTERS_DOC)
        .with_events(EVENTS_DOC);
    let mut session = Session::new(Arc::new(DataSource::new(provider).load()));
    session.start().unwrap();

    let feedback = session.choose(Choice::A).unwrap();

    assert_eq!(session.metrics().get(Metric::Treasury), 40);
    assert_eq!(session.metrics().get(Metric::PublicTrust), 65);

    // Carlos exists and reacts; A4 isn't in this roster and is ignored.
    assert_eq!(feedback.character_reactions.len(), 1);
    assert_eq!(feedback.character_reactions[0].character.name, "Carlos");

    // Single-event deck: resolving it is a victory.
    assert_eq!(session.phase(), Phase::Results);
}

#[test]
fn test_fallback_dataset_is_playable() {
    // No documents at all: the built-in set carries the session.
    let mut session = Session::new(Arc::new(DataSource::new(JsonProvider::new()).load()));
    session.start().unwrap();

    assert_eq!(session.dataset().character_count(), 12);
    assert_eq!(session.dataset().event_count(), 10);
    assert!(session.current_event().is_some());

    session.choose(Choice::A).unwrap();
    assert_eq!(session.phase(), Phase::Play);
}

#[test]
fn test_partial_fallback_mixes_tiers() {
    // Events parse, characters don't: the roster falls back while the
    // deck comes from the primary document.
    let provider = JsonProvider::new()
        .with_characters("{ broken")
        .with_events(EVENTS_DOC);

    let dataset = DataSource::new(provider).load();

    assert_eq!(dataset.event_count(), 1);
    assert_eq!(dataset.character_count(), 12);
    assert!(dataset.character(&CharacterId::new("duck")).is_some());
}

#[test]
fn test_provider_surface_errors_directly() {
    let provider = JsonProvider::new().with_events(r#"{ "events": [] }"#);

    assert!(provider.load_events().is_err());
    assert!(provider.load_characters().is_err());
}
