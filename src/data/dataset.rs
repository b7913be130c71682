//! Dataset: the read-only content a session plays through.

use im::Vector;
use rustc_hash::FxHashMap;

use crate::core::{Character, CharacterId, EventId, GameEvent};

/// Characters and events for one game, with id-indexed lookup.
///
/// Read-only after construction; sessions share one via `Arc` and never
/// re-query it mid-session.
#[derive(Clone, Debug)]
pub struct Dataset {
    characters: Vec<Character>,
    events: Vec<GameEvent>,
    character_index: FxHashMap<CharacterId, usize>,
    event_index: FxHashMap<EventId, usize>,
}

impl Dataset {
    /// Build a dataset.
    ///
    /// Panics if `events` is empty or if two characters or two events
    /// share an id.
    pub fn new(characters: Vec<Character>, events: Vec<GameEvent>) -> Self {
        assert!(!events.is_empty(), "Dataset must contain at least one event");

        let mut character_index = FxHashMap::default();
        for (i, ch) in characters.iter().enumerate() {
            if character_index.insert(ch.id.clone(), i).is_some() {
                panic!("Character with id {:?} already in dataset", ch.id);
            }
        }

        let mut event_index = FxHashMap::default();
        for (i, ev) in events.iter().enumerate() {
            if event_index.insert(ev.id, i).is_some() {
                panic!("Event with id {} already in dataset", ev.id);
            }
        }

        Self {
            characters,
            events,
            character_index,
            event_index,
        }
    }

    /// All characters, in dataset order.
    #[must_use]
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// All events, in play order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Look up a character by id.
    #[must_use]
    pub fn character(&self, id: &CharacterId) -> Option<&Character> {
        self.character_index.get(id).map(|&i| &self.characters[i])
    }

    /// Look up an event by id.
    #[must_use]
    pub fn event(&self, id: EventId) -> Option<&GameEvent> {
        self.event_index.get(&id).map(|&i| &self.events[i])
    }

    /// The event at a play-order index.
    #[must_use]
    pub fn event_at(&self, index: usize) -> Option<&GameEvent> {
        self.events.get(index)
    }

    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn character_count(&self) -> usize {
        self.characters.len()
    }

    /// Roster with every support score reset to 0, for a fresh session.
    #[must_use]
    pub fn fresh_roster(&self) -> Vector<Character> {
        self.characters
            .iter()
            .map(Character::with_support_reset)
            .collect()
    }
}
