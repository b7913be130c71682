//! Data providers: where a session's content comes from.
//!
//! Two-tier: a primary provider (typically JSON documents fetched by the
//! presentation layer) backed by the built-in default dataset. The
//! fallback is a first-class contract, not an error path - the game must
//! play even when no external data arrives. Selection happens once, when
//! the dataset is loaded; sessions never re-query mid-play.

use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use super::dataset::Dataset;
use super::defaults;
use crate::core::{Character, GameEvent};

/// Failure to produce content from a provider.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("malformed data document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("data document contains no events")]
    EmptyEvents,
    #[error("data document contains no characters")]
    EmptyCharacters,
}

/// A source of characters and events.
///
/// The two collections load independently so the two-tier source can fall
/// back per collection, the way the original loader treated
/// `events.json` and `characters.json` as separate fetches.
pub trait DataProvider {
    fn load_characters(&self) -> Result<Vec<Character>, DataError>;
    fn load_events(&self) -> Result<Vec<GameEvent>, DataError>;
}

/// Wire shape of a `characters.json` document.
#[derive(Debug, Deserialize)]
struct CharactersDoc {
    #[serde(default)]
    characters: Vec<Character>,
}

/// Wire shape of an `events.json` document.
#[derive(Debug, Deserialize)]
struct EventsDoc {
    #[serde(default)]
    events: Vec<GameEvent>,
}

/// Provider over raw JSON documents handed in by the caller.
///
/// How the documents got here (fetch, disk, embed) is the caller's
/// business; this crate only parses them.
#[derive(Clone, Debug, Default)]
pub struct JsonProvider {
    characters_json: Option<String>,
    events_json: Option<String>,
}

impl JsonProvider {
    /// Create a provider with no documents (every load falls back).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a `characters.json` document.
    #[must_use]
    pub fn with_characters(mut self, json: impl Into<String>) -> Self {
        self.characters_json = Some(json.into());
        self
    }

    /// Supply an `events.json` document.
    #[must_use]
    pub fn with_events(mut self, json: impl Into<String>) -> Self {
        self.events_json = Some(json.into());
        self
    }
}

impl DataProvider for JsonProvider {
    fn load_characters(&self) -> Result<Vec<Character>, DataError> {
        let json = self
            .characters_json
            .as_deref()
            .ok_or(DataError::EmptyCharacters)?;
        let doc: CharactersDoc = serde_json::from_str(json)?;
        if doc.characters.is_empty() {
            return Err(DataError::EmptyCharacters);
        }
        Ok(doc.characters)
    }

    fn load_events(&self) -> Result<Vec<GameEvent>, DataError> {
        let json = self.events_json.as_deref().ok_or(DataError::EmptyEvents)?;
        let doc: EventsDoc = serde_json::from_str(json)?;
        if doc.events.is_empty() {
            return Err(DataError::EmptyEvents);
        }
        Ok(doc.events)
    }
}

/// Two-tier source: a primary provider with the built-in fallback.
#[derive(Clone, Debug)]
pub struct DataSource<P> {
    primary: P,
}

impl<P: DataProvider> DataSource<P> {
    pub fn new(primary: P) -> Self {
        Self { primary }
    }

    /// Load a dataset, falling back per collection to the built-in
    /// content when the primary can't supply it.
    ///
    /// Never fails: the fallback dataset always exists.
    #[must_use]
    pub fn load(&self) -> Dataset {
        let characters = match self.primary.load_characters() {
            Ok(characters) => characters,
            Err(err) => {
                warn!(%err, "using default characters");
                defaults::default_characters()
            }
        };

        let events = match self.primary.load_events() {
            Ok(events) => events,
            Err(err) => {
                warn!(%err, "using default events");
                defaults::default_events()
            }
        };

        Dataset::new(characters, events)
    }
}
