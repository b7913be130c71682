//! Characters and their support scores.
//!
//! A character is display identity (name, icon) plus one number: a
//! `support` score clamped to [-100, 100]. Options shift support via
//! `CharacterImpact` entries; characters an option doesn't name are
//! untouched.

use serde::{Deserialize, Serialize};

/// Lower bound for support scores.
pub const SUPPORT_MIN: i64 = -100;

/// Upper bound for support scores.
pub const SUPPORT_MAX: i64 = 100;

/// Stable character identifier.
///
/// Ids come from the dataset ("duck", "B5", ...) and are opaque to the
/// engine - they're only compared for equality.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    /// Create a new character ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CharacterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CharacterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Clamp a raw value into the support range.
#[must_use]
pub const fn clamp_support(value: i64) -> i64 {
    if value < SUPPORT_MIN {
        SUPPORT_MIN
    } else if value > SUPPORT_MAX {
        SUPPORT_MAX
    } else {
        value
    }
}

/// An NPC with a bounded approval score.
///
/// Invariant: `support` always lies in [`SUPPORT_MIN`, `SUPPORT_MAX`];
/// shifts go through [`Character::with_support_delta`], which saturates.
///
/// ## Example
///
/// ```
/// use cardswipe::core::Character;
///
/// let duck = Character::new("duck", "Duck").with_fallback_emoji("\u{1F986}");
///
/// let after = duck.with_support_delta(130);
/// assert_eq!(after.support, 100);
/// assert_eq!(duck.support, 0); // original untouched
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Stable identifier, referenced by option impacts.
    pub id: CharacterId,

    /// Display name.
    pub name: String,

    /// Role line shown under the name ("Union Boss"). Display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Icon asset path or emoji. Display-only.
    #[serde(default)]
    pub icon: String,

    /// Emoji used when the icon asset can't be shown. Display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_emoji: Option<String>,

    /// Approval score, always within [`SUPPORT_MIN`, `SUPPORT_MAX`].
    #[serde(default)]
    pub support: i64,
}

impl Character {
    /// Create a character with support 0.
    pub fn new(id: impl Into<CharacterId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            title: None,
            icon: String::new(),
            fallback_emoji: None,
            support: 0,
        }
    }

    /// Set the role line.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the fallback emoji.
    #[must_use]
    pub fn with_fallback_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.fallback_emoji = Some(emoji.into());
        self
    }

    /// Copy with support shifted by `delta`, saturating at the bounds.
    #[must_use]
    pub fn with_support_delta(&self, delta: i64) -> Self {
        Self {
            support: clamp_support(self.support.saturating_add(delta)),
            ..self.clone()
        }
    }

    /// Copy with support reset to 0, for a fresh session.
    #[must_use]
    pub fn with_support_reset(&self) -> Self {
        Self {
            support: 0,
            ..self.clone()
        }
    }
}
