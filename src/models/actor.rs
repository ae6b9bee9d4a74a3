//! Actor (talent) model.
//!
//! Actors are the roster entries the matcher ranks and the conflict checker
//! books: a voice performer with descriptive attributes and availability
//! data. Records are read-only snapshots maintained by the roster feature.

use serde::{Deserialize, Serialize};

use super::fields::loose_string;
use super::Availability;

/// A voice performer on the roster.
///
/// All fields are free text and default to empty when absent. Availability
/// fields (`next_available`, `bookouts`) are parsed lazily and tolerate
/// malformed content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Actor {
    /// Unique actor identifier.
    #[serde(deserialize_with = "loose_string")]
    pub id: String,
    /// Display name. Also a case-insensitive lookup key.
    #[serde(deserialize_with = "loose_string")]
    pub name: String,
    /// Gender, free text (e.g. `Male`, `Female/Male`, `non-binary`).
    #[serde(deserialize_with = "loose_string")]
    pub gender: String,
    /// Playable ages, substring-matched against a role's age range.
    #[serde(alias = "ageRange", alias = "ages", deserialize_with = "loose_string")]
    pub age_range: String,
    /// Timbre/style descriptors.
    #[serde(deserialize_with = "loose_string")]
    pub voice: String,
    /// Content-category descriptors.
    #[serde(deserialize_with = "loose_string")]
    pub genres: String,
    /// Lifecycle flag. See [`ActorStatus::classify`].
    #[serde(deserialize_with = "loose_string")]
    pub status: String,
    /// Date before which the actor cannot start.
    #[serde(alias = "nextAvail", alias = "next_avail", deserialize_with = "loose_string")]
    pub next_available: String,
    /// Comma-separated `"<start> to <end>"` / `"<start> - <end>"` ranges.
    #[serde(deserialize_with = "loose_string")]
    pub bookouts: String,
}

/// Availability class derived from an actor's free-text status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorStatus {
    /// No blocking marker (includes unknown vocabulary).
    Available,
    /// Status mentions `hiatus`.
    Hiatus,
    /// Status mentions `inactive`.
    Inactive,
}

/// Status markers that make an actor categorically unavailable.
///
/// Checked in order against the lower-cased status text.
const UNAVAILABLE_MARKERS: &[(&str, ActorStatus)] = &[
    ("hiatus", ActorStatus::Hiatus),
    ("inactive", ActorStatus::Inactive),
];

impl ActorStatus {
    /// Classifies free-text status. Unknown text is treated as available.
    pub fn classify(status: &str) -> Self {
        let status = status.to_lowercase();
        UNAVAILABLE_MARKERS
            .iter()
            .find(|(marker, _)| status.contains(marker))
            .map(|&(_, class)| class)
            .unwrap_or(ActorStatus::Available)
    }

    /// Whether this class blocks every date.
    #[inline]
    pub fn is_unavailable(self) -> bool {
        self != ActorStatus::Available
    }
}

impl Actor {
    /// Creates an actor with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the gender.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Sets the age range.
    pub fn with_age_range(mut self, age_range: impl Into<String>) -> Self {
        self.age_range = age_range.into();
        self
    }

    /// Sets the voice descriptors.
    pub fn with_voice(mut self, voice: impl Into<String>) -> Self {
        self.voice = voice.into();
        self
    }

    /// Sets the genre descriptors.
    pub fn with_genres(mut self, genres: impl Into<String>) -> Self {
        self.genres = genres.into();
        self
    }

    /// Sets the status flag.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Sets the next-available date.
    pub fn with_next_available(mut self, date: impl Into<String>) -> Self {
        self.next_available = date.into();
        self
    }

    /// Appends a bookout range to the comma-separated list.
    pub fn with_bookout(mut self, start: &str, end: &str) -> Self {
        if !self.bookouts.trim().is_empty() {
            self.bookouts.push_str(", ");
        }
        self.bookouts.push_str(start);
        self.bookouts.push_str(" to ");
        self.bookouts.push_str(end);
        self
    }

    /// Replaces the raw bookout list.
    pub fn with_bookouts(mut self, bookouts: impl Into<String>) -> Self {
        self.bookouts = bookouts.into();
        self
    }

    /// Availability class of this actor's status.
    pub fn status_class(&self) -> ActorStatus {
        ActorStatus::classify(&self.status)
    }

    /// Parsed availability calendar (malformed entries dropped).
    pub fn availability(&self) -> Availability {
        Availability::from_actor(self)
    }

    /// Whether this actor's name matches `name`, ignoring case and padding.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

/// Finds an actor by name, case-insensitively.
///
/// Used when the caller only has a name string (e.g. a selection typed into
/// a free-text field). Returns the first match in roster order.
pub fn find_actor_by_name<'a>(roster: &'a [Actor], name: &str) -> Option<&'a Actor> {
    if name.trim().is_empty() {
        return None;
    }
    roster.iter().find(|a| a.is_named(name))
}
