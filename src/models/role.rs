//! Role model.
//!
//! A role is one castable character slot within a production, carrying the
//! gender, age and vocal requirements the matcher scores actors against.
//! Roles are joined to casting selections by `role_id`.

use serde::{Deserialize, Serialize};

use super::fields::loose_string;

/// Marker inside `vocal_specs` naming a client-preferred actor.
pub const CLIENT_REQUEST_MARKER: &str = "client request:";

/// A casting requirement for one character in one project.
///
/// All text fields are free text and default to empty when absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    /// Stable role identifier (join key for casting selections).
    #[serde(alias = "roleId", deserialize_with = "loose_string")]
    pub role_id: String,
    /// Owning project.
    #[serde(alias = "projectId", deserialize_with = "loose_string")]
    pub project_id: String,
    /// Display label.
    #[serde(alias = "characterName", deserialize_with = "loose_string")]
    pub character_name: String,
    /// Required gender: `male`, `female`, `any`, `tbd`, empty, or other free text.
    #[serde(deserialize_with = "loose_string")]
    pub gender: String,
    /// Age label, matched by substring (e.g. `30s`, `young adult`).
    #[serde(alias = "ageRange", deserialize_with = "loose_string")]
    pub age_range: String,
    /// Vocal description; keyword source for scoring.
    #[serde(alias = "vocalSpecs", deserialize_with = "loose_string")]
    pub vocal_specs: String,
    /// Lifecycle tag (`Open`, `Booked`, ...). Informational only.
    #[serde(deserialize_with = "loose_string")]
    pub status: String,
}

impl Role {
    /// Creates a role with the given ID.
    pub fn new(role_id: impl Into<String>) -> Self {
        Self {
            role_id: role_id.into(),
            ..Default::default()
        }
    }

    /// Sets the owning project.
    pub fn with_project(mut self, project_id: impl Into<String>) -> Self {
        self.project_id = project_id.into();
        self
    }

    /// Sets the character name.
    pub fn with_character(mut self, name: impl Into<String>) -> Self {
        self.character_name = name.into();
        self
    }

    /// Sets the required gender.
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    /// Sets the age range label.
    pub fn with_age_range(mut self, age_range: impl Into<String>) -> Self {
        self.age_range = age_range.into();
        self
    }

    /// Sets the vocal specs.
    pub fn with_vocal_specs(mut self, specs: impl Into<String>) -> Self {
        self.vocal_specs = specs.into();
        self
    }

    /// Sets the lifecycle status.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Name of the client-requested actor embedded in `vocal_specs`.
    ///
    /// Looks for `client request:` (case-insensitive) and returns the rest of
    /// the text with `*` removed, trimmed and lower-cased. Returns `None`
    /// when the marker is absent or names nobody.
    pub fn requested_actor_name(&self) -> Option<String> {
        let specs = self.vocal_specs.to_lowercase();
        let start = specs.find(CLIENT_REQUEST_MARKER)? + CLIENT_REQUEST_MARKER.len();
        let name: String = specs
            .get(start..)?
            .chars()
            .filter(|&c| c != '*')
            .collect();
        let name = name.trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}
