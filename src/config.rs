//! Matcher weight configuration.
//!
//! The default weights reproduce the studio's scoring table:
//!
//! | Component | Points | Cap |
//! |-----------|--------|-----|
//! | Age range substring | 60 | 60 |
//! | Voice keyword hit | 15 each | 30 |
//! | Genre keyword hit | 10 each | 10 |
//! | Participation | 5 | 5 |
//! | Regular candidate total | | 99 |
//!
//! Only a client-requested actor may score [`REQUESTED_SCORE`].

use serde::{Deserialize, Serialize};

use crate::error::{CastingError, CastingResult};

/// Score given to the client-requested actor.
pub const REQUESTED_SCORE: u32 = 100;

/// Point values for the standard scoring rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    /// Points when the actor's age range contains the role's.
    pub age_points: u32,
    /// Points per keyword found in the actor's voice descriptors.
    pub voice_points_per_hit: u32,
    /// Maximum voice points.
    pub voice_cap: u32,
    /// Points per keyword found in the actor's genres.
    pub genre_points_per_hit: u32,
    /// Maximum genre points.
    pub genre_cap: u32,
    /// Flat points for every gender-eligible actor.
    pub base_points: u32,
    /// Ceiling for any non-requested candidate.
    pub score_cap: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            age_points: 60,
            voice_points_per_hit: 15,
            voice_cap: 30,
            genre_points_per_hit: 10,
            genre_cap: 10,
            base_points: 5,
            score_cap: 99,
        }
    }
}

impl MatchWeights {
    /// Parses weights from JSON. Missing keys take their default value.
    ///
    /// # Errors
    /// Returns an error if the JSON is malformed or fails [`validate`](Self::validate).
    pub fn from_json(json: &str) -> CastingResult<Self> {
        let weights: Self = serde_json::from_str(json)
            .map_err(|e| CastingError::InvalidConfig(e.to_string()))?;
        weights.validate()?;
        Ok(weights)
    }

    /// Checks that the weights keep requested actors strictly on top.
    ///
    /// # Errors
    /// Returns [`CastingError::InvalidConfig`] when the regular cap reaches
    /// the requested score or a per-hit value exceeds its cap.
    pub fn validate(&self) -> CastingResult<()> {
        if self.score_cap >= REQUESTED_SCORE {
            return Err(CastingError::InvalidConfig(format!(
                "score_cap must be below {REQUESTED_SCORE}, got {}",
                self.score_cap
            )));
        }
        if self.voice_points_per_hit > self.voice_cap {
            return Err(CastingError::InvalidConfig(format!(
                "voice_points_per_hit ({}) exceeds voice_cap ({})",
                self.voice_points_per_hit, self.voice_cap
            )));
        }
        if self.genre_points_per_hit > self.genre_cap {
            return Err(CastingError::InvalidConfig(format!(
                "genre_points_per_hit ({}) exceeds genre_cap ({})",
                self.genre_points_per_hit, self.genre_cap
            )));
        }
        Ok(())
    }

    /// Sets the age points.
    pub fn with_age_points(mut self, points: u32) -> Self {
        self.age_points = points;
        self
    }

    /// Sets voice points per hit and the voice cap.
    pub fn with_voice(mut self, per_hit: u32, cap: u32) -> Self {
        self.voice_points_per_hit = per_hit;
        self.voice_cap = cap;
        self
    }

    /// Sets genre points per hit and the genre cap.
    pub fn with_genre(mut self, per_hit: u32, cap: u32) -> Self {
        self.genre_points_per_hit = per_hit;
        self.genre_cap = cap;
        self
    }

    /// Sets the participation points.
    pub fn with_base_points(mut self, points: u32) -> Self {
        self.base_points = points;
        self
    }

    /// Sets the regular-candidate ceiling.
    pub fn with_score_cap(mut self, cap: u32) -> Self {
        self.score_cap = cap;
        self
    }
}
