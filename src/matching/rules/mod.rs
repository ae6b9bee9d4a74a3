//! Built-in scoring rules.
//!
//! # Categories
//!
//! - **Profile**: AGE
//! - **Keyword**: VOICE, GENRE
//! - **Flat**: BASE
//!
//! # Score Convention
//! All rules return non-negative points; higher = better fit. Each rule caps
//! its own contribution, and the engine caps the total.

use super::{MatchContext, RuleScore, ScoringRule};
use crate::config::MatchWeights;
use crate::models::Actor;

/// Converts a keyword hit count to capped points.
fn capped_hits(hits: usize, per_hit: RuleScore, cap: RuleScore) -> RuleScore {
    let hits = RuleScore::try_from(hits).unwrap_or(RuleScore::MAX);
    hits.saturating_mul(per_hit).min(cap)
}

// ======================== Profile rules ========================

/// Age range fit.
///
/// All-or-nothing: awards `points` when the role has an age range and the
/// actor's age range contains it as a substring (`"30s"` in `"30s-40s"`).
#[derive(Debug, Clone, Copy)]
pub struct AgeRange {
    /// Points for a fit.
    pub points: RuleScore,
}

impl Default for AgeRange {
    fn default() -> Self {
        Self { points: 60 }
    }
}

impl ScoringRule for AgeRange {
    fn name(&self) -> &'static str {
        "AGE"
    }

    fn evaluate(&self, actor: &Actor, context: &MatchContext) -> RuleScore {
        if context.age_range.is_empty() {
            return 0;
        }
        if actor.age_range.to_lowercase().contains(&context.age_range) {
            self.points
        } else {
            0
        }
    }

    fn description(&self) -> &'static str {
        "Age range substring match"
    }
}

// ======================== Keyword rules ========================

/// Vocal-spec keywords found in the actor's voice descriptors.
#[derive(Debug, Clone, Copy)]
pub struct VoiceKeywords {
    /// Points per matching keyword.
    pub per_hit: RuleScore,
    /// Maximum points.
    pub cap: RuleScore,
}

impl Default for VoiceKeywords {
    fn default() -> Self {
        Self {
            per_hit: 15,
            cap: 30,
        }
    }
}

impl ScoringRule for VoiceKeywords {
    fn name(&self) -> &'static str {
        "VOICE"
    }

    fn evaluate(&self, actor: &Actor, context: &MatchContext) -> RuleScore {
        capped_hits(context.keyword_hits(&actor.voice), self.per_hit, self.cap)
    }

    fn description(&self) -> &'static str {
        "Vocal keywords in voice descriptors"
    }
}

/// Vocal-spec keywords found in the actor's genres.
#[derive(Debug, Clone, Copy)]
pub struct GenreKeywords {
    /// Points per matching keyword.
    pub per_hit: RuleScore,
    /// Maximum points.
    pub cap: RuleScore,
}

impl Default for GenreKeywords {
    fn default() -> Self {
        Self {
            per_hit: 10,
            cap: 10,
        }
    }
}

impl ScoringRule for GenreKeywords {
    fn name(&self) -> &'static str {
        "GENRE"
    }

    fn evaluate(&self, actor: &Actor, context: &MatchContext) -> RuleScore {
        capped_hits(context.keyword_hits(&actor.genres), self.per_hit, self.cap)
    }

    fn description(&self) -> &'static str {
        "Vocal keywords in genres"
    }
}

// ======================== Flat rule ========================

/// Participation points for every actor past the gender wall.
///
/// Keeps eligible actors visible with a non-zero score.
#[derive(Debug, Clone, Copy)]
pub struct Participation {
    /// Flat points.
    pub points: RuleScore,
}

impl Default for Participation {
    fn default() -> Self {
        Self { points: 5 }
    }
}

impl ScoringRule for Participation {
    fn name(&self) -> &'static str {
        "BASE"
    }

    fn evaluate(&self, _actor: &Actor, _context: &MatchContext) -> RuleScore {
        self.points
    }

    fn description(&self) -> &'static str {
        "Base participation score"
    }
}

impl From<&MatchWeights> for AgeRange {
    fn from(w: &MatchWeights) -> Self {
        Self {
            points: w.age_points,
        }
    }
}

impl From<&MatchWeights> for VoiceKeywords {
    fn from(w: &MatchWeights) -> Self {
        Self {
            per_hit: w.voice_points_per_hit,
            cap: w.voice_cap,
        }
    }
}

impl From<&MatchWeights> for GenreKeywords {
    fn from(w: &MatchWeights) -> Self {
        Self {
            per_hit: w.genre_points_per_hit,
            cap: w.genre_cap,
        }
    }
}

impl From<&MatchWeights> for Participation {
    fn from(w: &MatchWeights) -> Self {
        Self {
            points: w.base_points,
        }
    }
}
