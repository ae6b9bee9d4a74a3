//! Casting matcher: ranks a roster of actors against a role.
//!
//! # Algorithm
//!
//! 1. **Gender wall**: actors failing [`GenderRequirement`] are dropped.
//! 2. **Instant winner**: an actor named by the role's `client request:`
//!    marker scores 100 and is flagged `is_requested`.
//! 3. **Weighted scoring**: everyone else sums the scoring rules (age 60,
//!    voice keywords up to 30, genre keywords up to 10, base 5), capped at 99.
//! 4. **Ranking**: stable sort by score, best first. No truncation.
//!
//! # Usage
//!
//! ```
//! use u_casting::matching::match_role;
//! use u_casting::models::{Actor, Role};
//!
//! let role = Role::new("R1")
//!     .with_gender("male")
//!     .with_age_range("30s")
//!     .with_vocal_specs("gravelly villain");
//! let roster = vec![
//!     Actor::new("A").with_gender("Male").with_age_range("30s-40s").with_voice("gravelly baritone"),
//!     Actor::new("B").with_gender("Female").with_age_range("30s"),
//! ];
//!
//! let ranked = match_role(Some(&role), &roster);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].actor.id, "A");
//! assert_eq!(ranked[0].score, 80);
//! ```

mod context;
mod engine;
mod gender;
pub mod rules;

pub use context::{extract_keywords, MatchContext};
pub use engine::MatchEngine;
pub use gender::GenderRequirement;

use serde::Serialize;
use std::fmt::Debug;

use crate::config::REQUESTED_SCORE;
use crate::models::{Actor, Role};

/// Points returned by a scoring rule.
///
/// Higher = better fit.
pub type RuleScore = u32;

/// A scoring rule that evaluates one facet of an actor's fit for a role.
///
/// # Score Convention
/// **Higher score = better fit.** Rules return points already capped to
/// their own maximum; the engine sums them and applies the overall cap.
pub trait ScoringRule: Send + Sync + Debug {
    /// Rule name (e.g., "AGE", "VOICE").
    fn name(&self) -> &'static str;

    /// Points this actor earns under the role's normalized requirements.
    fn evaluate(&self, actor: &Actor, context: &MatchContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// One ranked candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    /// The scored actor (borrowed from the roster).
    pub actor: &'a Actor,
    /// Fit score, 0..=100. Only requested actors reach 100.
    pub score: RuleScore,
    /// Set when the client requested this actor by name.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_requested: bool,
}

impl<'a> MatchResult<'a> {
    /// A regular, rule-scored candidate.
    pub fn scored(actor: &'a Actor, score: RuleScore) -> Self {
        Self {
            actor,
            score,
            is_requested: false,
        }
    }

    /// The client-requested instant winner.
    pub fn requested(actor: &'a Actor) -> Self {
        Self {
            actor,
            score: REQUESTED_SCORE,
            is_requested: true,
        }
    }
}

/// Ranks the roster for a role with the standard scoring table.
///
/// An absent role or empty roster yields an empty list.
pub fn match_role<'a>(role: Option<&Role>, roster: &'a [Actor]) -> Vec<MatchResult<'a>> {
    MatchEngine::standard().rank(role, roster)
}

/// Ranks the roster for every role of a project, in role order.
pub fn match_roles<'r, 'a>(
    roles: &'r [Role],
    roster: &'a [Actor],
) -> Vec<(&'r str, Vec<MatchResult<'a>>)> {
    MatchEngine::standard().rank_all(roles, roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_role_scenarios() {
        let role = Role::new("R1")
            .with_vocal_specs("Narration. **CLIENT REQUEST: Jane Doe**");
        let roster = vec![
            Actor::new("A1").with_name("John Roe").with_voice("narration"),
            Actor::new("A2").with_name("Jane Doe"),
        ];

        let ranked = match_role(Some(&role), &roster);
        assert_eq!(ranked[0].actor.id, "A2");
        assert_eq!(ranked[0].score, 100);
        assert!(ranked[0].is_requested);
        assert_eq!(ranked[1].score, 20); // "narration" voice hit + base
    }

    #[test]
    fn test_score_bounds() {
        let role = Role::new("R1").with_age_range("adult").with_vocal_specs("warm bright");
        let roster = vec![
            Actor::new("A1"),
            Actor::new("A2").with_age_range("young adult").with_voice("warm bright"),
        ];
        for r in match_role(Some(&role), &roster) {
            assert!((5..=99).contains(&r.score));
            assert!(!r.is_requested);
        }
    }

    #[test]
    fn test_absent_role() {
        assert!(match_role(None, &[Actor::new("A1")]).is_empty());
    }

    #[test]
    fn test_match_roles() {
        let roles = vec![Role::new("R1"), Role::new("R2")];
        let roster = vec![Actor::new("A1")];
        let all = match_roles(&roles, &roster);
        assert_eq!(all.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec!["R1", "R2"]);
    }

    #[test]
    fn test_result_wire_format() {
        let actor = Actor::new("A1").with_name("Jane");
        let regular = serde_json::to_value(MatchResult::scored(&actor, 42)).unwrap();
        assert_eq!(regular["score"], 42);
        assert_eq!(regular["actor"]["name"], "Jane");
        assert!(regular.get("isRequested").is_none());

        let winner = serde_json::to_value(MatchResult::requested(&actor)).unwrap();
        assert_eq!(winner["isRequested"], true);
        assert_eq!(winner["score"], 100);
    }
}
