//! Rule engine for candidate ranking.
//!
//! Composes scoring rules, applies the gender wall and the instant-winner
//! check, and sorts candidates best-first.

use std::sync::Arc;

use super::rules::{AgeRange, GenreKeywords, Participation, VoiceKeywords};
use super::{MatchContext, MatchResult, RuleScore, ScoringRule};
use crate::config::{MatchWeights, REQUESTED_SCORE};
use crate::models::{Actor, Role};

/// Highest score a non-requested candidate may reach.
const MAX_REGULAR_SCORE: RuleScore = REQUESTED_SCORE - 1;

/// A composable rule engine for ranking actors against a role.
///
/// Each admitted actor's score is the sum of every rule's points, capped at
/// `score_cap`. The client-requested actor bypasses the rules entirely.
///
/// # Example
/// ```
/// use u_casting::matching::{rules, MatchEngine};
/// use u_casting::models::{Actor, Role};
///
/// let engine = MatchEngine::new()
///     .with_rule(rules::AgeRange::default())
///     .with_rule(rules::Participation::default());
///
/// let role = Role::new("R1").with_gender("any").with_age_range("30s");
/// let roster = vec![Actor::new("A1").with_age_range("30s-40s")];
/// let ranked = engine.rank(Some(&role), &roster);
/// assert_eq!(ranked[0].score, 65);
/// ```
#[derive(Clone)]
pub struct MatchEngine {
    rules: Vec<Arc<dyn ScoringRule>>,
    score_cap: RuleScore,
}

impl MatchEngine {
    /// Creates an engine with no rules and the default cap.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            score_cap: MatchWeights::default().score_cap,
        }
    }

    /// The studio's standard scoring table.
    pub fn standard() -> Self {
        Self::from_weights(&MatchWeights::default())
    }

    /// Builds the standard rules with custom point values.
    pub fn from_weights(weights: &MatchWeights) -> Self {
        Self::new()
            .with_rule(AgeRange::from(weights))
            .with_rule(VoiceKeywords::from(weights))
            .with_rule(GenreKeywords::from(weights))
            .with_rule(Participation::from(weights))
            .with_score_cap(weights.score_cap)
    }

    /// Adds a scoring rule.
    pub fn with_rule<R: ScoringRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Sets the ceiling for non-requested candidates.
    ///
    /// Clamped below [`REQUESTED_SCORE`] so a regular candidate never ties or
    /// outranks the client-requested actor.
    pub fn with_score_cap(mut self, cap: RuleScore) -> Self {
        self.score_cap = cap.min(MAX_REGULAR_SCORE);
        self
    }

    /// Ranks the roster for a role, best first.
    ///
    /// Returns an empty list when the role is absent or the roster is empty.
    /// Actors failing the gender wall are omitted. Equal scores keep roster
    /// order.
    pub fn rank<'a>(&self, role: Option<&Role>, roster: &'a [Actor]) -> Vec<MatchResult<'a>> {
        let Some(role) = role else {
            return Vec::new();
        };
        if roster.is_empty() {
            return Vec::new();
        }

        let context = MatchContext::for_role(role);
        let mut results = Vec::with_capacity(roster.len());

        for actor in roster {
            // Gender wall
            if !context.gender.admits(&actor.gender) {
                tracing::trace!(
                    role_id = %context.role_id,
                    actor_id = %actor.id,
                    gender = %actor.gender,
                    "actor excluded by gender wall"
                );
                continue;
            }

            // Instant winner skips the rules
            if context.is_requested(actor) {
                tracing::debug!(
                    role_id = %context.role_id,
                    actor_id = %actor.id,
                    "client-requested actor"
                );
                results.push(MatchResult::requested(actor));
            } else {
                results.push(MatchResult::scored(actor, self.score(actor, &context)));
            }
        }

        // Stable: ties keep roster order.
        results.sort_by(|a, b| b.score.cmp(&a.score));

        tracing::debug!(
            role_id = %context.role_id,
            roster = roster.len(),
            candidates = results.len(),
            "ranked casting candidates"
        );
        results
    }

    /// Ranks the roster for every role, in role order.
    pub fn rank_all<'r, 'a>(
        &self,
        roles: &'r [Role],
        roster: &'a [Actor],
    ) -> Vec<(&'r str, Vec<MatchResult<'a>>)> {
        roles
            .iter()
            .map(|role| (role.role_id.as_str(), self.rank(Some(role), roster)))
            .collect()
    }

    /// Capped rule-sum score for one actor (ignores gender wall and request).
    pub fn score(&self, actor: &Actor, context: &MatchContext) -> RuleScore {
        self.rules
            .iter()
            .fold(0, |acc: RuleScore, rule| {
                acc.saturating_add(rule.evaluate(actor, context))
            })
            .min(self.score_cap)
    }

    /// Uncapped per-rule points for one actor, in rule order.
    pub fn breakdown(&self, actor: &Actor, context: &MatchContext) -> Vec<(&'static str, RuleScore)> {
        self.rules
            .iter()
            .map(|rule| (rule.name(), rule.evaluate(actor, context)))
            .collect()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .field("score_cap", &self.score_cap)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Actor> {
        vec![
            Actor::new("A")
                .with_name("Alan Ames")
                .with_gender("Male")
                .with_age_range("30s-40s")
                .with_voice("gravelly baritone")
                .with_genres("thriller"),
            Actor::new("B")
                .with_name("Beth Burke")
                .with_gender("Female")
                .with_age_range("30s")
                .with_voice("gravelly alto"),
            Actor::new("C")
                .with_name("Carl Cole")
                .with_gender("male")
                .with_age_range("50s"),
            Actor::new("D")
                .with_name("Dana Dale")
                .with_gender("Female/Male")
                .with_age_range("30s"),
        ]
    }

    fn ids<'a>(results: &[MatchResult<'a>]) -> Vec<&'a str> {
        results.iter().map(|r| r.actor.id.as_str()).collect()
    }

    #[test]
    fn test_scenario_gravelly_villain() {
        let role = Role::new("R1")
            .with_gender("male")
            .with_age_range("30s")
            .with_vocal_specs("gravelly villain");
        let roster = roster();
        let ranked = MatchEngine::standard().rank(Some(&role), &roster);

        assert_eq!(ids(&ranked), vec!["A", "C"]);
        assert_eq!(ranked[0].score, 80); // 60 age + 15 voice + 5 base
        assert!(!ranked[0].is_requested);
        assert_eq!(ranked[1].score, 5);
    }

    #[test]
    fn test_male_wall_excludes_female_tags() {
        let role = Role::new("R1").with_gender("Male");
        let roster = roster();
        for r in MatchEngine::standard().rank(Some(&role), &roster) {
            assert!(!r.actor.gender.to_lowercase().contains("female"));
        }
    }

    #[test]
    fn test_female_wall() {
        let role = Role::new("R1").with_gender("female");
        let roster = roster();
        let ranked = MatchEngine::standard().rank(Some(&role), &roster);
        assert_eq!(ranked.len(), 2);
        assert!(ranked
            .iter()
            .all(|r| r.actor.gender.to_lowercase().contains("female")));
    }

    #[test]
    fn test_open_gender_keeps_everyone() {
        let roster = roster();
        for g in ["any", "TBD", ""] {
            let role = Role::new("R1").with_gender(g);
            assert_eq!(MatchEngine::standard().rank(Some(&role), &roster).len(), roster.len());
        }
    }

    #[test]
    fn test_instant_winner_first() {
        let role = Role::new("R1")
            .with_age_range("30s")
            .with_vocal_specs("Narration. **CLIENT REQUEST: Dana Dale**");
        let roster = roster();
        let ranked = MatchEngine::standard().rank(Some(&role), &roster);

        assert_eq!(ranked[0].actor.id, "D");
        assert_eq!(ranked[0].score, REQUESTED_SCORE);
        assert!(ranked[0].is_requested);
        assert!(ranked[1..].iter().all(|r| !r.is_requested && r.score <= 99));
    }

    #[test]
    fn test_requested_actor_still_behind_gender_wall() {
        let role = Role::new("R1")
            .with_gender("male")
            .with_vocal_specs("client request: Beth Burke");
        let roster = roster();
        let ranked = MatchEngine::standard().rank(Some(&role), &roster);
        assert!(ranked.iter().all(|r| r.actor.id != "B"));
    }

    #[test]
    fn test_score_cap() {
        let role = Role::new("R1")
            .with_age_range("30s")
            .with_vocal_specs("gravelly smoky warm thriller");
        let roster = vec![Actor::new("X")
            .with_age_range("30s")
            .with_voice("gravelly smoky warm")
            .with_genres("thriller")];
        let ranked = MatchEngine::standard().rank(Some(&role), &roster);
        // 60 + 30 + 10 + 5 = 105 → capped
        assert_eq!(ranked[0].score, 99);

        let breakdown =
            MatchEngine::standard().breakdown(&roster[0], &MatchContext::for_role(&role));
        assert_eq!(
            breakdown,
            vec![("AGE", 60), ("VOICE", 30), ("GENRE", 10), ("BASE", 5)]
        );
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let roster = vec![
            Actor::new("1"),
            Actor::new("2"),
            Actor::new("3").with_age_range("30s"),
            Actor::new("4"),
        ];
        let role = Role::new("R1").with_age_range("30s");
        let ranked = MatchEngine::standard().rank(Some(&role), &roster);
        assert_eq!(ids(&ranked), vec!["3", "1", "2", "4"]);
    }

    #[test]
    fn test_ordering_and_determinism() {
        let role = Role::new("R1")
            .with_age_range("30s")
            .with_vocal_specs("gravelly thriller");
        let roster = roster();
        let engine = MatchEngine::standard();
        let first = engine.rank(Some(&role), &roster);
        let second = engine.rank(Some(&role), &roster);

        assert!(first.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_inputs() {
        let roster = roster();
        assert!(MatchEngine::standard().rank(None, &roster).is_empty());
        assert!(MatchEngine::standard().rank(Some(&Role::new("R1")), &[]).is_empty());
    }

    #[test]
    fn test_custom_weights() {
        let weights = MatchWeights::default().with_age_points(20).with_base_points(0);
        let role = Role::new("R1").with_age_range("30s");
        let roster = vec![Actor::new("A").with_age_range("30s")];
        let ranked = MatchEngine::from_weights(&weights).rank(Some(&role), &roster);
        assert_eq!(ranked[0].score, 20);
    }

    #[test]
    fn test_rank_all() {
        let roles = vec![
            Role::new("R1").with_gender("male"),
            Role::new("R2").with_gender("female"),
        ];
        let roster = roster();
        let all = MatchEngine::standard().rank_all(&roles, &roster);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].0, "R1");
        assert_eq!(all[0].1.len(), 2);
        assert_eq!(all[1].0, "R2");
        assert_eq!(all[1].1.len(), 2);
    }

    #[test]
    fn test_oversized_cap_keeps_requested_actor_on_top() {
        let weights = MatchWeights::default().with_score_cap(150);
        assert!(weights.validate().is_err());

        let role = Role::new("R1")
            .with_age_range("30s")
            .with_vocal_specs("gravelly smoky warm thriller client request: Rea Quest");
        let roster = vec![
            Actor::new("X")
                .with_age_range("30s")
                .with_voice("gravelly smoky warm")
                .with_genres("thriller"),
            Actor::new("REQ").with_name("Rea Quest"),
        ];
        let ranked = MatchEngine::from_weights(&weights).rank(Some(&role), &roster);

        assert_eq!(ids(&ranked), vec!["REQ", "X"]);
        assert_eq!(ranked[0].score, REQUESTED_SCORE);
        assert_eq!(ranked[1].score, REQUESTED_SCORE - 1);
        assert!(!ranked[1].is_requested);
    }

    #[test]
    fn test_with_score_cap_clamps_below_requested() {
        let dbg = format!("{:?}", MatchEngine::new().with_score_cap(500));
        assert!(dbg.contains("score_cap: 99"));
        let dbg = format!("{:?}", MatchEngine::new().with_score_cap(50));
        assert!(dbg.contains("score_cap: 50"));
    }

    #[test]
    fn test_debug_lists_rules() {
        let dbg = format!("{:?}", MatchEngine::standard());
        assert!(dbg.contains("AGE"));
        assert!(dbg.contains("score_cap: 99"));
    }
}
