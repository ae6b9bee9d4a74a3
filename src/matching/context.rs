//! Match context: a role's requirements, normalized once per ranking.

use std::sync::LazyLock;

use regex::Regex;

use super::GenderRequirement;
use crate::models::{Actor, Role};

/// Keyword delimiters in vocal specs: whitespace, commas, periods, hyphens.
static KEYWORD_SPLIT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s,.\-]+").expect("valid regex"));

/// Tokens that belong to the client-request marker, not the description.
const MARKER_WORDS: &[&str] = &["client", "request"];

/// Tokens this short carry no signal.
const MIN_KEYWORD_CHARS: usize = 4;

/// Normalized role requirements passed to scoring rules.
///
/// Built once per role; every rule reads from it instead of re-parsing the
/// role's free text per actor.
#[derive(Debug, Clone, Default)]
pub struct MatchContext {
    /// Role being cast (for logging).
    pub role_id: String,
    /// Gender wall.
    pub gender: GenderRequirement,
    /// Lower-cased, trimmed age range. Empty = no age requirement.
    pub age_range: String,
    /// Scoring keywords extracted from the vocal specs.
    pub keywords: Vec<String>,
    /// Lower-cased name of the client-requested actor.
    pub requested_actor: Option<String>,
}

impl MatchContext {
    /// Normalizes a role's requirements.
    pub fn for_role(role: &Role) -> Self {
        Self {
            role_id: role.role_id.clone(),
            gender: GenderRequirement::parse(&role.gender),
            age_range: role.age_range.trim().to_lowercase(),
            keywords: extract_keywords(&role.vocal_specs),
            requested_actor: role.requested_actor_name(),
        }
    }

    /// Sets the gender requirement.
    pub fn with_gender(mut self, gender: GenderRequirement) -> Self {
        self.gender = gender;
        self
    }

    /// Sets the age range (normalized).
    pub fn with_age_range(mut self, age_range: &str) -> Self {
        self.age_range = age_range.trim().to_lowercase();
        self
    }

    /// Sets the keywords from raw vocal specs.
    pub fn with_vocal_specs(mut self, specs: &str) -> Self {
        self.keywords = extract_keywords(specs);
        self
    }

    /// Whether the actor is the client-requested instant winner.
    pub fn is_requested(&self, actor: &Actor) -> bool {
        self.requested_actor
            .as_deref()
            .is_some_and(|name| actor.name.to_lowercase() == name)
    }

    /// Number of keywords found as substrings of `text` (case-insensitive).
    pub fn keyword_hits(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let text = text.to_lowercase();
        self.keywords
            .iter()
            .filter(|k| text.contains(k.as_str()))
            .count()
    }
}

/// Extracts scoring keywords from vocal specs.
///
/// Splits lower-cased text on whitespace, `,`, `.` and `-`, keeps tokens
/// longer than three characters, and drops the marker words `client` and
/// `request`. Order and duplicates are preserved.
pub fn extract_keywords(vocal_specs: &str) -> Vec<String> {
    let specs = vocal_specs.trim().to_lowercase();
    KEYWORD_SPLIT_RE
        .split(&specs)
        .filter(|t| t.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|t| !MARKER_WORDS.contains(t))
        .map(str::to_string)
        .collect()
}
