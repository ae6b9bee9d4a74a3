//! Gender wall: the hard filter applied before any scoring.
//!
//! | Role gender | Actor admitted when (lower-cased) |
//! |-------------|-----------------------------------|
//! | `any`, `tbd`, empty | always |
//! | `male` | contains `male` and not `female` |
//! | `female` | contains `female` |
//! | anything else | equals the role gender exactly |
//!
//! The `male` row excludes `female` because `"female"` contains `"male"`.
//! The `female` row has no symmetric exclusion, so an actor tagged
//! `Female/Male` passes a female search but not a male one.

/// A role's gender requirement, classified from free text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GenderRequirement {
    /// `any`, `tbd`, or empty: every actor passes.
    #[default]
    Open,
    /// `male`.
    Male,
    /// `female`.
    Female,
    /// Any other value, compared by exact (lower-cased, trimmed) equality.
    Exact(String),
}

impl GenderRequirement {
    /// Classifies a role's gender text.
    pub fn parse(role_gender: &str) -> Self {
        let gender = role_gender.trim().to_lowercase();
        match gender.as_str() {
            "any" | "tbd" | "" => GenderRequirement::Open,
            "male" => GenderRequirement::Male,
            "female" => GenderRequirement::Female,
            _ => GenderRequirement::Exact(gender),
        }
    }

    /// Whether an actor with the given gender text passes the wall.
    pub fn admits(&self, actor_gender: &str) -> bool {
        let gender = actor_gender.trim().to_lowercase();
        match self {
            GenderRequirement::Open => true,
            GenderRequirement::Male => gender.contains("male") && !gender.contains("female"),
            GenderRequirement::Female => gender.contains("female"),
            GenderRequirement::Exact(required) => gender == *required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(GenderRequirement::parse("Any"), GenderRequirement::Open);
        assert_eq!(GenderRequirement::parse(" TBD "), GenderRequirement::Open);
        assert_eq!(GenderRequirement::parse(""), GenderRequirement::Open);
        assert_eq!(GenderRequirement::parse("Male"), GenderRequirement::Male);
        assert_eq!(GenderRequirement::parse("FEMALE"), GenderRequirement::Female);
        assert_eq!(
            GenderRequirement::parse("Non-Binary"),
            GenderRequirement::Exact("non-binary".into())
        );
    }

    #[test]
    fn test_open_admits_everyone() {
        let req = GenderRequirement::Open;
        for g in ["Male", "Female", "", "non-binary", "???"] {
            assert!(req.admits(g));
        }
    }

    #[test]
    fn test_male_excludes_female_substring() {
        let req = GenderRequirement::Male;
        assert!(req.admits("Male"));
        assert!(req.admits(" male "));
        assert!(!req.admits("Female"));
        assert!(!req.admits("Female/Male"));
        assert!(!req.admits("non-binary"));
        assert!(!req.admits(""));
    }

    #[test]
    fn test_female_is_asymmetric() {
        let req = GenderRequirement::Female;
        assert!(req.admits("Female"));
        assert!(req.admits("Female/Male")); // no symmetric exclusion
        assert!(!req.admits("Male"));
    }

    #[test]
    fn test_exact_match() {
        let req = GenderRequirement::parse("non-binary");
        assert!(req.admits("Non-Binary"));
        assert!(!req.admits("non-binary, male"));
        assert!(!req.admits("female"));
    }
}
