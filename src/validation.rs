//! Input validation for casting data.
//!
//! Checks structural integrity of roles, the roster, and casting selections
//! before they reach the matcher or the conflict checker. Detects:
//! - Duplicate IDs
//! - Unnamed actors (the name is a lookup key)
//! - Unreadable next-available dates
//! - Malformed or inverted bookout entries
//! - Selections for roles that don't exist
//!
//! Validation is diagnostic. The matcher and conflict checker still accept
//! dirty data and degrade silently; this module tells an admin what to fix.

use std::collections::HashSet;

use crate::dates::parse_date_opt;
use crate::models::{bookout_entries, Actor, CastingSelections, DateRange, Role};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// An actor has no name.
    MissingName,
    /// An actor's next-available date cannot be parsed.
    InvalidNextAvailable,
    /// A bookout entry cannot be parsed into a date range.
    MalformedBookout,
    /// A bookout entry ends before it starts.
    InvertedBookout,
    /// A selection references a role that doesn't exist.
    UnknownRole,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a project's casting data.
///
/// Checks:
/// 1. No duplicate role IDs
/// 2. No duplicate actor IDs
/// 3. Every actor has a name
/// 4. Every non-empty next-available date parses
/// 5. Every bookout entry parses and is not inverted
/// 6. Every selection refers to an existing role
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_casting(
    roles: &[Role],
    actors: &[Actor],
    selections: &CastingSelections,
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect role IDs
    let mut role_ids = HashSet::new();
    for r in roles {
        if !role_ids.insert(r.role_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate role ID: {}", r.role_id),
            ));
        }
    }

    errors.extend(roster_errors(actors));

    // Check selection references
    for (role_id, _) in selections.iter() {
        if !role_ids.contains(role_id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownRole,
                format!("Selection references unknown role '{role_id}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates the roster alone (checks 2-5 of [`validate_casting`]).
pub fn validate_roster(actors: &[Actor]) -> ValidationResult {
    let errors = roster_errors(actors);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn roster_errors(actors: &[Actor]) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut actor_ids = HashSet::new();

    for a in actors {
        if !actor_ids.insert(a.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate actor ID: {}", a.id),
            ));
        }

        if a.name.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingName,
                format!("Actor '{}' has no name", a.id),
            ));
        }

        // Dates
        let next = a.next_available.trim();
        if !next.is_empty() && parse_date_opt(next).is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidNextAvailable,
                format!("Actor '{}' has unreadable next-available date '{next}'", a.id),
            ));
        }

        // Bookouts
        for entry in bookout_entries(&a.bookouts) {
            match DateRange::parse(entry) {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedBookout,
                    format!("Actor '{}' has malformed bookout '{entry}'", a.id),
                )),
                Some(range) if range.is_inverted() => errors.push(ValidationError::new(
                    ValidationErrorKind::InvertedBookout,
                    format!("Actor '{}' has bookout ending before it starts '{entry}'", a.id),
                )),
                Some(_) => {}
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_roles() -> Vec<Role> {
        vec![
            Role::new("R1").with_character("Narrator"),
            Role::new("R2").with_character("Villain"),
        ]
    }

    fn sample_actors() -> Vec<Actor> {
        vec![
            Actor::new("A1")
                .with_name("Jane Doe")
                .with_next_available("2025-06-01")
                .with_bookout("2025-01-10", "2025-01-20"),
            Actor::new("A2").with_name("John Roe"),
        ]
    }

    #[test]
    fn test_valid_input() {
        let mut sel = CastingSelections::new();
        sel.set_primary("R1", Some(sample_actors()[0].clone()));
        assert!(validate_casting(&sample_roles(), &sample_actors(), &sel).is_ok());
    }

    #[test]
    fn test_duplicate_role_id() {
        let roles = vec![Role::new("R1"), Role::new("R1")];
        let errors = validate_casting(&roles, &sample_actors(), &CastingSelections::new())
            .unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("role")));
    }

    #[test]
    fn test_duplicate_actor_id() {
        let actors = vec![
            Actor::new("A1").with_name("Jane"),
            Actor::new("A1").with_name("Jane Again"),
        ];
        let errors = validate_roster(&actors).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId && e.message.contains("actor")));
    }

    #[test]
    fn test_missing_name() {
        let errors = validate_roster(&[Actor::new("A1")]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::MissingName));
    }

    #[test]
    fn test_invalid_next_available() {
        let actors = vec![Actor::new("A1").with_name("Jane").with_next_available("ASAP")];
        let errors = validate_roster(&actors).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidNextAvailable);
    }

    #[test]
    fn test_malformed_and_inverted_bookouts() {
        let actors = vec![Actor::new("A1")
            .with_name("Jane")
            .with_bookouts("sometime, 2025-01-20 to 2025-01-10, 2025-02-01 - 2025-02-03")];
        let errors = validate_roster(&actors).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ValidationErrorKind::MalformedBookout);
        assert!(errors[0].message.contains("sometime"));
        assert_eq!(errors[1].kind, ValidationErrorKind::InvertedBookout);
    }

    #[test]
    fn test_unknown_selection_role() {
        let mut sel = CastingSelections::new();
        sel.set_primary("GHOST", Some(Actor::new("A1").with_name("Jane")));
        let errors = validate_casting(&sample_roles(), &sample_actors(), &sel).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::UnknownRole));
    }

    #[test]
    fn test_multiple_errors() {
        let roles = vec![Role::new("R1"), Role::new("R1")];
        let actors = vec![Actor::new("A1").with_bookouts("garbage")];
        let errors = validate_casting(&roles, &actors, &CastingSelections::new()).unwrap_err();
        assert!(errors.len() >= 3);
    }
}
