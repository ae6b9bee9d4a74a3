//! Booking conflict checker.
//!
//! # Algorithm
//!
//! Rules are evaluated in order; the first that fires decides the verdict.
//!
//! 1. No actor → `NEUTRAL "Unassigned"`.
//! 2. No candidate date (absent or empty) → `UNKNOWN "No Date"`; unreadable,
//!    including whitespace-only → `UNKNOWN "Invalid Date"`.
//! 3. Status mentions hiatus/inactive → `CONFLICT` with the status text.
//! 4. Candidate before next-available → `CONFLICT "Until M/D/YYYY"`.
//! 5. Candidate inside a bookout (inclusive) → `CONFLICT "Booked M/D/YYYY-M/D/YYYY"`.
//! 6. Otherwise → `CLEAR "Available"`.
//!
//! Every function here is total: malformed dates degrade to `UNKNOWN` or to
//! a skipped bookout entry, never to an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates::{format_us_date, parse_date_opt};
use crate::models::{
    find_actor_by_name, Actor, CastingSelections, ScheduleVerdict, SelectionSlot,
};

/// A verdict tagged with the candidate date it was computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateVerdict {
    /// Candidate date as given by the caller.
    pub date: String,
    /// Outcome for that date.
    pub verdict: ScheduleVerdict,
}

/// Availability of one selected actor across the candidate dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCheck {
    /// Role the actor is selected for.
    pub role_id: String,
    /// Primary or backup.
    pub slot: SelectionSlot,
    /// Selected actor's ID.
    pub actor_id: String,
    /// One verdict per candidate date, in input order.
    pub verdicts: Vec<DateVerdict>,
}

/// Checks whether an actor can start on a candidate date given as text.
///
/// # Example
/// ```
/// use u_casting::models::{Actor, ScheduleStatus};
/// use u_casting::scheduler::check_availability;
///
/// let actor = Actor::new("A1")
///     .with_status("Active")
///     .with_next_available("2025-06-01");
///
/// let verdict = check_availability(Some(&actor), Some("2025-05-15"));
/// assert_eq!(verdict.status, ScheduleStatus::Conflict);
/// assert_eq!(verdict.reason, "Until 6/1/2025");
///
/// let verdict = check_availability(Some(&actor), Some("garbage"));
/// assert_eq!(verdict.status, ScheduleStatus::Unknown);
/// ```
pub fn check_availability(actor: Option<&Actor>, candidate: Option<&str>) -> ScheduleVerdict {
    if actor.is_none() {
        return ScheduleVerdict::unassigned();
    }

    // Only a missing or empty value counts as no date; whitespace is unreadable.
    let candidate = match candidate {
        None | Some("") => return ScheduleVerdict::unknown("No Date"),
        Some(text) => text,
    };

    match parse_date_opt(candidate) {
        Some(date) => check_availability_on(actor, date),
        None => ScheduleVerdict::unknown("Invalid Date"),
    }
}

/// Checks whether an actor can start on a candidate calendar date.
pub fn check_availability_on(actor: Option<&Actor>, date: NaiveDate) -> ScheduleVerdict {
    let Some(actor) = actor else {
        return ScheduleVerdict::unassigned();
    };

    let verdict = evaluate(actor, date);
    if verdict.is_conflict() {
        tracing::debug!(
            actor_id = %actor.id,
            %date,
            reason = %verdict.reason,
            "booking conflict"
        );
    }
    verdict
}

fn evaluate(actor: &Actor, date: NaiveDate) -> ScheduleVerdict {
    if actor.status_class().is_unavailable() {
        return ScheduleVerdict::conflict(actor.status.trim());
    }

    let availability = actor.availability();

    if let Some(next) = availability.next_available {
        if date < next {
            return ScheduleVerdict::conflict(format!("Until {}", format_us_date(next)));
        }
    }

    if let Some(range) = availability.bookout_containing(date) {
        return ScheduleVerdict::conflict(format!(
            "Booked {}-{}",
            format_us_date(range.start),
            format_us_date(range.end)
        ));
    }

    ScheduleVerdict::clear()
}

/// Checks one actor against several candidate dates independently.
///
/// Returns one verdict per candidate, in input order. Verdicts are not
/// combined; see [`AvailabilitySummary`](super::AvailabilitySummary) for
/// counting.
pub fn check_dates<S: AsRef<str>>(actor: Option<&Actor>, candidates: &[S]) -> Vec<DateVerdict> {
    candidates
        .iter()
        .map(|c| DateVerdict {
            date: c.as_ref().to_string(),
            verdict: check_availability(actor, Some(c.as_ref())),
        })
        .collect()
}

/// Checks an actor looked up by name (case-insensitive).
///
/// An unknown name is treated as no actor (`NEUTRAL "Unassigned"`).
pub fn check_by_name(roster: &[Actor], name: &str, candidate: Option<&str>) -> ScheduleVerdict {
    check_availability(find_actor_by_name(roster, name), candidate)
}

/// Checks every selected actor (primary and backup) against the candidates.
///
/// Results follow role-ID order, primary before backup.
pub fn check_selections<S: AsRef<str>>(
    selections: &CastingSelections,
    candidates: &[S],
) -> Vec<SelectionCheck> {
    selections
        .assigned_actors()
        .into_iter()
        .map(|(role_id, slot, actor)| SelectionCheck {
            role_id: role_id.to_string(),
            slot,
            actor_id: actor.id.clone(),
            verdicts: check_dates(Some(actor), candidates),
        })
        .collect()
}

/// Earliest date at or after `from` on which the actor would be clear.
///
/// `None` for hiatus/inactive actors, who have no clear date.
pub fn next_clear_date(actor: &Actor, from: NaiveDate) -> Option<NaiveDate> {
    if actor.status_class().is_unavailable() {
        return None;
    }
    actor.availability().next_free_date(from)
}
