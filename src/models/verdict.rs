//! Schedule verdict model.
//!
//! A verdict is the conflict checker's answer for one actor on one date:
//! a status plus a short human-readable reason for the UI badge.

use serde::{Deserialize, Serialize};

/// Availability outcome for one actor on one candidate date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScheduleStatus {
    /// No rule blocks the date.
    Clear,
    /// Status, cutoff, or a bookout blocks the date.
    Conflict,
    /// The candidate date is missing or unreadable.
    Unknown,
    /// No actor is assigned.
    Neutral,
}

/// A status with its explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleVerdict {
    /// Outcome class.
    pub status: ScheduleStatus,
    /// Short explanation (e.g. `"Available"`, `"Until 6/1/2025"`).
    pub reason: String,
}

impl ScheduleVerdict {
    /// Creates a verdict.
    pub fn new(status: ScheduleStatus, reason: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
        }
    }

    /// The actor is free on the date.
    pub fn clear() -> Self {
        Self::new(ScheduleStatus::Clear, "Available")
    }

    /// The actor is blocked on the date.
    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::new(ScheduleStatus::Conflict, reason)
    }

    /// The date could not be evaluated.
    pub fn unknown(reason: impl Into<String>) -> Self {
        Self::new(ScheduleStatus::Unknown, reason)
    }

    /// No actor was given.
    pub fn unassigned() -> Self {
        Self::new(ScheduleStatus::Neutral, "Unassigned")
    }

    /// Whether this verdict blocks the booking.
    #[inline]
    pub fn is_conflict(&self) -> bool {
        self.status == ScheduleStatus::Conflict
    }

    /// Whether this verdict allows the booking.
    #[inline]
    pub fn is_clear(&self) -> bool {
        self.status == ScheduleStatus::Clear
    }
}
