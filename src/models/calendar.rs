//! Availability calendar models.
//!
//! Defines an actor's date-based availability: a "next available" cutoff
//! and explicit bookout ranges parsed from roster free text.
//!
//! # Time Model
//! All values are calendar dates ([`NaiveDate`]). Ranges are inclusive at
//! both ends: a bookout from the 10th to the 20th blocks the 10th and the
//! 20th as whole days.
//!
//! # Parsing
//! The roster stores bookouts as `"<start> to <end>, <start> - <end>"`.
//! Entries that do not split into exactly two parseable dates are skipped;
//! they never invalidate the rest of the list.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::Actor;
use crate::dates::parse_date_opt;

/// Separators between the two ends of a bookout entry.
static RANGE_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i) to | - ").expect("valid regex"));

/// An inclusive date range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First blocked day.
    pub start: NaiveDate,
    /// Last blocked day.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parses one `"<start> to <end>"` / `"<start> - <end>"` entry.
    ///
    /// Returns `None` unless the entry splits into exactly two parts and
    /// both parse as dates.
    pub fn parse(entry: &str) -> Option<Self> {
        let parts: Vec<&str> = RANGE_SEPARATOR_RE.split(entry.trim()).collect();
        match parts.as_slice() {
            [start, end] => Some(Self::new(parse_date_opt(start)?, parse_date_opt(end)?)),
            _ => None,
        }
    }

    /// Whether `date` falls within the range (both ends inclusive).
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Whether two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether the range ends before it starts (blocks nothing).
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Number of days covered (0 for an inverted range).
    pub fn days(&self) -> i64 {
        if self.is_inverted() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }
}

/// Splits a raw bookout list into its entries (comma-separated, blanks dropped).
pub fn bookout_entries(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|e| !e.is_empty())
}

/// Entries of a raw bookout list that cannot be parsed into a range.
pub fn malformed_bookouts(raw: &str) -> Vec<String> {
    bookout_entries(raw)
        .filter(|e| DateRange::parse(e).is_none())
        .map(str::to_string)
        .collect()
}

/// An actor's parsed, date-based availability.
///
/// Status-based unavailability (hiatus) is not part of the calendar; see
/// [`ActorStatus`](super::ActorStatus).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    /// The actor is unavailable on any date strictly before this one.
    pub next_available: Option<NaiveDate>,
    /// Inclusive ranges when the actor is booked elsewhere, in list order.
    pub bookouts: Vec<DateRange>,
}

impl Availability {
    /// Creates an empty calendar (always available).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses an actor's availability fields, dropping malformed content.
    pub fn from_actor(actor: &Actor) -> Self {
        Self::parse(&actor.next_available, &actor.bookouts)
    }

    /// Parses raw next-available and bookout text.
    pub fn parse(next_available: &str, bookouts: &str) -> Self {
        let bookouts = bookout_entries(bookouts)
            .filter_map(|entry| {
                let range = DateRange::parse(entry);
                if range.is_none() {
                    tracing::trace!(entry, "skipping malformed bookout entry");
                }
                range
            })
            .collect();

        Self {
            next_available: parse_date_opt(next_available),
            bookouts,
        }
    }

    /// Sets the next-available cutoff.
    pub fn with_next_available(mut self, date: NaiveDate) -> Self {
        self.next_available = Some(date);
        self
    }

    /// Adds a bookout range.
    pub fn with_bookout(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.bookouts.push(DateRange::new(start, end));
        self
    }

    /// Whether `date` falls before the next-available cutoff.
    pub fn is_before_next_available(&self, date: NaiveDate) -> bool {
        self.next_available.is_some_and(|next| date < next)
    }

    /// The first bookout (in list order) containing `date`.
    pub fn bookout_containing(&self, date: NaiveDate) -> Option<&DateRange> {
        self.bookouts.iter().find(|b| b.contains(date))
    }

    /// Whether `date` is free of the cutoff and every bookout.
    pub fn is_free_on(&self, date: NaiveDate) -> bool {
        !self.is_before_next_available(date) && self.bookout_containing(date).is_none()
    }

    /// Finds the earliest free date at or after `from`.
    ///
    /// Jumps to the cutoff first, then past each bookout that still covers
    /// the candidate. Returns `None` only if the search runs off the end of
    /// the representable calendar.
    pub fn next_free_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        let mut candidate = match self.next_available {
            Some(next) if next > from => next,
            _ => from,
        };

        // Each bookout can push the candidate at most once.
        for _ in 0..=self.bookouts.len() {
            match self.bookout_containing(candidate) {
                Some(range) => candidate = range.end.succ_opt()?,
                None => return Some(candidate),
            }
        }

        self.is_free_on(candidate).then_some(candidate)
    }

    /// Number of free days in `[start, end]`.
    pub fn free_days_in_range(&self, range: &DateRange) -> i64 {
        range
            .start
            .iter_days()
            .take_while(|d| *d <= range.end)
            .filter(|d| self.is_free_on(*d))
            .count() as i64
    }
}
