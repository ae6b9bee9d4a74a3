//! Booking conflict checking and availability summaries.
//!
//! Decides whether a chosen actor can start on each candidate production
//! date. Each date gets its own verdict; verdicts are never merged into a
//! single status.
//!
//! # Algorithm
//!
//! The conflict checker is a short-circuit rule chain: status (hiatus /
//! inactive), then the next-available cutoff, then bookout ranges. All
//! comparisons are date-only and inclusive at bookout boundaries.
//!
//! # Summary
//!
//! `AvailabilitySummary` counts per-date outcomes for display ("available on
//! 2 of 3 dates") without changing any verdict.

mod conflict;
mod summary;

pub use conflict::{
    check_availability, check_availability_on, check_by_name, check_dates, check_selections,
    next_clear_date, DateVerdict, SelectionCheck,
};
pub use summary::AvailabilitySummary;
