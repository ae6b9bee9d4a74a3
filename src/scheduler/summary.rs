//! Availability summary across candidate dates.
//!
//! Counts per-date outcomes so a caller can render "available on 2 of 3
//! dates". The counts are derived from the verdicts; nothing is re-judged.
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Clear | Dates with a `CLEAR` verdict |
//! | Conflict | Dates with a `CONFLICT` verdict |
//! | Unknown | Dates missing or unreadable |
//! | Clear rate | Clear / evaluable (clear + conflict) |

use serde::{Deserialize, Serialize};

use super::DateVerdict;
use crate::models::{ScheduleStatus, ScheduleVerdict};

/// Outcome counts over a set of verdicts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySummary {
    /// Number of verdicts counted.
    pub total: usize,
    /// `CLEAR` verdicts.
    pub clear: usize,
    /// `CONFLICT` verdicts.
    pub conflict: usize,
    /// `UNKNOWN` verdicts.
    pub unknown: usize,
    /// `NEUTRAL` verdicts.
    pub neutral: usize,
}

impl AvailabilitySummary {
    /// Counts outcomes over any set of verdicts.
    pub fn from_verdicts<'a, I>(verdicts: I) -> Self
    where
        I: IntoIterator<Item = &'a ScheduleVerdict>,
    {
        verdicts.into_iter().fold(Self::default(), |mut s, v| {
            s.total += 1;
            match v.status {
                ScheduleStatus::Clear => s.clear += 1,
                ScheduleStatus::Conflict => s.conflict += 1,
                ScheduleStatus::Unknown => s.unknown += 1,
                ScheduleStatus::Neutral => s.neutral += 1,
            }
            s
        })
    }

    /// Counts outcomes over dated verdicts.
    pub fn from_dated(verdicts: &[DateVerdict]) -> Self {
        Self::from_verdicts(verdicts.iter().map(|d| &d.verdict))
    }

    /// Dates that could actually be judged (clear or conflict).
    pub fn evaluable(&self) -> usize {
        self.clear + self.conflict
    }

    /// Fraction of evaluable dates that are clear (0.0..=1.0).
    ///
    /// `0.0` when nothing was evaluable.
    pub fn clear_rate(&self) -> f64 {
        match self.evaluable() {
            0 => 0.0,
            n => self.clear as f64 / n as f64,
        }
    }

    /// Whether every counted date is clear.
    pub fn is_fully_available(&self) -> bool {
        self.total > 0 && self.clear == self.total
    }

    /// Whether at least one date is clear.
    pub fn has_any_clear(&self) -> bool {
        self.clear > 0
    }

    /// Short label such as `"Available on 2 of 3 dates"`.
    pub fn describe(&self) -> String {
        let noun = if self.total == 1 { "date" } else { "dates" };
        format!("Available on {} of {} {noun}", self.clear, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Actor;
    use crate::scheduler::check_dates;

    #[test]
    fn test_counts() {
        let verdicts = vec![
            ScheduleVerdict::clear(),
            ScheduleVerdict::conflict("Booked"),
            ScheduleVerdict::clear(),
            ScheduleVerdict::unknown("Invalid Date"),
        ];
        let s = AvailabilitySummary::from_verdicts(&verdicts);
        assert_eq!(s.total, 4);
        assert_eq!(s.clear, 2);
        assert_eq!(s.conflict, 1);
        assert_eq!(s.unknown, 1);
        assert_eq!(s.neutral, 0);
        assert_eq!(s.evaluable(), 3);
        assert!((s.clear_rate() - 2.0 / 3.0).abs() < 1e-10);
        assert!(!s.is_fully_available());
        assert!(s.has_any_clear());
    }

    #[test]
    fn test_from_dated_and_describe() {
        let actor = Actor::new("A1").with_bookouts("2025-02-01 to 2025-02-28");
        let dated = check_dates(Some(&actor), &["2025-01-15", "2025-02-10", "2025-03-01"]);
        let s = AvailabilitySummary::from_dated(&dated);
        assert_eq!(s.describe(), "Available on 2 of 3 dates");

        let one = AvailabilitySummary::from_verdicts(&[ScheduleVerdict::clear()]);
        assert_eq!(one.describe(), "Available on 1 of 1 date");
        assert!(one.is_fully_available());
    }

    #[test]
    fn test_empty() {
        let none: [ScheduleVerdict; 0] = [];
        let s = AvailabilitySummary::from_verdicts(&none);
        assert_eq!(s.total, 0);
        assert_eq!(s.clear_rate(), 0.0);
        assert!(!s.is_fully_available());
    }
}
