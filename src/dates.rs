//! Calendar-date parsing and display.
//!
//! Availability data comes from hand-edited roster records, so the parser is
//! lenient about format: ISO dates, US slash dates, ISO/RFC 3339 date-times
//! and month-name forms are all accepted. Everything reduces to a
//! [`NaiveDate`]; time-of-day is discarded, so every comparison downstream
//! is date-only.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::error::{CastingError, CastingResult};

/// Date-only formats, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%B %d %Y",
    "%b %d, %Y",
    "%b %d %Y",
    "%d %B %Y",
    "%d %b %Y",
];

/// Date-time formats without an offset, tried in order.
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a calendar date from free text.
///
/// # Errors
/// Returns [`CastingError::InvalidDate`] when the input is blank or matches
/// none of the accepted formats.
///
/// # Example
/// ```
/// use u_casting::dates::parse_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// assert_eq!(parse_date("2025-06-01").unwrap(), expected);
/// assert_eq!(parse_date("6/1/2025").unwrap(), expected);
/// assert_eq!(parse_date("June 1, 2025").unwrap(), expected);
/// assert!(parse_date("next tuesday").is_err());
/// ```
pub fn parse_date(input: &str) -> CastingResult<NaiveDate> {
    let text = input.trim();
    if text.is_empty() {
        return Err(CastingError::InvalidDate(input.to_string()));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.date_naive());
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
    {
        return Ok(date);
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| CastingError::InvalidDate(input.to_string()))
}

/// Parses a date, returning `None` for blank or malformed input.
pub fn parse_date_opt(input: &str) -> Option<NaiveDate> {
    parse_date(input).ok()
}

/// Formats a date as `M/D/YYYY` without zero padding (e.g. `6/1/2025`).
pub fn format_us_date(date: NaiveDate) -> String {
    format!("{}/{}/{}", date.month(), date.day(), date.year())
}
