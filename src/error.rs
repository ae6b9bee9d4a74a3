//! Error type for the fallible parts of the crate.
//!
//! The matcher and the conflict checker are total and never return errors.
//! Only the ancillary APIs (date parsing, selection-blob decoding, weight
//! configuration) surface a [`CastingError`].

/// Errors raised by parsing and configuration helpers.
#[derive(Debug, thiserror::Error)]
pub enum CastingError {
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    #[error("Invalid casting selection data: {0}")]
    SelectionData(#[from] serde_json::Error),

    #[error("Invalid match configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type CastingResult<T> = Result<T, CastingError>;
