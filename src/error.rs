//! Error types.
//!
//! Generation itself never fails: malformed data degrades to empty
//! results or zero scores. Errors only surface from the explicit parsing
//! entry points (`ClockTime::from_str`, `Preference::from_str`).

use thiserror::Error;

/// Errors raised by the strict parsing helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimetableError {
    /// A time string is not `H:MM`/`HH:MM` or is out of range.
    #[error("invalid clock time '{value}': expected H:MM or HH:MM")]
    InvalidClockTime { value: String },

    /// A preference name outside the known set.
    #[error("unknown preference '{0}'")]
    UnknownPreference(String),
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, TimetableError>;
