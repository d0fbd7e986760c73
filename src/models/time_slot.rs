//! Weekly time slot model.
//!
//! A time slot is one recurring meeting window of a section: a day of
//! the week plus a start and end clock time.
//!
//! # Time Model
//! Clock times are minutes since midnight. Slots keep the caller's raw
//! `HH:MM` strings and convert on demand as `hours * 60 + minutes`
//! without range checks. A string that is not `H:MM`/`HH:MM` yields
//! `None`, and such a slot never overlaps anything. [`ClockTime`] is the
//! strict, range-checked parser used by catalog validation.
//!
//! # Interval Semantics
//! Half-open `[start, end)`: a slot ending at 10:00 and one starting at
//! 10:00 on the same day do not overlap.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TimetableError;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days in calendar order.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Whether this is Monday through Friday.
    pub fn is_weekday(self) -> bool {
        !matches!(self, DayOfWeek::Saturday | DayOfWeek::Sunday)
    }

    /// Three-letter abbreviation ("Mon", "Tue", ...).
    pub fn short_name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Mon",
            DayOfWeek::Tuesday => "Tue",
            DayOfWeek::Wednesday => "Wed",
            DayOfWeek::Thursday => "Thu",
            DayOfWeek::Friday => "Fri",
            DayOfWeek::Saturday => "Sat",
            DayOfWeek::Sunday => "Sun",
        }
    }
}

/// A wall-clock time, stored as minutes since midnight.
///
/// Parses `H:MM` and `HH:MM`. Hours run 0..=24 (24 only as `24:00`),
/// minutes 0..=59. Displays as zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u32);

impl ClockTime {
    /// Creates a clock time from minutes since midnight.
    pub fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimetableError::InvalidClockTime {
            value: s.to_string(),
        };

        let (h, m) = clock_fields(s).ok_or_else(invalid)?;
        if m >= 60 || h > 24 || (h == 24 && m != 0) {
            return Err(invalid());
        }
        Ok(Self(h * 60 + m))
    }
}

/// Splits `H:MM`/`HH:MM` into hour and minute fields.
///
/// Checks the shape only: one or two hour digits, exactly two minute
/// digits. Values are not range-checked.
fn clock_fields(s: &str) -> Option<(u32, u32)> {
    let (hours, minutes) = s.split_once(':')?;
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !(1..=2).contains(&hours.len()) || minutes.len() != 2 || !digits(hours) || !digits(minutes) {
        return None;
    }
    Some((hours.parse().ok()?, minutes.parse().ok()?))
}

/// Lenient conversion used by slots: `hours * 60 + minutes` for any
/// well-shaped string, so `09:75` is 615 and `25:00` is 1500.
fn clock_minutes(s: &str) -> Option<u32> {
    let (h, m) = clock_fields(s)?;
    Some(h * 60 + m)
}

impl TryFrom<&str> for ClockTime {
    type Error = TimetableError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// One recurring weekly meeting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    /// Meeting day.
    pub day: DayOfWeek,
    /// Start time as supplied (`HH:MM`).
    pub start_time: String,
    /// End time as supplied (`HH:MM`).
    pub end_time: String,
    /// Room or venue, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl TimeSlot {
    /// Creates a new time slot.
    pub fn new(day: DayOfWeek, start_time: impl Into<String>, end_time: impl Into<String>) -> Self {
        Self {
            day,
            start_time: start_time.into(),
            end_time: end_time.into(),
            location: None,
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Start in minutes since midnight, `None` if malformed.
    ///
    /// Out-of-range values such as `25:00` still convert.
    pub fn start_minutes(&self) -> Option<u32> {
        clock_minutes(&self.start_time)
    }

    /// End in minutes since midnight, `None` if malformed.
    pub fn end_minutes(&self) -> Option<u32> {
        clock_minutes(&self.end_time)
    }

    /// Both endpoints in minutes, `None` if either is malformed.
    pub fn minutes_range(&self) -> Option<(u32, u32)> {
        Some((self.start_minutes()?, self.end_minutes()?))
    }

    /// Duration in minutes (end - start).
    ///
    /// Negative for inverted slots, `None` if malformed.
    pub fn duration_minutes(&self) -> Option<i64> {
        let (start, end) = self.minutes_range()?;
        Some(i64::from(end) - i64::from(start))
    }

    /// Whether two slots overlap.
    ///
    /// Different days never overlap. On the same day the half-open
    /// intervals must intersect: `start_a < end_b && start_b < end_a`.
    pub fn overlaps(&self, other: &Self) -> bool {
        if self.day != other.day {
            return false;
        }

        match (self.minutes_range(), other.minutes_range()) {
            (Some((start_a, end_a)), Some((start_b, end_b))) => {
                let hit = start_a < end_b && start_b < end_a;
                tracing::trace!(
                    day = ?self.day,
                    start_a,
                    end_a,
                    start_b,
                    end_b,
                    hit,
                    "overlap check"
                );
                hit
            }
            _ => false,
        }
    }
}

impl fmt::Display for TimeSlot {
    /// Short display form, e.g. `Mon 09:00-10:15`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day.short_name(),
            self.start_time,
            self.end_time
        )
    }
}
