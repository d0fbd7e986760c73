//! Ranking preferences.
//!
//! Each preference turns [`ScheduleMetrics`] into a score where higher
//! is better.
//!
//! | Preference | Score |
//! |------------|-------|
//! | `shortBreaks` | `max(0, 1000 - total_gap)` |
//! | `longBreaks` | `long_breaks * 100` |
//! | `consistentStart` | `max(0, 1000 - start_variance)` |
//! | `startLate` | `average_start` |
//! | `endEarly` | `max(0, 1200 - average_end)` |
//! | `daysOff` | `free_days * 200` |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ScheduleMetrics;
use crate::error::TimetableError;

/// Ceiling for `shortBreaks`: a schedule with no gaps scores this.
pub const SHORT_BREAK_CEILING: f64 = 1000.0;
/// Points per long break.
pub const LONG_BREAK_POINTS: f64 = 100.0;
/// Ceiling for `consistentStart`.
pub const CONSISTENT_START_CEILING: f64 = 1000.0;
/// Latest assumed end of day (20:00) for `endEarly`.
pub const END_EARLY_CEILING: f64 = 1200.0;
/// Points per free weekday.
pub const FREE_DAY_POINTS: f64 = 200.0;

/// A named ranking heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Preference {
    /// Minimal idle time between classes.
    ShortBreaks,
    /// Many breaks of an hour or more.
    LongBreaks,
    /// Same start time every day.
    ConsistentStart,
    /// Later average start.
    StartLate,
    /// Earlier average end.
    EndEarly,
    /// Fewer days on campus.
    DaysOff,
}

impl Preference {
    /// All preferences.
    pub const ALL: [Preference; 6] = [
        Preference::ShortBreaks,
        Preference::LongBreaks,
        Preference::ConsistentStart,
        Preference::StartLate,
        Preference::EndEarly,
        Preference::DaysOff,
    ];

    /// Wire name (e.g., "shortBreaks").
    pub fn name(self) -> &'static str {
        match self {
            Preference::ShortBreaks => "shortBreaks",
            Preference::LongBreaks => "longBreaks",
            Preference::ConsistentStart => "consistentStart",
            Preference::StartLate => "startLate",
            Preference::EndEarly => "endEarly",
            Preference::DaysOff => "daysOff",
        }
    }

    /// Human-readable description.
    pub fn description(self) -> &'static str {
        match self {
            Preference::ShortBreaks => "Minimize gaps between classes",
            Preference::LongBreaks => "Maximize breaks of 60 minutes or more",
            Preference::ConsistentStart => "Start at the same time every day",
            Preference::StartLate => "Start as late as possible",
            Preference::EndEarly => "Finish as early as possible",
            Preference::DaysOff => "Maximize free weekdays",
        }
    }

    /// Scores precomputed metrics. Higher = better.
    pub fn score(self, m: &ScheduleMetrics) -> f64 {
        match self {
            Preference::ShortBreaks => (SHORT_BREAK_CEILING - f64::from(m.total_gap_minutes)).max(0.0),
            Preference::LongBreaks => m.long_break_count as f64 * LONG_BREAK_POINTS,
            Preference::ConsistentStart => {
                (CONSISTENT_START_CEILING - m.start_time_variance).max(0.0)
            }
            Preference::StartLate => m.average_start_time,
            Preference::EndEarly => (END_EARLY_CEILING - m.average_end_time).max(0.0),
            Preference::DaysOff => f64::from(m.free_days) * FREE_DAY_POINTS,
        }
    }

    /// Parses a wire name, mapping unknown names to `None`.
    ///
    /// An unknown name ranks nothing, same as no preference.
    pub fn parse_lenient(name: &str) -> Option<Self> {
        match name.parse() {
            Ok(p) => Some(p),
            Err(_) => {
                tracing::warn!(preference = name, "unknown preference, results will be unranked");
                None
            }
        }
    }
}

impl FromStr for Preference {
    type Err = TimetableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preference::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| TimetableError::UnknownPreference(s.to_string()))
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
