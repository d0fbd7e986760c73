//! Schedule scoring.
//!
//! [`ScheduleMetrics`] aggregates a schedule once; a [`Preference`]
//! maps those aggregates to a score. No preference means every schedule
//! scores zero.
//!
//! # Usage
//!
//! ```
//! use u_timetable::models::{Course, DayOfWeek, Section, SelectedCourse, TimeSlot};
//! use u_timetable::scoring::{calculate_score, Preference};
//!
//! let course = Course::new("MATH1010").with_section(
//!     Section::lecture("A").with_slot(TimeSlot::new(DayOfWeek::Monday, "09:00", "10:00")),
//! );
//! let schedule = vec![SelectedCourse::new(&course, &course.sections[0])];
//!
//! // One class day out of five → four free days.
//! assert_eq!(calculate_score(&schedule, Some(Preference::DaysOff)), 800.0);
//! assert_eq!(calculate_score(&schedule, None), 0.0);
//! ```

mod metrics;
mod preference;

pub use metrics::{
    average_end_time, average_start_time, count_long_breaks, group_by_day, start_time_variance,
    total_gap_minutes, unique_days, DaySlots, ScheduleMetrics, LONG_BREAK_MINUTES, WEEKDAY_COUNT,
};
pub use preference::{
    Preference, CONSISTENT_START_CEILING, END_EARLY_CEILING, FREE_DAY_POINTS, LONG_BREAK_POINTS,
    SHORT_BREAK_CEILING,
};

use crate::models::{GeneratedSchedule, SelectedCourse};

/// Scores a schedule under a preference (`None` → 0).
pub fn calculate_score(schedule: &[SelectedCourse<'_>], preference: Option<Preference>) -> f64 {
    match preference {
        Some(p) => p.score(&ScheduleMetrics::calculate(schedule)),
        None => 0.0,
    }
}

/// Re-scores a finished schedule under another preference.
pub fn score_schedule(schedule: &GeneratedSchedule<'_>, preference: Option<Preference>) -> f64 {
    calculate_score(&schedule.sections, preference)
}
