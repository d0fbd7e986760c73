//! Generated schedule (solution) model.
//!
//! A generated schedule is one conflict-free combination of sections,
//! its preference score, and the raw aggregates behind every preference
//! so callers can display several facets at once.

use serde::Serialize;

use super::{DayOfWeek, SelectedCourse};

/// One ranked candidate timetable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSchedule<'a> {
    /// Chosen sections, in generation order (course by course).
    pub sections: Vec<SelectedCourse<'a>>,
    /// Preference score (higher = better). Zero when unranked.
    pub score: f64,
    /// Aggregates, computed regardless of preference.
    pub metadata: ScheduleMetadata,
}

/// Raw per-schedule aggregates.
///
/// Times are minutes since midnight.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetadata {
    /// Idle minutes between consecutive classes, summed over all days.
    pub total_gap_minutes: u32,
    /// Distinct days with at least one class.
    pub days_used: usize,
    /// Mean of each day's earliest start.
    pub avg_start_time: f64,
    /// Mean of each day's latest end.
    pub avg_end_time: f64,
    /// `5 - days_used`; negative when weekend days push usage past five.
    pub free_days: i32,
    /// Gaps of at least an hour.
    pub long_break_count: usize,
}

impl<'a> GeneratedSchedule<'a> {
    /// Number of chosen sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Entries belonging to one course.
    pub fn sections_for_course(&self, course_code: &str) -> Vec<&SelectedCourse<'a>> {
        self.sections
            .iter()
            .filter(|s| s.course.course_code == course_code)
            .collect()
    }

    /// Whether the schedule contains the given section of the given course.
    pub fn contains(&self, course_code: &str, section_id: &str) -> bool {
        self.sections
            .iter()
            .any(|s| s.course.course_code == course_code && s.section.section_id == section_id)
    }

    /// Days with at least one class, in calendar order.
    pub fn days(&self) -> Vec<DayOfWeek> {
        crate::selection::schedule_days(&self.sections)
    }
}
