//! Per-schedule aggregate metrics.
//!
//! Slots are grouped by day and sorted by start time; every preference
//! score is a function of the aggregates below.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total gap | Sum of `max(0, next_start - end)` over adjacent slots per day |
//! | Long breaks | Adjacent pairs with `next_start - end >= 60` |
//! | Average start | Mean of each day's earliest start |
//! | Average end | Mean of each day's latest end |
//! | Start variance | Population variance of each day's earliest start |
//! | Days used | Distinct days with a slot |
//! | Free days | `5 - days_used` |
//!
//! Slots whose times do not parse are left out of the time-based
//! metrics but still count toward days used.

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{DayOfWeek, ScheduleMetadata, SelectedCourse, TimeSlot};

/// Gap length (minutes) that counts as a long break.
pub const LONG_BREAK_MINUTES: u32 = 60;

/// Weekdays in a teaching week.
pub const WEEKDAY_COUNT: i32 = 5;

/// One day's slots as `(start, end)` minutes, sorted by start.
pub type DaySlots = Vec<(u32, u32)>;

/// Groups every slot of a schedule by day.
///
/// Within a day, slots are sorted by start; equal starts keep schedule
/// order. Unparseable slots are dropped with a warning.
pub fn group_by_day(schedule: &[SelectedCourse<'_>]) -> BTreeMap<DayOfWeek, DaySlots> {
    let mut grouped: BTreeMap<DayOfWeek, DaySlots> = BTreeMap::new();

    for selected in schedule {
        for slot in &selected.section.time_slots {
            match slot.minutes_range() {
                Some(range) => grouped.entry(slot.day).or_default().push(range),
                None => tracing::warn!(
                    course = %selected.course.course_code,
                    section = %selected.section.section_id,
                    start = %slot.start_time,
                    end = %slot.end_time,
                    "skipping slot with malformed time"
                ),
            }
        }
    }

    for slots in grouped.values_mut() {
        slots.sort_by_key(|&(start, _)| start);
    }
    grouped
}

/// Distinct days with at least one slot, in calendar order.
pub fn unique_days(schedule: &[SelectedCourse<'_>]) -> BTreeSet<DayOfWeek> {
    schedule
        .iter()
        .flat_map(|s| s.section.time_slots.iter().map(|slot: &TimeSlot| slot.day))
        .collect()
}

/// Aggregates for one schedule.
///
/// All times are minutes since midnight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScheduleMetrics {
    /// Idle minutes between adjacent classes, all days.
    pub total_gap_minutes: u32,
    /// Adjacent-class gaps of at least [`LONG_BREAK_MINUTES`].
    pub long_break_count: usize,
    /// Mean earliest start over days with classes (0 if none).
    pub average_start_time: f64,
    /// Mean latest end over days with classes (0 if none).
    pub average_end_time: f64,
    /// Population variance of daily earliest starts (0 if none).
    pub start_time_variance: f64,
    /// Distinct days with a slot.
    pub days_used: usize,
    /// `WEEKDAY_COUNT - days_used`.
    pub free_days: i32,
}

impl ScheduleMetrics {
    /// Computes all aggregates for a schedule.
    pub fn calculate(schedule: &[SelectedCourse<'_>]) -> Self {
        let by_day = group_by_day(schedule);

        let mut total_gap: u32 = 0;
        let mut long_breaks: usize = 0;
        let mut starts: Vec<f64> = Vec::with_capacity(by_day.len());
        let mut ends: Vec<f64> = Vec::with_capacity(by_day.len());

        for slots in by_day.values() {
            for pair in slots.windows(2) {
                let (_, end) = pair[0];
                let (next_start, _) = pair[1];
                // Gap floored at zero for the total; an overlap is never a long break.
                total_gap += next_start.saturating_sub(end);
                if next_start >= end + LONG_BREAK_MINUTES {
                    long_breaks += 1;
                }
            }

            if let Some(first) = slots.iter().map(|&(s, _)| s).min() {
                starts.push(f64::from(first));
            }
            if let Some(last) = slots.iter().map(|&(_, e)| e).max() {
                ends.push(f64::from(last));
            }
        }

        let days_used = unique_days(schedule).len();

        Self {
            total_gap_minutes: total_gap,
            long_break_count: long_breaks,
            average_start_time: mean(&starts),
            average_end_time: mean(&ends),
            start_time_variance: variance(&starts),
            days_used,
            free_days: WEEKDAY_COUNT - days_used as i32,
        }
    }

    /// The caller-facing metadata view.
    pub fn to_metadata(&self) -> ScheduleMetadata {
        ScheduleMetadata {
            total_gap_minutes: self.total_gap_minutes,
            days_used: self.days_used,
            avg_start_time: self.average_start_time,
            avg_end_time: self.average_end_time,
            free_days: self.free_days,
            long_break_count: self.long_break_count,
        }
    }
}

impl From<&ScheduleMetrics> for ScheduleMetadata {
    fn from(metrics: &ScheduleMetrics) -> Self {
        metrics.to_metadata()
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Total idle minutes between adjacent classes.
pub fn total_gap_minutes(schedule: &[SelectedCourse<'_>]) -> u32 {
    ScheduleMetrics::calculate(schedule).total_gap_minutes
}

/// Number of gaps of at least an hour.
pub fn count_long_breaks(schedule: &[SelectedCourse<'_>]) -> usize {
    ScheduleMetrics::calculate(schedule).long_break_count
}

/// Population variance of daily earliest start times.
pub fn start_time_variance(schedule: &[SelectedCourse<'_>]) -> f64 {
    ScheduleMetrics::calculate(schedule).start_time_variance
}

/// Mean daily earliest start time.
pub fn average_start_time(schedule: &[SelectedCourse<'_>]) -> f64 {
    ScheduleMetrics::calculate(schedule).average_start_time
}

/// Mean daily latest end time.
pub fn average_end_time(schedule: &[SelectedCourse<'_>]) -> f64 {
    ScheduleMetrics::calculate(schedule).average_end_time
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, Section};

    fn course_with(code: &str, slots: &[(DayOfWeek, &str, &str)]) -> Course {
        let section = slots.iter().fold(Section::lecture("L"), |s, &(d, a, b)| {
            s.with_slot(TimeSlot::new(d, a, b))
        });
        Course::new(code).with_section(section)
    }

    fn select(courses: &[Course]) -> Vec<SelectedCourse<'_>> {
        courses
            .iter()
            .map(|c| SelectedCourse::new(c, &c.sections[0]))
            .collect()
    }

    #[test]
    fn test_gaps_and_long_breaks() {
        // Monday: 09:00-10:00, 10:30-11:30, 13:00-14:00 → gaps 30 + 90
        // Tuesday: 09:00-10:00, 10:00-11:00 → gap 0
        let courses = vec![
            course_with(
                "A",
                &[
                    (DayOfWeek::Monday, "13:00", "14:00"),
                    (DayOfWeek::Tuesday, "09:00", "10:00"),
                ],
            ),
            course_with(
                "B",
                &[
                    (DayOfWeek::Monday, "09:00", "10:00"),
                    (DayOfWeek::Tuesday, "10:00", "11:00"),
                ],
            ),
            course_with("C", &[(DayOfWeek::Monday, "10:30", "11:30")]),
        ];
        let m = ScheduleMetrics::calculate(&select(&courses));
        assert_eq!(m.total_gap_minutes, 120);
        assert_eq!(m.long_break_count, 1);
        assert_eq!(m.days_used, 2);
        assert_eq!(m.free_days, 3);
    }

    #[test]
    fn test_exact_hour_is_long_break() {
        let courses = vec![course_with(
            "A",
            &[
                (DayOfWeek::Monday, "09:00", "10:00"),
                (DayOfWeek::Monday, "11:00", "12:00"),
            ],
        )];
        assert_eq!(count_long_breaks(&select(&courses)), 1);
        assert_eq!(total_gap_minutes(&select(&courses)), 60);
    }

    #[test]
    fn test_overlapping_slots_floor_gap() {
        let courses = vec![course_with(
            "A",
            &[
                (DayOfWeek::Monday, "09:00", "11:00"),
                (DayOfWeek::Monday, "10:00", "12:00"),
            ],
        )];
        let m = ScheduleMetrics::calculate(&select(&courses));
        assert_eq!(m.total_gap_minutes, 0);
        assert_eq!(m.long_break_count, 0);
    }

    #[test]
    fn test_start_end_statistics() {
        // Monday starts 09:00 (540), ends 12:00 (720)
        // Wednesday starts 11:00 (660), ends 16:00 (960)
        let courses = vec![
            course_with(
                "A",
                &[
                    (DayOfWeek::Monday, "09:00", "10:00"),
                    (DayOfWeek::Wednesday, "15:00", "16:00"),
                ],
            ),
            course_with(
                "B",
                &[
                    (DayOfWeek::Monday, "11:00", "12:00"),
                    (DayOfWeek::Wednesday, "11:00", "12:00"),
                ],
            ),
        ];
        let s = select(&courses);
        assert!((average_start_time(&s) - 600.0).abs() < 1e-10);
        assert!((average_end_time(&s) - 840.0).abs() < 1e-10);
        // deviations ±60 → variance 3600
        assert!((start_time_variance(&s) - 3600.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_schedule() {
        let m = ScheduleMetrics::calculate(&[]);
        assert_eq!(m.total_gap_minutes, 0);
        assert_eq!(m.days_used, 0);
        assert_eq!(m.free_days, 5);
        assert_eq!(m.average_start_time, 0.0);
        assert_eq!(m.start_time_variance, 0.0);
    }

    #[test]
    fn test_weekend_reduces_free_days() {
        let courses = vec![course_with(
            "A",
            &[
                (DayOfWeek::Monday, "09:00", "10:00"),
                (DayOfWeek::Saturday, "09:00", "10:00"),
            ],
        )];
        let m = ScheduleMetrics::calculate(&select(&courses));
        assert_eq!(m.days_used, 2);
        assert_eq!(m.free_days, 3);
    }

    #[test]
    fn test_malformed_slot_counts_day_only() {
        let courses = vec![course_with(
            "A",
            &[
                (DayOfWeek::Monday, "09:00", "10:00"),
                (DayOfWeek::Tuesday, "bad", "10:00"),
            ],
        )];
        let s = select(&courses);
        let m = ScheduleMetrics::calculate(&s);
        assert_eq!(m.days_used, 2);
        assert!((m.average_start_time - 540.0).abs() < 1e-10);
        assert_eq!(group_by_day(&s).len(), 1);
    }

    #[test]
    fn test_metadata_view() {
        let courses = vec![course_with("A", &[(DayOfWeek::Friday, "14:00", "15:30")])];
        let m = ScheduleMetrics::calculate(&select(&courses));
        let meta = ScheduleMetadata::from(&m);
        assert_eq!(meta.days_used, 1);
        assert_eq!(meta.free_days, 4);
        assert!((meta.avg_end_time - 930.0).abs() < 1e-10);
    }
}
