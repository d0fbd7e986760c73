//! Schedule generation pipeline.
//!
//! # Algorithm
//!
//! 1. Build course-local combinations and walk their Cartesian product.
//! 2. Drop candidates with any time overlap.
//! 3. Aggregate and score each survivor.
//! 4. Stable sort by score, descending; equal scores keep generation order.
//! 5. Truncate to the result cap.
//!
//! # Complexity
//! O(P · n²·s²) where P = product size, n = sections per schedule,
//! s = slots per section. Only survivors are held in memory.

use tracing::{debug, instrument, warn};

use super::GenerationOptions;
use crate::conflict::is_valid;
use crate::generator::{combinations_by_course, flatten, CartesianProduct};
use crate::models::{Course, GeneratedSchedule, SelectedCourse};
use crate::scoring::{Preference, ScheduleMetrics};

/// Generates, filters, scores and ranks schedules.
///
/// Returns at most `options.effective_max_results()` schedules, best
/// first. Empty input, or input where every candidate clashes, yields an
/// empty list.
///
/// # Example
///
/// ```
/// use u_timetable::models::{Course, DayOfWeek, Section, TimeSlot};
/// use u_timetable::scheduler::{generate_schedules, GenerationOptions};
/// use u_timetable::scoring::Preference;
///
/// let courses = vec![
///     Course::new("A")
///         .with_section(Section::lecture("A1").with_slot(TimeSlot::new(DayOfWeek::Monday, "09:00", "10:00")))
///         .with_section(Section::lecture("A2").with_slot(TimeSlot::new(DayOfWeek::Monday, "14:00", "15:00"))),
///     Course::new("B")
///         .with_section(Section::lecture("B1").with_slot(TimeSlot::new(DayOfWeek::Monday, "10:00", "11:00"))),
/// ];
///
/// let options = GenerationOptions::ranked(Preference::ShortBreaks).with_max_results(1);
/// let best = generate_schedules(&courses, &options);
/// assert_eq!(best.len(), 1);
/// assert!(best[0].contains("A", "A1")); // back-to-back with B1
/// ```
#[instrument(skip_all, fields(courses = courses.len(), preference = ?options.preference))]
pub fn generate_schedules<'a>(
    courses: &'a [Course],
    options: &GenerationOptions,
) -> Vec<GeneratedSchedule<'a>> {
    if courses.is_empty() {
        return Vec::new();
    }

    let by_course = combinations_by_course(courses);
    let product = CartesianProduct::new(&by_course);
    let total = product.total();
    debug!(candidates = total, "enumerating combinations");

    let limit = match options.candidate_limit() {
        Some(limit) if limit < total => {
            warn!(candidates = total, limit, "candidate cap reached, enumeration truncated");
            limit
        }
        _ => total,
    };

    let mut ranked: Vec<GeneratedSchedule<'a>> = product
        .take(limit)
        .map(|tuple| flatten(&tuple))
        .filter(|sections| is_valid(sections))
        .map(|sections| build_schedule(sections, options))
        .collect();
    debug!(valid = ranked.len(), "conflict-free schedules");

    // `sort_by` is stable: ties stay in generation order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(options.effective_max_results());
    ranked
}

fn build_schedule<'a>(
    sections: Vec<SelectedCourse<'a>>,
    options: &GenerationOptions,
) -> GeneratedSchedule<'a> {
    let metrics = ScheduleMetrics::calculate(&sections);
    let score = options.preference.map_or(0.0, |p| p.score(&metrics));
    GeneratedSchedule {
        sections,
        score,
        metadata: metrics.to_metadata(),
    }
}

/// Reusable generator holding a fixed set of options.
///
/// # Example
///
/// ```
/// use u_timetable::scheduler::ScheduleGenerator;
/// use u_timetable::scoring::Preference;
///
/// let generator = ScheduleGenerator::new()
///     .with_preference(Preference::DaysOff)
///     .with_max_results(10);
/// assert!(generator.generate(&[]).is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    options: GenerationOptions,
}

impl ScheduleGenerator {
    /// Creates an unranked generator with default caps.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator from options.
    pub fn with_options(options: GenerationOptions) -> Self {
        Self { options }
    }

    /// Sets the preference.
    pub fn with_preference(mut self, preference: Preference) -> Self {
        self.options.preference = Some(preference);
        self
    }

    /// Sets the result cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.options.max_results = Some(max_results);
        self
    }

    /// Caps the candidates examined.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.options.max_candidates = Some(max_candidates);
        self
    }

    /// Current options.
    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    /// Runs the pipeline on the given courses.
    pub fn generate<'a>(&self, courses: &'a [Course]) -> Vec<GeneratedSchedule<'a>> {
        generate_schedules(courses, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DayOfWeek, Section, TimeSlot};

    fn lecture(id: &str, day: DayOfWeek, start: &str, end: &str) -> Section {
        Section::lecture(id).with_slot(TimeSlot::new(day, start, end))
    }

    fn section_ids(s: &GeneratedSchedule<'_>) -> Vec<String> {
        s.sections
            .iter()
            .map(|e| format!("{}:{}", e.course_code(), e.section.section_id))
            .collect()
    }

    /// A: three Monday lectures; B: one Monday lecture at 11:00.
    fn choice_courses() -> Vec<Course> {
        vec![
            Course::new("A")
                .with_section(lecture("A1", DayOfWeek::Monday, "09:00", "10:00"))
                .with_section(lecture("A2", DayOfWeek::Monday, "13:00", "14:00"))
                .with_section(lecture("A3", DayOfWeek::Monday, "10:00", "11:00")),
            Course::new("B").with_section(lecture("B1", DayOfWeek::Monday, "11:00", "12:00")),
        ]
    }

    #[test]
    fn test_ranking_descending() {
        let courses = choice_courses();
        let result = generate_schedules(&courses, &GenerationOptions::ranked(Preference::ShortBreaks));
        let scores: Vec<f64> = result.iter().map(|s| s.score).collect();
        // A3+B1: gap 0; A1+B1: gap 60; A2+B1: gap 60
        assert_eq!(scores, vec![1000.0, 940.0, 940.0]);
        assert!(result[0].contains("A", "A3"));
        // Ties keep generation order: A1 before A2.
        assert!(result[1].contains("A", "A1"));
        assert!(result[2].contains("A", "A2"));
    }

    #[test]
    fn test_max_results_keeps_best() {
        let courses = choice_courses();
        let options = GenerationOptions::ranked(Preference::StartLate).with_max_results(1);
        let result = generate_schedules(&courses, &options);
        assert_eq!(result.len(), 1);
        // A2 + B1: Monday starts at 11:00.
        assert!(result[0].contains("A", "A2"));
        assert_eq!(result[0].score, 660.0);
    }

    #[test]
    fn test_unranked_is_deterministic() {
        let courses = choice_courses();
        let first: Vec<Vec<String>> = generate_schedules(&courses, &GenerationOptions::new())
            .iter()
            .map(section_ids)
            .collect();
        let second: Vec<Vec<String>> = generate_schedules(&courses, &GenerationOptions::new())
            .iter()
            .map(section_ids)
            .collect();
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                vec!["A:A1", "B:B1"],
                vec!["A:A2", "B:B1"],
                vec!["A:A3", "B:B1"],
            ]
        );
    }

    #[test]
    fn test_metadata_always_present() {
        let courses = choice_courses();
        let result = generate_schedules(&courses, &GenerationOptions::new());
        assert!(result.iter().all(|s| s.score == 0.0));
        let meta = &result[0].metadata;
        assert_eq!(meta.days_used, 1);
        assert_eq!(meta.free_days, 4);
        assert_eq!(meta.total_gap_minutes, 60);
        assert_eq!(meta.long_break_count, 1);
    }

    #[test]
    fn test_conflicts_filtered() {
        let courses = vec![
            Course::new("A")
                .with_section(lecture("A1", DayOfWeek::Monday, "09:00", "10:00"))
                .with_section(lecture("A2", DayOfWeek::Tuesday, "09:00", "10:00")),
            Course::new("B").with_section(lecture("B1", DayOfWeek::Monday, "09:30", "10:30")),
        ];
        let result = generate_schedules(&courses, &GenerationOptions::new());
        assert_eq!(result.len(), 1);
        assert_eq!(section_ids(&result[0]), vec!["A:A2", "B:B1"]);
    }

    #[test]
    fn test_candidate_cap() {
        let courses = choice_courses();
        let options = GenerationOptions::new().with_max_candidates(2);
        let result = generate_schedules(&courses, &options);
        assert_eq!(result.len(), 2);
        assert!(result[0].contains("A", "A1"));
        assert!(result[1].contains("A", "A2"));
    }

    #[test]
    fn test_generator_wrapper() {
        let courses = choice_courses();
        let generator = ScheduleGenerator::new()
            .with_preference(Preference::ShortBreaks)
            .with_max_results(2);
        assert_eq!(generator.options().effective_max_results(), 2);
        let result = generator.generate(&courses);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].score, 1000.0);
    }

    #[test]
    fn test_empty_courses() {
        assert!(generate_schedules(&[], &GenerationOptions::ranked(Preference::DaysOff)).is_empty());
    }
}
