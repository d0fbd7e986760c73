//! Selection maintenance helpers.
//!
//! Support for hand-editing a timetable: finding which lecture of a
//! course is active, pruning dependent sections when the lecture
//! changes, and carrying a tutorial choice across a lecture swap.
//!
//! All functions are pure; they return new selection lists and never
//! touch the catalog.

use std::collections::{BTreeSet, HashSet};

use crate::models::{Course, DayOfWeek, ParentLecture, SelectedCourse, Section, SectionType};

/// The lecture currently in effect for `course`.
///
/// A directly selected lecture wins. Otherwise the parent of the first
/// selected tutorial/lab with an explicit parent is used, provided that
/// lecture exists in the course.
pub fn active_lecture_id<'a>(
    selections: &[SelectedCourse<'a>],
    course: &Course,
) -> Option<&'a str> {
    let of_course = || {
        selections
            .iter()
            .filter(|sc| sc.course.course_code == course.course_code)
    };

    if let Some(direct) = of_course().find(|sc| sc.section.is_lecture()) {
        return Some(direct.section.section_id.as_str());
    }

    let parent = of_course()
        .filter(|sc| sc.section.section_type.is_dependent())
        .find_map(|sc| sc.section.parent_lecture.lecture_id())?;

    course.has_lecture(parent).then_some(parent)
}

/// Drops this course's sections that do not belong to `lecture_id`.
///
/// Keeps the named lecture and tutorials/labs parented to it. Other
/// lectures and unparented tutorials/labs of the course are removed;
/// seminars and other courses are untouched.
pub fn remove_dependent_sections_for_lecture<'a>(
    selections: &[SelectedCourse<'a>],
    course_code: &str,
    lecture_id: &str,
) -> Vec<SelectedCourse<'a>> {
    selections
        .iter()
        .copied()
        .filter(|sc| {
            if sc.course.course_code != course_code {
                return true;
            }
            let section = sc.section;
            if section.is_lecture() {
                return section.section_id == lecture_id;
            }
            if section.section_type.is_dependent() {
                return section.parent_lecture.lecture_id() == Some(lecture_id);
            }
            true
        })
        .collect()
}

/// Removes a lecture together with its tutorials/labs.
///
/// Unparented tutorials/labs of the course go too, since they can no
/// longer be attributed to a remaining lecture.
pub fn remove_lecture_and_dependents<'a>(
    selections: &[SelectedCourse<'a>],
    course_code: &str,
    lecture_id: &str,
) -> Vec<SelectedCourse<'a>> {
    selections
        .iter()
        .copied()
        .filter(|sc| {
            if sc.course.course_code != course_code {
                return true;
            }
            let section = sc.section;
            if section.is_lecture() {
                return section.section_id != lecture_id;
            }
            if section.section_type.is_dependent() {
                return match &section.parent_lecture {
                    ParentLecture::AnyLecture => false,
                    ParentLecture::Specific(parent) => parent != lecture_id,
                };
            }
            true
        })
        .collect()
}

/// Tutorials/labs offered under `lecture_id`.
///
/// Explicitly parented sections, plus unparented ones whose ID carries
/// the lecture ID as a prefix (e.g., `BT01` under lecture `B`). When
/// neither exists, every unparented tutorial/lab qualifies.
fn swap_candidates<'a>(course: &'a Course, lecture_id: &str) -> Vec<&'a Section> {
    let dependents = || {
        course
            .sections
            .iter()
            .filter(|s| s.section_type.is_dependent())
    };

    let matched: Vec<&Section> = dependents()
        .filter(|s| match &s.parent_lecture {
            ParentLecture::Specific(parent) => parent == lecture_id,
            ParentLecture::AnyLecture => s.section_id.starts_with(lecture_id),
        })
        .collect();

    if !matched.is_empty() {
        return matched;
    }
    dependents().filter(|s| s.parent_lecture.is_any()).collect()
}

/// Picks the tutorial to hold after switching from one lecture to another.
///
/// The current tutorial ID is re-prefixed with the new lecture ID
/// (`AT03` → `BT03`); if that section is offered under the new lecture it
/// is chosen. Otherwise the candidate with the smallest ID is returned.
pub fn pick_tutorial_for_lecture_swap<'a>(
    course: &'a Course,
    from_lecture_id: &str,
    to_lecture_id: &str,
    current_tutorial_id: &str,
) -> Option<&'a Section> {
    let mut candidates = swap_candidates(course, to_lecture_id);
    if candidates.is_empty() {
        return None;
    }

    if let Some(suffix) = current_tutorial_id.strip_prefix(from_lecture_id) {
        let mapped = format!("{to_lecture_id}{suffix}");
        if let Some(&found) = candidates.iter().find(|s| s.section_id == mapped) {
            return Some(found);
        }
    }

    candidates.sort_by(|a, b| a.section_id.cmp(&b.section_id));
    candidates.first().copied()
}

/// Total credits, each course counted once.
pub fn total_credits(selections: &[SelectedCourse<'_>]) -> f64 {
    let mut seen = HashSet::new();
    selections
        .iter()
        .filter(|sc| seen.insert(sc.course_code()))
        .map(|sc| sc.course.credits.unwrap_or(0.0))
        .sum()
}

/// Number of distinct courses in a selection.
pub fn count_unique_courses(selections: &[SelectedCourse<'_>]) -> usize {
    selections
        .iter()
        .map(|sc| sc.course_code())
        .collect::<HashSet<_>>()
        .len()
}

/// Days with at least one class, in calendar order.
pub fn schedule_days(selections: &[SelectedCourse<'_>]) -> Vec<DayOfWeek> {
    selections
        .iter()
        .flat_map(|sc| sc.section.time_slots.iter().map(|slot| slot.day))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Selected sections of one kind for a course.
pub fn selected_of_type<'s, 'a>(
    selections: &'s [SelectedCourse<'a>],
    course_code: &'s str,
    section_type: SectionType,
) -> impl Iterator<Item = &'s SelectedCourse<'a>> + 's {
    selections.iter().filter(move |sc| {
        sc.course.course_code == course_code && sc.section.section_type == section_type
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlot;

    fn lecture_a() -> Section {
        Section::lecture("A")
            .with_slot(TimeSlot::new(DayOfWeek::Monday, "09:00", "10:15"))
            .with_slot(TimeSlot::new(DayOfWeek::Wednesday, "09:00", "10:15"))
    }

    fn lecture_b() -> Section {
        Section::lecture("B")
            .with_slot(TimeSlot::new(DayOfWeek::Tuesday, "14:00", "15:15"))
            .with_slot(TimeSlot::new(DayOfWeek::Thursday, "14:00", "15:15"))
    }

    fn tutorial(id: &str, parent: Option<&str>, day: DayOfWeek, start: &str, end: &str) -> Section {
        let s = Section::tutorial(id).with_slot(TimeSlot::new(day, start, end));
        match parent {
            Some(p) => s.with_parent(p),
            None => s,
        }
    }

    /// Sections: A, B, TA1 (→A), TB1 (→B), T-ORPHAN (unparented).
    fn base_course() -> Course {
        Course::new("TEST1000")
            .with_credits(3.0)
            .with_section(lecture_a())
            .with_section(lecture_b())
            .with_section(tutorial("TA1", Some("A"), DayOfWeek::Friday, "11:00", "12:00"))
            .with_section(tutorial("TB1", Some("B"), DayOfWeek::Thursday, "16:00", "17:00"))
            .with_section(tutorial("T-ORPHAN", None, DayOfWeek::Monday, "12:00", "13:00"))
    }

    fn pattern_course() -> Course {
        Course::new("UGFH1000")
            .with_section(lecture_a())
            .with_section(lecture_b())
            .with_section(tutorial("AT03", None, DayOfWeek::Friday, "12:00", "13:00"))
            .with_section(tutorial("BT03", None, DayOfWeek::Friday, "13:00", "14:00"))
            .with_section(tutorial("BT01", None, DayOfWeek::Friday, "14:00", "15:00"))
    }

    fn other_course() -> Course {
        Course::new("OTHER2000").with_credits(2.0).with_section(
            Section::lecture("X").with_slot(TimeSlot::new(DayOfWeek::Monday, "15:00", "16:15")),
        )
    }

    fn sel<'a>(course: &'a Course, id: &str) -> SelectedCourse<'a> {
        SelectedCourse::new(course, course.section(id).unwrap())
    }

    fn ids_for(selections: &[SelectedCourse<'_>], code: &str) -> Vec<String> {
        selections
            .iter()
            .filter(|sc| sc.course_code() == code)
            .map(|sc| sc.section.section_id.clone())
            .collect()
    }

    #[test]
    fn test_active_lecture_direct() {
        let c = base_course();
        assert_eq!(active_lecture_id(&[sel(&c, "A")], &c), Some("A"));
    }

    #[test]
    fn test_active_lecture_inferred_from_tutorial() {
        let c = base_course();
        assert_eq!(active_lecture_id(&[sel(&c, "TA1")], &c), Some("A"));
        assert_eq!(active_lecture_id(&[sel(&c, "T-ORPHAN")], &c), None);
        assert_eq!(active_lecture_id(&[], &c), None);
    }

    #[test]
    fn test_active_lecture_unknown_parent() {
        let c = Course::new("C")
            .with_section(Section::lecture("L1"))
            .with_section(Section::tutorial("T").with_parent("GONE"));
        assert_eq!(active_lecture_id(&[sel(&c, "T")], &c), None);
    }

    #[test]
    fn test_remove_dependents_when_switching() {
        let c = base_course();
        let o = other_course();
        let selections = vec![
            sel(&c, "A"),
            sel(&c, "TA1"),
            sel(&c, "B"),
            sel(&c, "TB1"),
            sel(&o, "X"),
        ];
        let result = remove_dependent_sections_for_lecture(&selections, "TEST1000", "B");
        assert_eq!(ids_for(&result, "TEST1000"), vec!["B", "TB1"]);
        assert_eq!(ids_for(&result, "OTHER2000"), vec!["X"]);
    }

    #[test]
    fn test_remove_lecture_and_dependents() {
        let c = base_course();
        let o = other_course();
        let selections = vec![
            sel(&c, "A"),
            sel(&c, "TA1"),
            sel(&c, "T-ORPHAN"),
            sel(&c, "B"),
            sel(&o, "X"),
        ];
        let result = remove_lecture_and_dependents(&selections, "TEST1000", "A");
        assert_eq!(ids_for(&result, "TEST1000"), vec!["B"]);
        assert!(result.iter().any(|sc| sc.course_code() == "OTHER2000"));
    }

    #[test]
    fn test_swap_maps_by_pattern() {
        let c = pattern_course();
        let picked = pick_tutorial_for_lecture_swap(&c, "A", "B", "AT03").unwrap();
        assert_eq!(picked.section_id, "BT03");
    }

    #[test]
    fn test_swap_falls_back_to_first_sorted() {
        let c = pattern_course();
        let picked = pick_tutorial_for_lecture_swap(&c, "A", "B", "AT09").unwrap();
        assert_eq!(picked.section_id, "BT01");
    }

    #[test]
    fn test_swap_uses_explicit_parent() {
        let c = base_course();
        let picked = pick_tutorial_for_lecture_swap(&c, "A", "B", "TA1").unwrap();
        assert_eq!(picked.section_id, "TB1");

        let lectures_only = other_course();
        assert!(pick_tutorial_for_lecture_swap(&lectures_only, "X", "Y", "XT1").is_none());
    }

    #[test]
    fn test_credits_and_counts() {
        let c = base_course();
        let o = other_course();
        let selections = vec![sel(&c, "A"), sel(&c, "TA1"), sel(&o, "X")];
        assert_eq!(total_credits(&selections), 5.0);
        assert_eq!(count_unique_courses(&selections), 2);
        assert_eq!(
            schedule_days(&selections),
            vec![DayOfWeek::Monday, DayOfWeek::Wednesday, DayOfWeek::Friday]
        );
        assert_eq!(
            selected_of_type(&selections, "TEST1000", SectionType::Tutorial).count(),
            1
        );
    }
}
