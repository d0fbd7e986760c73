//! Time conflict detection.
//!
//! One overlap predicate serves two callers:
//!
//! - **Generation**: [`has_conflicts`] rejects a candidate schedule if any
//!   two of its entries share time. Same-course pairs are checked too; a
//!   lecture clashing with its own tutorial is bad catalog data and the
//!   candidate is dropped.
//! - **Live feedback**: [`detect_conflicts`] and
//!   [`detect_new_course_conflicts`] report clashes in a hand-built
//!   selection. These skip pairs from the same course, since a student
//!   may hold alternative sections of one course while editing.

use serde::Serialize;

use crate::models::{SelectedCourse, TimeSlot};

/// Whether two time slots overlap.
///
/// Free-function form of [`TimeSlot::overlaps`]. Symmetric, and false for
/// slots on different days or with unparseable times.
#[inline]
pub fn overlaps(a: &TimeSlot, b: &TimeSlot) -> bool {
    a.overlaps(b)
}

/// Whether any slot of one selection overlaps any slot of the other.
fn sections_overlap(a: &SelectedCourse<'_>, b: &SelectedCourse<'_>) -> bool {
    a.section
        .time_slots
        .iter()
        .any(|sa| b.section.time_slots.iter().any(|sb| overlaps(sa, sb)))
}

/// Whether a candidate schedule contains any overlapping pair.
///
/// Checks every unordered pair `(i, j)`, `i < j`, without a same-course
/// exemption.
pub fn has_conflicts(schedule: &[SelectedCourse<'_>]) -> bool {
    schedule.iter().enumerate().any(|(i, a)| {
        schedule[i + 1..]
            .iter()
            .any(|b| sections_overlap(a, b))
    })
}

/// Whether a candidate schedule is conflict-free.
#[inline]
pub fn is_valid(schedule: &[SelectedCourse<'_>]) -> bool {
    !has_conflicts(schedule)
}

/// Two slots that collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotPair<'a> {
    /// Slot from the first selection.
    pub slot1: &'a TimeSlot,
    /// Slot from the second selection.
    pub slot2: &'a TimeSlot,
}

/// A clashing pair of selections from different courses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict<'a> {
    /// Earlier entry in the selection list.
    pub course1: SelectedCourse<'a>,
    /// Later entry in the selection list.
    pub course2: SelectedCourse<'a>,
    /// Every colliding slot pair, not deduplicated.
    pub conflicting_time_slots: Vec<SlotPair<'a>>,
}

/// Lists every clashing pair in a selection.
///
/// Pairs from the same course are skipped. Each returned conflict
/// carries all of its colliding slot pairs.
pub fn detect_conflicts<'a>(selections: &[SelectedCourse<'a>]) -> Vec<Conflict<'a>> {
    let mut conflicts = Vec::new();

    for (i, &first) in selections.iter().enumerate() {
        for &second in &selections[i + 1..] {
            if first.same_course(&second) {
                continue;
            }

            let slots: Vec<SlotPair<'a>> = first
                .section
                .time_slots
                .iter()
                .flat_map(|slot1| {
                    second
                        .section
                        .time_slots
                        .iter()
                        .filter(move |slot2| overlaps(slot1, slot2))
                        .map(move |slot2| SlotPair { slot1, slot2 })
                })
                .collect();

            if !slots.is_empty() {
                conflicts.push(Conflict {
                    course1: first,
                    course2: second,
                    conflicting_time_slots: slots,
                });
            }
        }
    }

    conflicts
}

/// Course codes in `existing` that clash with `candidate`.
///
/// Entries from the candidate's own course are ignored. Each code
/// appears once, in the order first encountered.
pub fn detect_new_course_conflicts(
    candidate: &SelectedCourse<'_>,
    existing: &[SelectedCourse<'_>],
) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();

    for entry in existing {
        if entry.same_course(candidate) {
            continue;
        }
        let code = entry.course_code();
        if codes.iter().any(|c| c == code) {
            continue;
        }
        if sections_overlap(candidate, entry) {
            codes.push(code.to_string());
        }
    }

    codes
}
