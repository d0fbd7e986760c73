//! Section combination generation.
//!
//! Enumerates every structurally valid timetable for a set of courses.
//!
//! # Algorithm
//!
//! 1. Per course, pair each lecture with each of its dependent sections
//!    (or take the lecture alone when it has none). These are the
//!    course-local combinations.
//! 2. Take the Cartesian product of the per-course lists, first course
//!    outermost, and flatten each tuple into one candidate schedule.
//!
//! No pruning happens here; conflict filtering runs afterwards.
//!
//! # Complexity
//! Output size is the product of the per-course combination counts.

use crate::models::{Course, SelectedCourse, Section};

/// Non-lecture sections that pair with `lecture`, in catalog order.
///
/// A section pairs when its parent link names this lecture or accepts
/// any lecture.
pub fn dependents_for<'a>(course: &'a Course, lecture: &Section) -> Vec<&'a Section> {
    course
        .sections
        .iter()
        .filter(|s| !s.is_lecture() && s.parent_lecture.matches(&lecture.section_id))
        .collect()
}

/// Course-local combinations: `[lecture]` or `[lecture, dependent]`.
///
/// One entry per (lecture, matching dependent) pair, or one singleton
/// per lecture without dependents. A course with no lectures yields none.
pub fn course_combinations(course: &Course) -> Vec<Vec<SelectedCourse<'_>>> {
    let mut combinations = Vec::new();

    for lecture in course.lectures() {
        let lecture_entry = SelectedCourse::new(course, lecture);
        let dependents = dependents_for(course, lecture);

        if dependents.is_empty() {
            combinations.push(vec![lecture_entry]);
        } else {
            for dependent in dependents {
                combinations.push(vec![lecture_entry, SelectedCourse::new(course, dependent)]);
            }
        }
    }

    combinations
}

/// Iterator over the Cartesian product of several lists.
///
/// Yields index tuples in lexicographic order: the first list varies
/// slowest, the last fastest. An empty list anywhere, or no lists at
/// all, yields nothing.
#[derive(Debug, Clone)]
pub struct CartesianProduct<'l, T> {
    lists: &'l [Vec<T>],
    indices: Vec<usize>,
    done: bool,
}

impl<'l, T> CartesianProduct<'l, T> {
    /// Creates the product iterator.
    pub fn new(lists: &'l [Vec<T>]) -> Self {
        let done = lists.is_empty() || lists.iter().any(Vec::is_empty);
        Self {
            lists,
            indices: vec![0; lists.len()],
            done,
        }
    }

    /// Total number of tuples, saturating on overflow.
    pub fn total(&self) -> usize {
        if self.lists.is_empty() {
            return 0;
        }
        self.lists
            .iter()
            .fold(1usize, |acc, l| acc.saturating_mul(l.len()))
    }

    /// Advances the odometer. Returns false once every tuple was produced.
    fn advance(&mut self) -> bool {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.lists[pos].len() {
                return true;
            }
            self.indices[pos] = 0;
        }
        false
    }
}

impl<'l, T> Iterator for CartesianProduct<'l, T> {
    type Item = Vec<&'l T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let lists = self.lists;
        let tuple = self
            .indices
            .iter()
            .zip(lists)
            .map(|(&i, list)| &list[i])
            .collect();

        if !self.advance() {
            self.done = true;
        }
        Some(tuple)
    }
}

/// Per-course combination lists, in input order.
pub fn combinations_by_course(courses: &[Course]) -> Vec<Vec<Vec<SelectedCourse<'_>>>> {
    courses.iter().map(course_combinations).collect()
}

/// Flattens one product tuple into a candidate schedule.
pub fn flatten<'a>(tuple: &[&Vec<SelectedCourse<'a>>]) -> Vec<SelectedCourse<'a>> {
    tuple.iter().flat_map(|combo| combo.iter().copied()).collect()
}

/// Every candidate schedule for the given courses.
///
/// Empty input yields an empty list. A course without lectures makes
/// the whole product empty.
pub fn generate_all_combinations(courses: &[Course]) -> Vec<Vec<SelectedCourse<'_>>> {
    if courses.is_empty() {
        return Vec::new();
    }

    let by_course = combinations_by_course(courses);
    CartesianProduct::new(&by_course)
        .map(|tuple| flatten(&tuple))
        .collect()
}
