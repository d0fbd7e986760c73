//! Catalog validation.
//!
//! Checks structural integrity of courses before generation. Detects:
//! - Duplicate course codes
//! - Duplicate section IDs within a course
//! - Malformed or inverted time slots
//! - Tutorials/labs linked to a lecture the course does not offer
//! - Courses without any lecture
//!
//! Generation never calls this. A course without lectures, for example,
//! silently empties the whole result set; callers who want to report
//! that instead run [`validate_courses`] first.

use std::collections::HashSet;
use thiserror::Error;

use crate::models::{ClockTime, Course, ParentLecture};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Course the error refers to.
    pub course_code: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two courses share a code, or two sections of one course share an ID.
    DuplicateId,
    /// A time string is not `H:MM`/`HH:MM`.
    MalformedTime,
    /// A slot ends at or before its start.
    InvertedSlot,
    /// A section's parent lecture is not a lecture of the course.
    UnknownParentLecture,
    /// The course offers no lecture, so it yields no combinations.
    NoLecture,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        course_code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            course_code: course_code.into(),
            message: message.into(),
        }
    }
}

/// Validates a course catalog.
///
/// Checks:
/// 1. No duplicate course codes
/// 2. No duplicate section IDs (same ID and type) within a course
/// 3. Every time string parses
/// 4. Every slot starts before it ends
/// 5. Explicit parent links name an existing lecture
/// 6. Every course has at least one lecture
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_courses(courses: &[Course]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut codes = HashSet::new();
    for course in courses {
        if !codes.insert(course.course_code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                &course.course_code,
                format!("Duplicate course code: {}", course.course_code),
            ));
        }
        validate_course(course, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_course(course: &Course, errors: &mut Vec<ValidationError>) {
    let code = course.course_code.as_str();

    if course.lectures().next().is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::NoLecture,
            code,
            format!("Course '{code}' has no lecture section"),
        ));
    }

    let mut section_keys = HashSet::new();
    for section in &course.sections {
        if !section_keys.insert((section.section_type, section.section_id.as_str())) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                code,
                format!("Duplicate section ID in '{code}': {}", section.section_id),
            ));
        }

        if let ParentLecture::Specific(parent) = &section.parent_lecture {
            if !course.has_lecture(parent) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownParentLecture,
                    code,
                    format!(
                        "Section '{}' of '{code}' references unknown lecture '{parent}'",
                        section.section_id
                    ),
                ));
            }
        }

        for slot in &section.time_slots {
            let start = slot.start_time.parse::<ClockTime>();
            let end = slot.end_time.parse::<ClockTime>();

            for err in [&start, &end].into_iter().filter_map(|r| r.as_ref().err()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::MalformedTime,
                    code,
                    format!("Section '{}' of '{code}': {err}", section.section_id),
                ));
            }

            if let (Ok(start), Ok(end)) = (start, end) {
                if start >= end {
                    errors.push(ValidationError::new(
                        ValidationErrorKind::InvertedSlot,
                        code,
                        format!(
                            "Section '{}' of '{code}' has slot {slot} ending before it starts",
                            section.section_id
                        ),
                    ));
                }
            }
        }
    }
}
