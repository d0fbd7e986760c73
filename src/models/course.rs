//! Course model.
//!
//! A course owns its sections. It is read-only for the whole of a
//! generation call.

use serde::{Deserialize, Serialize};

use super::{Section, SectionType};

/// A course with its offered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Course code (e.g., "CSCI3100"). Identifies the course.
    pub course_code: String,
    /// Human-readable title.
    #[serde(default)]
    pub course_name: String,
    /// Offering department.
    #[serde(default)]
    pub department: String,
    /// Credit units. `None` counts as zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<f64>,
    /// Academic term (e.g., "2025-26-T1").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Career level (e.g., "Undergraduate").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,
    /// Offered sections.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Course {
    /// Creates a course with no sections.
    pub fn new(course_code: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            course_name: String::new(),
            department: String::new(),
            credits: None,
            term: None,
            career: None,
            sections: Vec::new(),
        }
    }

    /// Sets the course title.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.course_name = name.into();
        self
    }

    /// Sets the department.
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Sets the credit units.
    pub fn with_credits(mut self, credits: f64) -> Self {
        self.credits = Some(credits);
        self
    }

    /// Sets the term.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    /// Adds a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Lecture sections, in catalog order.
    pub fn lectures(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.is_lecture())
    }

    /// Sections of one kind, in catalog order.
    pub fn sections_of_type(&self, section_type: SectionType) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(move |s| s.section_type == section_type)
    }

    /// Finds a section by ID.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.section_id == section_id)
    }

    /// Whether the course has a lecture with the given ID.
    pub fn has_lecture(&self, lecture_id: &str) -> bool {
        self.lectures().any(|s| s.section_id == lecture_id)
    }
}
