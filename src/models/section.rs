//! Section model.
//!
//! A section is one offering of a course: a lecture, tutorial, lab or
//! seminar with its own meeting times and capacity.
//!
//! # Dependent Sections
//! Tutorials and labs hang off a lecture. The link is explicit:
//! `ParentLecture::Specific(id)` pairs the section with one lecture,
//! `ParentLecture::AnyLecture` pairs it with every lecture of the course.
//! Catalogs that do not encode linkage produce `AnyLecture` sections.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Kind of section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionType {
    Lecture,
    Tutorial,
    Lab,
    Seminar,
}

impl SectionType {
    /// Whether sections of this kind are paired with a lecture.
    ///
    /// Tutorials and labs are dependent; seminars stand alone in
    /// selection maintenance but still pair with lectures during
    /// combination generation (every non-lecture section does).
    pub fn is_dependent(self) -> bool {
        matches!(self, SectionType::Tutorial | SectionType::Lab)
    }
}

/// The lecture a dependent section belongs to.
///
/// Serialized as an optional lecture id: absent or `null` is
/// `AnyLecture`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum ParentLecture {
    /// Pairs with the lecture whose `section_id` equals this id.
    Specific(String),
    /// Pairs with any lecture of the same course.
    #[default]
    AnyLecture,
}

impl ParentLecture {
    /// Whether this link accepts the given lecture.
    pub fn matches(&self, lecture_id: &str) -> bool {
        match self {
            ParentLecture::Specific(id) => id == lecture_id,
            ParentLecture::AnyLecture => true,
        }
    }

    /// Whether this is `AnyLecture`.
    pub fn is_any(&self) -> bool {
        matches!(self, ParentLecture::AnyLecture)
    }

    /// The explicit lecture id, if any.
    pub fn lecture_id(&self) -> Option<&str> {
        match self {
            ParentLecture::Specific(id) => Some(id),
            ParentLecture::AnyLecture => None,
        }
    }
}

impl From<Option<String>> for ParentLecture {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(id) => ParentLecture::Specific(id),
            None => ParentLecture::AnyLecture,
        }
    }
}

impl From<ParentLecture> for Option<String> {
    fn from(value: ParentLecture) -> Self {
        match value {
            ParentLecture::Specific(id) => Some(id),
            ParentLecture::AnyLecture => None,
        }
    }
}

/// One offering of a course.
///
/// Capacity fields are informational; generation never reads or
/// changes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section identifier, unique within its course.
    pub section_id: String,
    /// Lecture, tutorial, lab or seminar.
    pub section_type: SectionType,
    /// Weekly meeting windows (order irrelevant).
    #[serde(default)]
    pub time_slots: Vec<TimeSlot>,
    /// Lecture this section depends on (non-lecture sections only).
    #[serde(default, skip_serializing_if = "ParentLecture::is_any")]
    pub parent_lecture: ParentLecture,
    /// Seat quota.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quota: Option<u32>,
    /// Enrolled students.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enrolled: Option<u32>,
    /// Seats still open, as reported by the catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seats_remaining: Option<i32>,
}

impl Section {
    /// Creates a section with no time slots.
    pub fn new(section_id: impl Into<String>, section_type: SectionType) -> Self {
        Self {
            section_id: section_id.into(),
            section_type,
            time_slots: Vec::new(),
            parent_lecture: ParentLecture::AnyLecture,
            quota: None,
            enrolled: None,
            seats_remaining: None,
        }
    }

    /// Creates a lecture section.
    pub fn lecture(section_id: impl Into<String>) -> Self {
        Self::new(section_id, SectionType::Lecture)
    }

    /// Creates a tutorial section.
    pub fn tutorial(section_id: impl Into<String>) -> Self {
        Self::new(section_id, SectionType::Tutorial)
    }

    /// Creates a lab section.
    pub fn lab(section_id: impl Into<String>) -> Self {
        Self::new(section_id, SectionType::Lab)
    }

    /// Adds a time slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.time_slots.push(slot);
        self
    }

    /// Links this section to a specific lecture.
    pub fn with_parent(mut self, lecture_id: impl Into<String>) -> Self {
        self.parent_lecture = ParentLecture::Specific(lecture_id.into());
        self
    }

    /// Sets the capacity figures.
    pub fn with_capacity(mut self, quota: u32, enrolled: u32) -> Self {
        self.quota = Some(quota);
        self.enrolled = Some(enrolled);
        self
    }

    /// Sets the reported remaining seats.
    pub fn with_seats_remaining(mut self, seats: i32) -> Self {
        self.seats_remaining = Some(seats);
        self
    }

    /// Whether this is a lecture section.
    #[inline]
    pub fn is_lecture(&self) -> bool {
        self.section_type == SectionType::Lecture
    }

    /// Whether a seat is open.
    ///
    /// Uses `seats_remaining` when reported, otherwise compares
    /// `enrolled` to `quota`. Unknown capacity counts as open.
    pub fn has_available_seats(&self) -> bool {
        if let Some(seats) = self.seats_remaining {
            return seats > 0;
        }
        match (self.quota, self.enrolled) {
            (Some(quota), Some(enrolled)) => enrolled < quota,
            _ => true,
        }
    }
}
