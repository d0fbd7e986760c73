//! Selected section model.

use serde::Serialize;

use super::{Course, Section};

/// One chosen section of one course.
///
/// Borrows from the caller's catalog; a full schedule is a list of
/// these, one lecture plus at most one dependent section per course.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedCourse<'a> {
    /// Owning course.
    pub course: &'a Course,
    /// The chosen section of `course`.
    #[serde(rename = "selectedSection")]
    pub section: &'a Section,
}

impl<'a> SelectedCourse<'a> {
    /// Pairs a course with one of its sections.
    pub fn new(course: &'a Course, section: &'a Section) -> Self {
        Self { course, section }
    }

    /// Course code of the owning course.
    #[inline]
    pub fn course_code(&self) -> &'a str {
        &self.course.course_code
    }

    /// Whether both entries belong to the same course.
    #[inline]
    pub fn same_course(&self, other: &SelectedCourse<'_>) -> bool {
        self.course.course_code == other.course.course_code
    }
}

impl PartialEq for SelectedCourse<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_course(other)
            && self.section.section_type == other.section.section_type
            && self.section.section_id == other.section.section_id
    }
}

impl Eq for SelectedCourse<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SectionType;

    #[test]
    fn test_equality_by_identity() {
        let course = Course::new("A")
            .with_section(Section::lecture("L1"))
            .with_section(Section::tutorial("L1"));
        let lecture = SelectedCourse::new(&course, &course.sections[0]);
        let tutorial = SelectedCourse::new(&course, &course.sections[1]);
        assert_eq!(lecture, lecture);
        assert_ne!(lecture, tutorial);
        assert!(lecture.same_course(&tutorial));
        assert_eq!(tutorial.section.section_type, SectionType::Tutorial);
    }

    #[test]
    fn test_wire_shape() {
        let course = Course::new("A").with_section(Section::lecture("L1"));
        let json = serde_json::to_value(SelectedCourse::new(&course, &course.sections[0])).unwrap();
        assert_eq!(json["course"]["courseCode"], "A");
        assert_eq!(json["selectedSection"]["sectionId"], "L1");
        assert!(json.get("section").is_none());
    }
}
