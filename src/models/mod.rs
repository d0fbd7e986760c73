//! Timetable domain models.
//!
//! Catalog types supplied by the caller (`Course`, `Section`, `TimeSlot`)
//! and the transient types produced during generation
//! (`SelectedCourse`, `GeneratedSchedule`).
//!
//! # Ownership
//!
//! Catalog data is borrowed for the duration of a call. Selections and
//! generated schedules hold references into it and never copy sections.

mod course;
mod schedule;
mod section;
mod selection;
mod time_slot;

pub use course::Course;
pub use schedule::{GeneratedSchedule, ScheduleMetadata};
pub use section::{ParentLecture, Section, SectionType};
pub use selection::SelectedCourse;
pub use time_slot::{ClockTime, DayOfWeek, TimeSlot};
