//! Course timetable generation.
//!
//! Given a set of courses, each offering lectures and optional
//! tutorials/labs, enumerates every conflict-free way to take one section
//! combination per course, scores each timetable under a student
//! preference, and returns the best ones.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Course`, `Section`, `TimeSlot`,
//!   `SelectedCourse`, `GeneratedSchedule`
//! - **`conflict`**: Time-slot overlap and conflict reporting
//! - **`generator`**: Per-course combinations and the Cartesian product
//! - **`scoring`**: Schedule metrics and preference heuristics
//! - **`scheduler`**: The generate → filter → score → rank pipeline
//! - **`selection`**: Helpers for editing a selection by hand
//! - **`validation`**: Input integrity checks (duplicate IDs, bad times, parent refs)
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{Course, DayOfWeek, Section, TimeSlot};
//! use u_timetable::{generate_schedules, GenerationOptions, Preference};
//!
//! let courses = vec![
//!     Course::new("CSCI1130")
//!         .with_section(Section::lecture("A").with_slot(TimeSlot::new(DayOfWeek::Monday, "09:00", "10:15")))
//!         .with_section(
//!             Section::tutorial("AT01")
//!                 .with_parent("A")
//!                 .with_slot(TimeSlot::new(DayOfWeek::Friday, "11:00", "12:00")),
//!         ),
//!     Course::new("MATH1510")
//!         .with_section(Section::lecture("A").with_slot(TimeSlot::new(DayOfWeek::Tuesday, "14:00", "15:15"))),
//! ];
//!
//! let schedules = generate_schedules(&courses, &GenerationOptions::ranked(Preference::DaysOff));
//! assert_eq!(schedules.len(), 1);
//! assert_eq!(schedules[0].sections.len(), 3);
//! assert_eq!(schedules[0].metadata.free_days, 2);
//! ```
//!
//! # Logging
//!
//! Uses `tracing`. The pipeline emits a span per call with candidate and
//! survivor counts at `debug`; truncation and malformed data are reported
//! at `warn`. Install any subscriber to see them.

pub mod conflict;
pub mod error;
pub mod generator;
pub mod models;
pub mod scheduler;
pub mod scoring;
pub mod selection;
pub mod validation;

pub use error::{Result, TimetableError};
pub use scheduler::{generate_schedules, GenerationOptions, ScheduleGenerator};
pub use scoring::Preference;
