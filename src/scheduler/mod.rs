//! Schedule generation and ranking.
//!
//! Composes the generator, the conflict filter and the scorer into one
//! call: courses in, ranked conflict-free timetables out.
//!
//! # Configuration
//!
//! [`GenerationOptions`] carries the preference and the caps. It
//! deserializes from the caller's request JSON; unknown preference names
//! degrade to unranked output instead of failing.
//!
//! # Determinism
//!
//! Candidates are enumerated in a fixed order (first course varies
//! slowest) and sorted stably, so identical input gives identical output.

mod options;
mod ranker;

pub use options::{GenerationOptions, DEFAULT_MAX_RESULTS};
pub use ranker::{generate_schedules, ScheduleGenerator};
