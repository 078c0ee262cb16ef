//! Domain models for section scheduling.
//!
//! Plain immutable value types supplied by the caller: weekdays, weekly
//! time slots, and course sections. The engine computes over them but
//! never loads, stores, or mutates persisted data.

mod section;
mod slot;
mod weekday;

pub use section::{CourseId, Section, SectionId};
pub use slot::{parse_time, TimeParseError, TimeSlot};
pub use weekday::Weekday;
