//! Section model.
//!
//! A section is one offering of a course within an academic period: a
//! label (e.g. "A", "B"), and the weekly time slots it meets. Sections
//! are plain immutable value objects supplied by the caller — the engine
//! never loads or stores them.

use serde::{Deserialize, Serialize};

use super::TimeSlot;

/// Course identifier (plan-course database id).
pub type CourseId = i64;

/// Section identifier (database id).
pub type SectionId = i64;

/// One offering of a course in a period.
///
/// Invariant: `slots` contains no duplicate `(weekday, start, end)` triple
/// and no same-weekday overlap. The persistence layer enforces this with
/// [`crate::validation::validate_slots`] whenever the slot list is written;
/// the conflict detector assumes it holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Unique section identifier.
    pub id: SectionId,
    /// Course this section offers.
    pub course_id: CourseId,
    /// Section label within the course (e.g. "A", "B").
    pub label: String,
    /// Academic period this section is open in (e.g. "2025-I").
    pub period: String,
    /// Weekly meeting slots.
    pub slots: Vec<TimeSlot>,
}

impl Section {
    /// Creates a section with no slots.
    pub fn new(id: SectionId, course_id: CourseId) -> Self {
        Self {
            id,
            course_id,
            label: String::new(),
            period: String::new(),
            slots: Vec::new(),
        }
    }

    /// Sets the section label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Sets the academic period.
    pub fn with_period(mut self, period: impl Into<String>) -> Self {
        self.period = period.into();
        self
    }

    /// Adds a meeting slot.
    pub fn with_slot(mut self, slot: TimeSlot) -> Self {
        self.slots.push(slot);
        self
    }

    /// Slots sorted by `(weekday, start)` ascending.
    ///
    /// This is the display/scan order used throughout the engine.
    pub fn slots_sorted(&self) -> Vec<TimeSlot> {
        let mut slots = self.slots.clone();
        slots.sort_by_key(|s| (s.weekday, s.start));
        slots
    }

    /// Human-readable slot list, e.g. `"MON 08:00-10:00, WED 08:00-10:00"`.
    pub fn slot_summary(&self) -> String {
        self.slots_sorted()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of weekly slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }
}
