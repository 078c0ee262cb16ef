//! Slot-set validation.
//!
//! Checks that one section's own slot list is internally consistent
//! before it is written. Detects:
//! - Inverted ranges (`start >= end`)
//! - Duplicate `(weekday, start, end)` triples
//! - Same-weekday overlaps within the section
//!
//! Runs at write time (create or full replace of a section's schedule),
//! not on reads. Cross-section overlaps are a separate concern — see
//! [`crate::conflict`].

use chrono::NaiveTime;
use thiserror::Error;

use crate::models::{TimeSlot, Weekday};

/// A violation found in a section's own slot list.
///
/// Always carries the offending weekday and time range(s); never
/// auto-corrected or dropped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// A slot's start is not strictly before its end.
    #[error("invalid slot on {weekday}: start {} is not before end {}", .start.format("%H:%M"), .end.format("%H:%M"))]
    InvalidRange {
        weekday: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    },

    /// Two slots share the identical `(weekday, start, end)` triple.
    #[error("duplicate slot on {weekday}: {}-{}", .start.format("%H:%M"), .end.format("%H:%M"))]
    DuplicateSlot {
        weekday: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    },

    /// Two slots on the same weekday overlap.
    #[error("overlapping slots on {}: {first} and {second}", .first.weekday)]
    OverlappingSlot { first: TimeSlot, second: TimeSlot },
}

/// Validates one section's slot list.
///
/// # Algorithm
/// 1. Reject any slot with `start >= end`, scanning in input order.
/// 2. Group slots by weekday; within each weekday sort by `start` ascending.
/// 3. For each adjacent sorted pair: identical ranges fail as
///    [`SlotError::DuplicateSlot`], otherwise `first.end > second.start`
///    fails as [`SlotError::OverlappingSlot`].
///
/// Touching boundaries (`first.end == second.start`) are allowed — the
/// overlap rule is strict.
///
/// Returns the first violation found. Weekdays are scanned ascending and
/// slots ascending by start, so the reported violation is deterministic
/// for identical input regardless of input order (step 1 aside).
pub fn validate_slots(slots: &[TimeSlot]) -> Result<(), SlotError> {
    for slot in slots {
        if slot.start >= slot.end {
            return Err(SlotError::InvalidRange {
                weekday: slot.weekday,
                start: slot.start,
                end: slot.end,
            });
        }
    }

    for weekday in Weekday::ALL {
        let mut day_slots: Vec<&TimeSlot> =
            slots.iter().filter(|s| s.weekday == weekday).collect();
        day_slots.sort_by_key(|s| s.start);

        for pair in day_slots.windows(2) {
            let (first, second) = (pair[0], pair[1]);
            if first.same_range(second) {
                return Err(SlotError::DuplicateSlot {
                    weekday,
                    start: first.start,
                    end: first.end,
                });
            }
            if first.end > second.start {
                return Err(SlotError::OverlappingSlot {
                    first: *first,
                    second: *second,
                });
            }
        }
    }

    Ok(())
}
