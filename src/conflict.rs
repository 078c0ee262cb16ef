//! Cross-section schedule conflict detection.
//!
//! Finds every pairwise overlap between the slots of different sections.
//! Input sections are assumed individually slot-valid (see
//! [`crate::validation`]) — a section's own internal overlaps are a write
//! error, not a conflict.
//!
//! # Algorithm
//! Per weekday, collect `(start, end, section_id)` events from every slot
//! of every section, sort by `start`, and walk adjacent pairs. Two events
//! conflict iff `a.end > b.start && b.end > a.start` (strict — touching
//! boundaries are fine).
//!
//! Checking only adjacent pairs is sufficient: if sorted events e1 ≤ e2 ≤ e3
//! (by start) have e1 and e2 non-overlapping, then
//! `e1.end <= e2.start <= e3.start`, so e1 cannot overlap e3 either. By
//! induction no non-adjacent pair can overlap unless an enclosing adjacent
//! pair does. Any rewrite must keep this property.
//!
//! # Complexity
//! O(N log N) in total slot count, from the per-weekday sorts.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{Section, SectionId, Weekday};

/// A detected overlap between slots of two different sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    /// Day the overlap occurs on.
    pub weekday: Weekday,
    /// First section of the pair (earlier start in scan order).
    pub section_a: SectionId,
    /// Second section of the pair.
    pub section_b: SectionId,
    /// Human-readable description.
    pub message: String,
}

impl Conflict {
    fn new(weekday: Weekday, section_a: SectionId, section_b: SectionId) -> Self {
        let message =
            format!("schedule clash on {weekday} between sections {section_a} and {section_b}");
        Self {
            weekday,
            section_a,
            section_b,
            message,
        }
    }
}

/// Detects every slot overlap between different sections.
///
/// Conflicts are returned in scan order — weekday ascending, then start
/// ascending — so identical input always yields an identical list.
/// Adjacent events of the *same* section are skipped; intra-section
/// overlaps are excluded at write time and out of scope here.
///
/// Pure function: no I/O, no shared state.
pub fn detect(sections: &[Section]) -> Vec<Conflict> {
    let mut by_day: BTreeMap<Weekday, Vec<(NaiveTime, NaiveTime, SectionId)>> = BTreeMap::new();
    for section in sections {
        for slot in &section.slots {
            by_day
                .entry(slot.weekday)
                .or_default()
                .push((slot.start, slot.end, section.id));
        }
    }

    let mut conflicts = Vec::new();
    for (weekday, mut events) in by_day {
        events.sort_by_key(|&(start, _, _)| start);

        for pair in events.windows(2) {
            let (a_start, a_end, a_id) = pair[0];
            let (b_start, b_end, b_id) = pair[1];
            if a_id == b_id {
                continue;
            }
            if a_end > b_start && b_end > a_start {
                conflicts.push(Conflict::new(weekday, a_id, b_id));
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlot;

    fn section(id: SectionId, course_id: i64, slots: &[(Weekday, &str, &str)]) -> Section {
        let mut sec = Section::new(id, course_id).with_period("2025-I");
        for &(day, start, end) in slots {
            sec = sec.with_slot(TimeSlot::from_hhmm(day, start, end).unwrap());
        }
        sec
    }

    /// Sorted `(weekday, a, b)` triples, with each pair normalized, for
    /// order-insensitive comparison.
    fn normalized(conflicts: &[Conflict]) -> Vec<(Weekday, SectionId, SectionId)> {
        let mut keys: Vec<_> = conflicts
            .iter()
            .map(|c| {
                (
                    c.weekday,
                    c.section_a.min(c.section_b),
                    c.section_a.max(c.section_b),
                )
            })
            .collect();
        keys.sort();
        keys
    }

    #[test]
    fn test_no_sections_no_conflicts() {
        assert!(detect(&[]).is_empty());
        let lone = section(1, 1, &[(Weekday::Mon, "08:00", "10:00")]);
        assert!(detect(&[lone]).is_empty());
    }

    #[test]
    fn test_basic_overlap() {
        let a = section(1, 10, &[(Weekday::Mon, "08:00", "10:00")]);
        let b = section(2, 20, &[(Weekday::Mon, "09:00", "11:00")]);

        let conflicts = detect(&[a, b]);
        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].weekday, Weekday::Mon);
        assert_eq!(conflicts[0].section_a, 1);
        assert_eq!(conflicts[0].section_b, 2);
        assert_eq!(
            conflicts[0].message,
            "schedule clash on MON between sections 1 and 2"
        );
    }

    #[test]
    fn test_touching_boundary_is_not_conflict() {
        let a = section(1, 10, &[(Weekday::Mon, "08:00", "10:00")]);
        let b = section(2, 20, &[(Weekday::Mon, "10:00", "12:00")]);
        assert!(detect(&[a, b]).is_empty());
    }

    #[test]
    fn test_different_weekdays_no_conflict() {
        let a = section(1, 10, &[(Weekday::Mon, "08:00", "10:00")]);
        let b = section(2, 20, &[(Weekday::Tue, "08:00", "10:00")]);
        assert!(detect(&[a, b]).is_empty());
    }

    #[test]
    fn test_input_order_does_not_change_membership() {
        let a = section(1, 10, &[(Weekday::Mon, "08:00", "10:00")]);
        let b = section(2, 20, &[(Weekday::Mon, "09:00", "11:00")]);
        let c = section(3, 30, &[(Weekday::Wed, "14:00", "16:00")]);

        let forward = detect(&[a.clone(), b.clone(), c.clone()]);
        let reversed = detect(&[c, b, a]);
        assert_eq!(normalized(&forward), normalized(&reversed));
    }

    #[test]
    fn test_adjacent_pairs_find_chain_overlaps() {
        // Sorted by start: I1=[08:00,09:00), I2=[08:30,11:00), I3=[10:00,10:30).
        // I1-I2 and I2-I3 overlap; I1-I3 do not (09:00 <= 10:00).
        let i1 = section(1, 10, &[(Weekday::Mon, "08:00", "09:00")]);
        let i2 = section(2, 20, &[(Weekday::Mon, "08:30", "11:00")]);
        let i3 = section(3, 30, &[(Weekday::Mon, "10:00", "10:30")]);

        let conflicts = detect(&[i1, i2, i3]);
        assert_eq!(
            normalized(&conflicts),
            vec![(Weekday::Mon, 1, 2), (Weekday::Mon, 2, 3)]
        );
    }

    #[test]
    fn test_same_section_adjacent_events_skipped() {
        // One section meeting twice on MON (back-to-back, valid), another
        // overlapping the second block only.
        let a = section(
            1,
            10,
            &[
                (Weekday::Mon, "08:00", "10:00"),
                (Weekday::Mon, "10:00", "12:00"),
            ],
        );
        let b = section(2, 20, &[(Weekday::Mon, "11:00", "13:00")]);

        let conflicts = detect(&[a, b]);
        assert_eq!(normalized(&conflicts), vec![(Weekday::Mon, 1, 2)]);
    }

    #[test]
    fn test_scan_order_is_weekday_then_start() {
        let a = section(
            1,
            10,
            &[
                (Weekday::Wed, "08:00", "10:00"),
                (Weekday::Mon, "14:00", "16:00"),
            ],
        );
        let b = section(
            2,
            20,
            &[
                (Weekday::Wed, "09:00", "11:00"),
                (Weekday::Mon, "15:00", "17:00"),
            ],
        );

        let conflicts = detect(&[a, b]);
        assert_eq!(conflicts.len(), 2);
        assert_eq!(conflicts[0].weekday, Weekday::Mon);
        assert_eq!(conflicts[1].weekday, Weekday::Wed);
    }

    #[test]
    fn test_deterministic_for_identical_input() {
        let sections = vec![
            section(1, 10, &[(Weekday::Mon, "08:00", "10:00")]),
            section(2, 20, &[(Weekday::Mon, "09:00", "11:00")]),
            section(3, 30, &[(Weekday::Mon, "09:30", "12:00")]),
        ];
        assert_eq!(detect(&sections), detect(&sections));
    }

    #[test]
    fn test_conflict_wire_shape() {
        let a = section(1, 10, &[(Weekday::Mon, "08:00", "10:00")]);
        let b = section(2, 20, &[(Weekday::Mon, "09:00", "11:00")]);
        let json = serde_json::to_value(&detect(&[a, b])[0]).unwrap();
        assert_eq!(json["weekday"], "MON");
        assert_eq!(json["section_a"], 1);
        assert_eq!(json["section_b"], 2);
        assert!(json["message"].as_str().unwrap().contains("MON"));
    }
}
