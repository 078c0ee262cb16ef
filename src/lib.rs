//! Section schedule conflict detection and enrollment resolution.
//!
//! The algorithmic core of an academic-administration system's section
//! scheduling: given course sections with weekly time slots, it validates
//! a section's own slot list, finds every overlap between the sections a
//! student wants to take, and proposes alternate sections that clear a
//! detected clash.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Weekday`, `TimeSlot`, `Section`
//! - **`validation`**: One section's slot-list integrity (duplicates, self-overlaps)
//! - **`conflict`**: Cross-section overlap detection (sorted adjacent-pair sweep)
//! - **`enrollment`**: Pick-one-section-per-course validation and
//!   alternate-section suggestions
//!
//! # Architecture
//!
//! Pure computation only: no I/O, no database access, no logging, no
//! internal concurrency. Sections are supplied by the caller through a
//! [`enrollment::CandidateSupplier`], and every call recomputes from that
//! input, so concurrent calls are independent and results never go stale.
//!
//! # Example
//!
//! ```
//! use schedule_conflicts::enrollment::{EnrollmentResolver, ValidationOutcome};
//! use schedule_conflicts::models::{CourseId, Section, TimeSlot, Weekday};
//!
//! // In production this closure wraps the section query for the period.
//! let supplier = |course_id: CourseId, _period: &str| {
//!     vec![Section::new(course_id * 10, course_id)
//!         .with_label("A")
//!         .with_period("2025-I")
//!         .with_slot(TimeSlot::from_hhmm(Weekday::Mon, "08:00", "10:00").unwrap())]
//! };
//!
//! let resolver = EnrollmentResolver::new();
//! // Both courses only offer the same MON 08:00-10:00 block.
//! let outcome = resolver.validate(&[1, 2], "2025-I", &supplier);
//! assert!(matches!(outcome, ValidationOutcome::ScheduleConflicts(_)));
//! // No alternates exist, so no suggestions either.
//! assert!(resolver.suggest(&[1, 2], "2025-I", &supplier).is_empty());
//! ```

pub mod conflict;
pub mod enrollment;
pub mod models;
pub mod validation;
