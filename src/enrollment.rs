//! Enrollment validation and alternate-section suggestions.
//!
//! Orchestrates the conflict detector for one student's enrollment
//! attempt: pick one open section per desired course, check the picks
//! against each other, and — when they clash — search each implicated
//! course's alternates for a substitution that clears its conflicts.
//!
//! The engine is pure: its only dependency is a [`CandidateSupplier`]
//! injected by the caller (typically a closure over a database query).
//! Every call recomputes from the supplied candidates, so results always
//! reflect the caller's current view of section data.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::conflict::{self, Conflict};
use crate::models::{CourseId, Section, SectionId, TimeSlot};

/// Source of open sections for a course in a period.
///
/// The one input boundary of the engine. Implementations must return
/// sections that are already individually slot-valid
/// ([`crate::validation::validate_slots`] applied at write time).
/// The resolver re-sorts candidates itself, so storage order is not
/// load-bearing.
pub trait CandidateSupplier {
    /// Open sections offering `course_id` in `period`.
    fn open_sections(&self, course_id: CourseId, period: &str) -> Vec<Section>;
}

impl<F> CandidateSupplier for F
where
    F: Fn(CourseId, &str) -> Vec<Section>,
{
    fn open_sections(&self, course_id: CourseId, period: &str) -> Vec<Section> {
        self(course_id, period)
    }
}

/// The tentative one-section-per-course pick under evaluation.
///
/// Entries follow the caller's desired-course order. Ephemeral: built
/// fresh inside each `validate`/`suggest` call.
#[derive(Debug, Clone)]
pub struct CandidateSchedule {
    entries: Vec<(CourseId, Section)>,
}

impl CandidateSchedule {
    /// Chosen section for a course, if any.
    pub fn chosen(&self, course_id: CourseId) -> Option<&Section> {
        self.entries
            .iter()
            .find(|(cid, _)| *cid == course_id)
            .map(|(_, sec)| sec)
    }

    /// Chosen sections in desired-course order.
    pub fn sections(&self) -> Vec<Section> {
        self.entries.iter().map(|(_, sec)| sec.clone()).collect()
    }

    /// `(course_id, section)` entries in desired-course order.
    pub fn entries(&self) -> &[(CourseId, Section)] {
        &self.entries
    }
}

/// Result of validating a desired course list.
///
/// Missing sections and schedule conflicts are mutually exclusive:
/// a missing course short-circuits before any conflict computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// Every course resolved to a section and nothing overlaps.
    Ok,
    /// At least one desired course has no open section in the period.
    /// Carries the unsatisfied course ids in desired order.
    MissingSections(Vec<CourseId>),
    /// All courses resolved but the chosen sections overlap.
    ScheduleConflicts(Vec<Conflict>),
}

impl ValidationOutcome {
    /// Whether the enrollment attempt can proceed.
    #[inline]
    pub fn is_ok(&self) -> bool {
        matches!(self, ValidationOutcome::Ok)
    }
}

// Wire shapes: {"ok": true} | {"missing_course_ids": [...]} | {"conflicts": [...]}.
// Output-only; the engine never consumes its own outcome.
impl Serialize for ValidationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            ValidationOutcome::Ok => map.serialize_entry("ok", &true)?,
            ValidationOutcome::MissingSections(ids) => {
                map.serialize_entry("missing_course_ids", ids)?
            }
            ValidationOutcome::ScheduleConflicts(conflicts) => {
                map.serialize_entry("conflicts", conflicts)?
            }
        }
        map.end()
    }
}

/// A proposed section substitution that clears one course's conflicts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    /// Course the substitution applies to.
    pub course_id: CourseId,
    /// Section to enroll in instead of the currently chosen one.
    pub proposed_section_id: SectionId,
    /// Meeting slots of the proposed section, sorted by `(weekday, start)`.
    pub slots: Vec<TimeSlot>,
}

/// Validates desired course lists and searches for conflict-free
/// alternates. Stateless: every call recomputes from the supplier.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnrollmentResolver;

impl EnrollmentResolver {
    /// Creates a resolver.
    pub fn new() -> Self {
        Self
    }

    /// Validates one enrollment attempt.
    ///
    /// For each desired course (in caller order) the **first** candidate
    /// under the [`candidate_order`] ordering is chosen. Courses with no
    /// open section fail fast as [`ValidationOutcome::MissingSections`]
    /// before any conflict check; only a fully resolved schedule is run
    /// through the conflict detector.
    pub fn validate<S: CandidateSupplier>(
        &self,
        desired_course_ids: &[CourseId],
        period: &str,
        supplier: &S,
    ) -> ValidationOutcome {
        let candidates = self.gather_candidates(desired_course_ids, period, supplier);

        let missing: Vec<CourseId> = candidates
            .iter()
            .filter(|(_, secs)| secs.is_empty())
            .map(|(cid, _)| *cid)
            .collect();
        if !missing.is_empty() {
            return ValidationOutcome::MissingSections(missing);
        }

        let schedule = choose_first(&candidates);
        let conflicts = conflict::detect(&schedule.sections());
        if conflicts.is_empty() {
            ValidationOutcome::Ok
        } else {
            ValidationOutcome::ScheduleConflicts(conflicts)
        }
    }

    /// Searches for alternate sections that clear the detected conflicts.
    ///
    /// Intended to be called after [`Self::validate`] reported
    /// [`ValidationOutcome::ScheduleConflicts`]; with a conflict-free (or
    /// unresolvable) schedule it simply returns an empty list.
    ///
    /// For each course implicated in a conflict (visited in desired-course
    /// order), alternates are tried in candidate order while holding every
    /// *other* course's chosen section fixed; the first alternate whose
    /// trial set is conflict-free wins. A course with no workable alternate
    /// is omitted from the result — never an error.
    ///
    /// Known limitation, kept on purpose: this is a greedy single-variable
    /// swap, not a joint search. A clash that only two simultaneous
    /// substitutions could clear yields no suggestion for either course.
    pub fn suggest<S: CandidateSupplier>(
        &self,
        desired_course_ids: &[CourseId],
        period: &str,
        supplier: &S,
    ) -> Vec<Suggestion> {
        let candidates = self.gather_candidates(desired_course_ids, period, supplier);
        let schedule = choose_first(&candidates);

        let base_conflicts = conflict::detect(&schedule.sections());
        if base_conflicts.is_empty() {
            return Vec::new();
        }

        let mut suggestions = Vec::new();
        for (course_id, course_candidates) in &candidates {
            let Some(current) = schedule.chosen(*course_id) else {
                continue; // no open section, cannot be implicated
            };
            let implicated = base_conflicts
                .iter()
                .any(|c| c.section_a == current.id || c.section_b == current.id);
            if !implicated {
                continue;
            }

            let others: Vec<Section> = schedule
                .entries()
                .iter()
                .filter(|(cid, _)| cid != course_id)
                .map(|(_, sec)| sec.clone())
                .collect();

            for alternate in course_candidates.iter().filter(|s| s.id != current.id) {
                let mut trial = others.clone();
                trial.push(alternate.clone());
                if conflict::detect(&trial).is_empty() {
                    suggestions.push(Suggestion {
                        course_id: *course_id,
                        proposed_section_id: alternate.id,
                        slots: alternate.slots_sorted(),
                    });
                    break;
                }
            }
        }

        suggestions
    }

    /// Fetches and orders candidates for each desired course.
    fn gather_candidates<S: CandidateSupplier>(
        &self,
        desired_course_ids: &[CourseId],
        period: &str,
        supplier: &S,
    ) -> Vec<(CourseId, Vec<Section>)> {
        desired_course_ids
            .iter()
            .map(|&course_id| {
                let mut sections = supplier.open_sections(course_id, period);
                sections.sort_by(candidate_order);
                (course_id, sections)
            })
            .collect()
    }
}

/// The deterministic candidate ordering: `(course_id, label, id)` ascending.
///
/// Decides which section is "the chosen one" for each course (the first),
/// and therefore which conflicts surface. Mirrors persisted section
/// ordering; made explicit so results are reproducible rather than tied
/// to incidental storage order.
pub fn candidate_order(a: &Section, b: &Section) -> std::cmp::Ordering {
    (a.course_id, &a.label, a.id).cmp(&(b.course_id, &b.label, b.id))
}

/// Picks the first candidate per course. Courses with no candidates are
/// left out of the schedule.
fn choose_first(candidates: &[(CourseId, Vec<Section>)]) -> CandidateSchedule {
    let entries = candidates
        .iter()
        .filter_map(|(cid, secs)| secs.first().map(|sec| (*cid, sec.clone())))
        .collect();
    CandidateSchedule { entries }
}
