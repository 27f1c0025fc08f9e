//! Defensive schedule validation.
//!
//! Re-checks a solved schedule against every constraint in the store,
//! independently of how the search constructed it. This catches
//! propagation or search bugs instead of trusting them; a violation here
//! is an internal fault, never a user error.

use thiserror::Error;

use crate::models::{ActivityCatalog, Constraint, ConstraintStore, Schedule};
use crate::solver::domain::Day;

/// A constraint the solved schedule fails to satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Violation {
    /// Which rule was broken.
    pub kind: ViolationKind,
    /// Human-readable description naming the activities involved.
    pub message: String,
}

impl Violation {
    fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Classification of schedule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// An activity has no assignment, or an assignment names no activity.
    MissingAssignment,
    /// `end != start + duration`.
    DurationMismatch,
    /// An interval leaves the day window.
    OutsideDay,
    /// Two intervals overlap.
    Overlap,
    /// A precedence gap is not honored.
    PrecedenceViolated,
    /// A fixed-start activity is not at its pinned time.
    FixedStartViolated,
}

/// Checks the schedule against the catalog, the day window, and every
/// constraint in the store. Returns the first violation found.
pub fn validate_schedule(
    schedule: &Schedule,
    catalog: &ActivityCatalog,
    store: &ConstraintStore,
    day: Day,
) -> Result<(), Violation> {
    // Every activity scheduled exactly once, with consistent arithmetic.
    for act in catalog.iter() {
        let assignment = schedule.assignment_for(&act.id).ok_or_else(|| {
            Violation::new(
                ViolationKind::MissingAssignment,
                format!("activity '{}' has no assignment", act.id),
            )
        })?;

        if assignment.end != assignment.start + act.duration {
            return Err(Violation::new(
                ViolationKind::DurationMismatch,
                format!(
                    "activity '{}' spans {} minutes, expected {}",
                    act.id,
                    assignment.duration(),
                    act.duration
                ),
            ));
        }

        if assignment.start < day.start || assignment.end > day.end {
            return Err(Violation::new(
                ViolationKind::OutsideDay,
                format!(
                    "activity '{}' at [{}, {}] leaves the day window [{}, {}]",
                    act.id, assignment.start, assignment.end, day.start, day.end
                ),
            ));
        }
    }

    if schedule.len() != catalog.len() {
        return Err(Violation::new(
            ViolationKind::MissingAssignment,
            format!(
                "schedule has {} assignments for {} activities",
                schedule.len(),
                catalog.len()
            ),
        ));
    }

    for constraint in store.iter() {
        match constraint {
            Constraint::NoOverlapAll => {
                // Assignments are start-ordered, so adjacent disjointness
                // covers all pairs; check all pairs anyway — this is the
                // independent re-check, not the construction.
                let assignments = schedule.assignments();
                for i in 0..assignments.len() {
                    for j in (i + 1)..assignments.len() {
                        if assignments[i].overlaps(&assignments[j]) {
                            return Err(Violation::new(
                                ViolationKind::Overlap,
                                format!(
                                    "activities '{}' and '{}' overlap",
                                    assignments[i].activity_id, assignments[j].activity_id
                                ),
                            ));
                        }
                    }
                }
            }
            Constraint::Precedence {
                before,
                after,
                min_gap,
            } => {
                let b = schedule.assignment_for(before);
                let a = schedule.assignment_for(after);
                if let (Some(b), Some(a)) = (b, a) {
                    if a.start < b.end + min_gap {
                        return Err(Violation::new(
                            ViolationKind::PrecedenceViolated,
                            format!(
                                "'{after}' starts at {} but must wait until {} \
                                 ('{before}' end {} + gap {})",
                                a.start,
                                b.end + min_gap,
                                b.end,
                                min_gap
                            ),
                        ));
                    }
                }
            }
            Constraint::FixedWindow { activity, start } => {
                if let Some(a) = schedule.assignment_for(activity) {
                    if a.start != *start {
                        return Err(Violation::new(
                            ViolationKind::FixedStartViolated,
                            format!(
                                "'{activity}' starts at {} instead of its pinned {}",
                                a.start, start
                            ),
                        ));
                    }
                }
            }
        }
    }

    Ok(())
}
