//! Schedule (solution) model.
//!
//! A schedule maps every activity to a concrete `(start, end)` interval on
//! the single-day timeline. Produced exactly once per run by the search
//! engine and immutable afterwards.

use serde::{Deserialize, Serialize};

/// One activity's assigned interval, minutes since midnight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// The scheduled activity.
    pub activity_id: String,
    /// Assigned start time.
    pub start: i64,
    /// Assigned end time; always `start + duration`.
    pub end: i64,
}

impl Assignment {
    /// Creates an assignment.
    pub fn new(activity_id: impl Into<String>, start: i64, end: i64) -> Self {
        Self {
            activity_id: activity_id.into(),
            start,
            end,
        }
    }

    /// Interval length in minutes.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }

    /// Whether two assignments occupy overlapping time.
    ///
    /// Intervals are half-open `[start, end)`: back-to-back activities do
    /// not overlap.
    pub fn overlaps(&self, other: &Assignment) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A complete, feasible single-day schedule.
///
/// Assignments are held in ascending start order. The struct exposes no
/// mutation: once built from a search result it never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    assignments: Vec<Assignment>,
}

impl Schedule {
    /// Builds a schedule, ordering assignments by ascending start time.
    pub fn new(mut assignments: Vec<Assignment>) -> Self {
        assignments.sort_by_key(|a| a.start);
        Self { assignments }
    }

    /// Assignments in ascending start order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Finds the assignment for an activity.
    pub fn assignment_for(&self, activity_id: &str) -> Option<&Assignment> {
        self.assignments
            .iter()
            .find(|a| a.activity_id == activity_id)
    }

    /// End of the latest assignment, or `None` when empty.
    pub fn last_end(&self) -> Option<i64> {
        self.assignments.iter().map(|a| a.end).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Schedule {
        Schedule::new(vec![
            Assignment::new("Lunch", 750, 810),
            Assignment::new("Breakfast", 480, 510),
            Assignment::new("Standup", 570, 600),
        ])
    }

    #[test]
    fn test_ordered_by_start() {
        let s = sample();
        let ids: Vec<&str> = s.assignments().iter().map(|a| a.activity_id.as_str()).collect();
        assert_eq!(ids, vec!["Breakfast", "Standup", "Lunch"]);
    }

    #[test]
    fn test_lookup() {
        let s = sample();
        let a = s.assignment_for("Standup").unwrap();
        assert_eq!(a.start, 570);
        assert_eq!(a.duration(), 30);
        assert!(s.assignment_for("missing").is_none());
    }

    #[test]
    fn test_overlaps_half_open() {
        let a = Assignment::new("A", 480, 510);
        let b = Assignment::new("B", 510, 540);
        let c = Assignment::new("C", 500, 520);

        assert!(!a.overlaps(&b)); // back-to-back is fine
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));
    }

    #[test]
    fn test_last_end() {
        assert_eq!(sample().last_end(), Some(810));
        assert_eq!(Schedule::new(vec![]).last_end(), None);
    }
}
