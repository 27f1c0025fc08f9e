//! Activity model and catalog.
//!
//! An activity is the smallest schedulable unit: a named block of time with
//! a duration, a category, and optional temporal bounds of its own. The
//! catalog is the ordered, read-only problem instance the rest of the
//! engine works from.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification of an activity for the allocation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Counts toward work time.
    #[serde(alias = "work")]
    Work,
    /// Counts toward personal time (unless marked baseline).
    #[serde(alias = "personal")]
    Personal,
}

/// A single-day activity to be scheduled.
///
/// All times are minutes since midnight; `duration` must be positive
/// (enforced by [`validate_input`](crate::validation::validate_input)).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    /// Unique activity identifier.
    pub id: String,
    /// Duration in minutes.
    pub duration: i64,
    /// Work or Personal, for the allocation report.
    pub category: Category,
    /// Where the activity happens. Informational only: commute time
    /// between differing locations is deliberately not modeled.
    pub location: String,
    /// Pinned start time. Overrides `earliest_start` and `latest_end`.
    pub fixed_start: Option<i64>,
    /// Earliest admissible start.
    pub earliest_start: Option<i64>,
    /// Latest admissible end.
    pub latest_end: Option<i64>,
    /// Baseline meal/rest activity: always scheduled, excluded from the
    /// personal-time ratio.
    pub baseline: bool,
}

impl Activity {
    /// Creates an activity with no temporal bounds of its own.
    pub fn new(id: impl Into<String>, duration: i64, category: Category) -> Self {
        Self {
            id: id.into(),
            duration,
            category,
            location: String::new(),
            fixed_start: None,
            earliest_start: None,
            latest_end: None,
            baseline: false,
        }
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Pins the start time (minutes since midnight).
    pub fn with_fixed_start(mut self, start: i64) -> Self {
        self.fixed_start = Some(start);
        self
    }

    /// Sets the earliest admissible start.
    pub fn with_earliest_start(mut self, start: i64) -> Self {
        self.earliest_start = Some(start);
        self
    }

    /// Sets the latest admissible end.
    pub fn with_latest_end(mut self, end: i64) -> Self {
        self.latest_end = Some(end);
        self
    }

    /// Marks this as a baseline meal/rest activity.
    pub fn as_baseline(mut self) -> Self {
        self.baseline = true;
        self
    }

    /// Whether this activity counts toward personal time in the report.
    pub fn counts_as_personal(&self) -> bool {
        self.category == Category::Personal && !self.baseline
    }
}

/// The ordered, read-only collection of activities to schedule.
///
/// Built once from configuration; the engine addresses activities by their
/// catalog index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ActivityCatalog {
    /// Creates a catalog preserving the given order.
    ///
    /// Duplicate identifiers are caught by
    /// [`validate_input`](crate::validation::validate_input); here the
    /// first occurrence wins for lookup purposes.
    pub fn new(activities: Vec<Activity>) -> Self {
        let mut index = HashMap::with_capacity(activities.len());
        for (i, act) in activities.iter().enumerate() {
            index.entry(act.id.clone()).or_insert(i);
        }
        Self { activities, index }
    }

    /// Number of activities.
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Activity at a catalog index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds; engine indices always come from
    /// this catalog.
    pub fn get(&self, index: usize) -> &Activity {
        &self.activities[index]
    }

    /// Catalog index for an identifier.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Activity by identifier.
    pub fn by_id(&self, id: &str) -> Option<&Activity> {
        self.index_of(id).map(|i| &self.activities[i])
    }

    /// All activities in catalog order.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Iterates activities in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Activity> {
        self.activities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_builder() {
        let act = Activity::new("Workout", 60, Category::Personal)
            .with_location("Home")
            .with_earliest_start(420)
            .with_latest_end(1170);

        assert_eq!(act.id, "Workout");
        assert_eq!(act.duration, 60);
        assert_eq!(act.location, "Home");
        assert_eq!(act.earliest_start, Some(420));
        assert_eq!(act.latest_end, Some(1170));
        assert!(act.fixed_start.is_none());
        assert!(!act.baseline);
    }

    #[test]
    fn test_counts_as_personal() {
        let workout = Activity::new("Workout", 60, Category::Personal);
        let lunch = Activity::new("Lunch", 60, Category::Personal).as_baseline();
        let standup = Activity::new("Standup", 30, Category::Work);

        assert!(workout.counts_as_personal());
        assert!(!lunch.counts_as_personal());
        assert!(!standup.counts_as_personal());
    }

    #[test]
    fn test_catalog_lookup() {
        let catalog = ActivityCatalog::new(vec![
            Activity::new("A", 30, Category::Work),
            Activity::new("B", 60, Category::Personal),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.index_of("B"), Some(1));
        assert_eq!(catalog.by_id("A").unwrap().duration, 30);
        assert!(catalog.index_of("missing").is_none());
    }

    #[test]
    fn test_catalog_preserves_order() {
        let catalog = ActivityCatalog::new(vec![
            Activity::new("Z", 30, Category::Work),
            Activity::new("A", 30, Category::Work),
        ]);

        let ids: Vec<&str> = catalog.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["Z", "A"]);
    }
}
