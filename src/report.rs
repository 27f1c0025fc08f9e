//! Schedule reporting.
//!
//! Derives the personal/work allocation from a solved schedule and
//! assembles the final view: assignments in ascending start order with
//! clock-string times, plus the personal-time percentage.
//!
//! The allocation is a reported metric, never a constraint: the engine
//! does not optimize toward any target ratio.

use serde_json::{json, Map, Value};

use crate::clock;
use crate::models::{ActivityCatalog, Schedule};

/// The final schedule view plus allocation figures.
///
/// Personal time counts `Personal` activities that are not baseline
/// meal/rest entries; work time counts every `Work` activity. Baseline
/// activities appear in the assignment view but not in the ratio.
#[derive(Debug, Clone)]
pub struct ScheduleReport {
    entries: Vec<ReportEntry>,
    personal_minutes: i64,
    work_minutes: i64,
}

/// One line of the schedule view, ascending by start.
#[derive(Debug, Clone)]
pub struct ReportEntry {
    /// The scheduled activity.
    pub activity_id: String,
    /// Assigned start, minutes since midnight.
    pub start: i64,
    /// Assigned end, minutes since midnight.
    pub end: i64,
}

impl ScheduleReport {
    /// Builds the report from a solved schedule and its catalog.
    pub fn build(schedule: &Schedule, catalog: &ActivityCatalog) -> Self {
        let entries = schedule
            .assignments()
            .iter()
            .map(|a| ReportEntry {
                activity_id: a.activity_id.clone(),
                start: a.start,
                end: a.end,
            })
            .collect();

        let mut personal_minutes = 0;
        let mut work_minutes = 0;
        for act in catalog.iter() {
            if act.counts_as_personal() {
                personal_minutes += act.duration;
            } else if act.category == crate::models::Category::Work {
                work_minutes += act.duration;
            }
        }

        Self {
            entries,
            personal_minutes,
            work_minutes,
        }
    }

    /// Entries in ascending start order.
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Counted personal minutes (baseline activities excluded).
    pub fn personal_minutes(&self) -> i64 {
        self.personal_minutes
    }

    /// Work minutes.
    pub fn work_minutes(&self) -> i64 {
        self.work_minutes
    }

    /// Personal share of counted time as a percentage, `0.0` when nothing
    /// is counted.
    pub fn personal_allocation(&self) -> f64 {
        let total = self.personal_minutes + self.work_minutes;
        if total > 0 {
            self.personal_minutes as f64 / total as f64 * 100.0
        } else {
            0.0
        }
    }

    /// The allocation rendered with one decimal, e.g. `"45.8%"`.
    pub fn allocation_label(&self) -> String {
        format!("{:.1}%", self.personal_allocation())
    }

    /// The output document: assignments keyed by activity in ascending
    /// start order, with clock-string times, plus the allocation label.
    pub fn to_json(&self) -> Value {
        let mut assignments = Map::new();
        for entry in &self.entries {
            assignments.insert(
                entry.activity_id.clone(),
                json!({
                    "start": clock::format(entry.start),
                    "end": clock::format(entry.end),
                }),
            );
        }
        json!({
            "assignments": Value::Object(assignments),
            "personal_allocation": self.allocation_label(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Assignment, Category};

    fn sample() -> (Schedule, ActivityCatalog) {
        let catalog = ActivityCatalog::new(vec![
            Activity::new("Standup", 30, Category::Work),
            Activity::new("Deep Work", 90, Category::Work),
            Activity::new("Workout", 60, Category::Personal),
            Activity::new("Lunch", 60, Category::Personal).as_baseline(),
        ]);
        let schedule = Schedule::new(vec![
            Assignment::new("Deep Work", 540, 630),
            Assignment::new("Standup", 510, 540),
            Assignment::new("Lunch", 750, 810),
            Assignment::new("Workout", 630, 690),
        ]);
        (schedule, catalog)
    }

    #[test]
    fn test_allocation_excludes_baseline() {
        let (schedule, catalog) = sample();
        let report = ScheduleReport::build(&schedule, &catalog);

        assert_eq!(report.personal_minutes(), 60);
        assert_eq!(report.work_minutes(), 120);
        // 60 / 180 * 100
        assert!((report.personal_allocation() - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(report.allocation_label(), "33.3%");
    }

    #[test]
    fn test_allocation_zero_when_nothing_counted() {
        let catalog = ActivityCatalog::new(vec![
            Activity::new("Lunch", 60, Category::Personal).as_baseline()
        ]);
        let schedule = Schedule::new(vec![Assignment::new("Lunch", 750, 810)]);
        let report = ScheduleReport::build(&schedule, &catalog);

        assert_eq!(report.personal_allocation(), 0.0);
        assert_eq!(report.allocation_label(), "0.0%");
    }

    #[test]
    fn test_entries_in_start_order() {
        let (schedule, catalog) = sample();
        let report = ScheduleReport::build(&schedule, &catalog);

        let ids: Vec<&str> = report
            .entries()
            .iter()
            .map(|e| e.activity_id.as_str())
            .collect();
        assert_eq!(ids, vec!["Standup", "Deep Work", "Workout", "Lunch"]);
    }

    #[test]
    fn test_json_shape_and_key_order() {
        let (schedule, catalog) = sample();
        let report = ScheduleReport::build(&schedule, &catalog);
        let doc = report.to_json();

        assert_eq!(doc["personal_allocation"], "33.3%");
        assert_eq!(doc["assignments"]["Standup"]["start"], "8:30 AM");
        assert_eq!(doc["assignments"]["Standup"]["end"], "9:00 AM");
        assert_eq!(doc["assignments"]["Lunch"]["end"], "1:30 PM");

        // Keys preserve ascending start order.
        let keys: Vec<&String> = doc["assignments"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["Standup", "Deep Work", "Workout", "Lunch"]);
    }

    #[test]
    fn test_allocation_recomputable_from_entries() {
        let (schedule, catalog) = sample();
        let report = ScheduleReport::build(&schedule, &catalog);

        let mut personal = 0i64;
        let mut work = 0i64;
        for entry in report.entries() {
            let act = catalog.by_id(&entry.activity_id).unwrap();
            if act.counts_as_personal() {
                personal += entry.end - entry.start;
            } else if act.category == Category::Work {
                work += entry.end - entry.start;
            }
        }
        let expected = format!("{:.1}%", personal as f64 / (personal + work) as f64 * 100.0);
        assert_eq!(report.allocation_label(), expected);
    }
}
