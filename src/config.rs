//! Plan configuration.
//!
//! A day plan arrives as a JSON document: the day window as clock strings,
//! the activity list, and the precedence rules. [`PlanConfig`] is the raw
//! deserialized form; [`PlanConfig::into_problem`] parses every clock
//! string, runs the input integrity checks, and produces the validated
//! [`Problem`] the engine solves.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::clock;
use crate::error::{Error, Result};
use crate::models::{Activity, ActivityCatalog, Category, Constraint, ConstraintStore};
use crate::solver::{Day, SearchEngine, SolveOutcome, DEFAULT_MAX_BACKTRACKS};
use crate::validation::validate_input;

fn default_day_start() -> String {
    "7:00 AM".to_string()
}

fn default_day_end() -> String {
    "11:00 PM".to_string()
}

fn default_location() -> String {
    String::new()
}

/// A raw day-plan configuration, as deserialized from JSON.
///
/// All times are 12-hour clock strings (`"8:30 AM"`); conversion and
/// validation happen in [`into_problem`](Self::into_problem).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    /// Start of the scheduling window. Defaults to `"7:00 AM"`.
    #[serde(default = "default_day_start")]
    pub day_start: String,
    /// End of the scheduling window. Defaults to `"11:00 PM"`.
    #[serde(default = "default_day_end")]
    pub day_end: String,
    /// Activities to schedule, in declaration order.
    pub activities: Vec<ActivityRecord>,
    /// Precedence rules between activities.
    #[serde(default)]
    pub rules: Vec<RuleRecord>,
    /// Backtrack ceiling override for the search.
    #[serde(default)]
    pub max_backtracks: Option<u64>,
}

/// One activity entry in the configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActivityRecord {
    /// Unique activity name.
    pub name: String,
    /// Duration in minutes.
    pub duration: i64,
    /// `"Work"` or `"Personal"` (lowercase accepted).
    pub category: Category,
    /// Informational location label.
    #[serde(default = "default_location")]
    pub location: String,
    /// Pinned start as a clock string. Overrides the other bounds.
    #[serde(default)]
    pub fixed_start: Option<String>,
    /// Earliest admissible start as a clock string.
    #[serde(default)]
    pub earliest_start: Option<String>,
    /// Latest admissible end as a clock string.
    #[serde(default)]
    pub latest_end: Option<String>,
    /// Baseline meal/rest entry, excluded from the personal-time ratio.
    #[serde(default)]
    pub baseline: bool,
}

/// One precedence rule in the configuration: `before` ends, then at least
/// `gap` minutes pass, then `after` may start.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleRecord {
    pub before: String,
    pub after: String,
    #[serde(default)]
    pub gap: i64,
}

impl PlanConfig {
    /// Deserializes a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    /// Reads and deserializes a configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Converts the raw configuration into a validated [`Problem`].
    ///
    /// Parses every clock string, checks the day window is non-empty, runs
    /// the input integrity checks, and builds the constraint store.
    pub fn into_problem(self) -> Result<Problem> {
        let day_start = clock::parse(&self.day_start)?;
        let day_end = clock::parse(&self.day_end)?;
        if day_start >= day_end {
            return Err(Error::Config(format!(
                "day window is empty: {} to {}",
                self.day_start, self.day_end
            )));
        }

        let mut activities = Vec::with_capacity(self.activities.len());
        for record in &self.activities {
            let mut act = Activity::new(&record.name, record.duration, record.category)
                .with_location(&record.location);
            if let Some(text) = &record.fixed_start {
                act = act.with_fixed_start(clock::parse(text)?);
            }
            if let Some(text) = &record.earliest_start {
                act = act.with_earliest_start(clock::parse(text)?);
            }
            if let Some(text) = &record.latest_end {
                act = act.with_latest_end(clock::parse(text)?);
            }
            if record.baseline {
                act = act.as_baseline();
            }
            activities.push(act);
        }
        let catalog = ActivityCatalog::new(activities);

        let rules: Vec<Constraint> = self
            .rules
            .iter()
            .map(|r| Constraint::precedence_with_gap(&r.before, &r.after, r.gap))
            .collect();

        if let Err(issues) = validate_input(&catalog, &rules) {
            let joined = issues
                .iter()
                .map(|i| i.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(Error::Config(joined));
        }

        let store = ConstraintStore::build(&catalog, &rules)?;
        let day = Day::new(day_start, day_end);
        info!(
            activities = catalog.len(),
            rules = rules.len(),
            day_start,
            day_end,
            "configuration loaded"
        );

        Ok(Problem {
            catalog,
            store,
            day,
            max_backtracks: self.max_backtracks.unwrap_or(DEFAULT_MAX_BACKTRACKS),
        })
    }
}

/// A validated, solvable problem instance.
#[derive(Debug, Clone)]
pub struct Problem {
    /// The activities to schedule.
    pub catalog: ActivityCatalog,
    /// The full constraint set.
    pub store: ConstraintStore,
    /// The scheduling window.
    pub day: Day,
    /// Backtrack ceiling for the search.
    pub max_backtracks: u64,
}

impl Problem {
    /// Runs the engine on this problem.
    pub fn solve(&self) -> Result<SolveOutcome> {
        SearchEngine::new(&self.catalog, &self.store, self.day)
            .with_max_backtracks(self.max_backtracks)
            .solve()
    }
}
