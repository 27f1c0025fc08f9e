//! # dayplan
//!
//! A constraint-satisfaction scheduler for a single day of activities.
//!
//! Given a catalog of activities (durations, categories, optional fixed
//! starts and time windows) and a set of precedence rules, the engine
//! assigns every activity a non-overlapping time slot inside the day
//! window, or reports that no such assignment exists. Solving is exact:
//! domain derivation, fixpoint propagation over precedence constraints,
//! then ordering-based backtracking search bounded by a backtrack ceiling.
//!
//! ## Example
//!
//! ```
//! use dayplan::{PlanConfig, ScheduleReport, SolveOutcome};
//!
//! let config = PlanConfig::from_json(r#"{
//!     "activities": [
//!         {"name": "Standup", "duration": 30, "category": "Work",
//!          "fixed_start": "8:30 AM"},
//!         {"name": "Deep Work", "duration": 90, "category": "Work"},
//!         {"name": "Workout", "duration": 60, "category": "Personal"}
//!     ],
//!     "rules": [
//!         {"before": "Standup", "after": "Deep Work"}
//!     ]
//! }"#).unwrap();
//!
//! let problem = config.into_problem().unwrap();
//! match problem.solve().unwrap() {
//!     SolveOutcome::Solved(schedule) => {
//!         let report = ScheduleReport::build(&schedule, &problem.catalog);
//!         println!("{}", report.to_json());
//!     }
//!     SolveOutcome::Infeasible => eprintln!("no feasible schedule"),
//!     SolveOutcome::BudgetExceeded => eprintln!("search budget exhausted"),
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod solver;
pub mod validation;

pub use config::{PlanConfig, Problem};
pub use error::{Error, Result};
pub use models::{
    Activity, ActivityCatalog, Assignment, Category, Constraint, ConstraintStore, Schedule,
};
pub use report::ScheduleReport;
pub use solver::{
    build_domains, Day, Domain, SearchEngine, SolveOutcome, DEFAULT_MAX_BACKTRACKS,
};
pub use validation::{validate_input, ConfigIssue, ConfigIssueKind};
