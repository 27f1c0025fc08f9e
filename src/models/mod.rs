//! Scheduling domain models.
//!
//! The core data types for one single-day scheduling problem and its
//! solution: the activity catalog (problem instance), the constraint set,
//! and the solved schedule.

mod activity;
mod constraint;
mod schedule;

pub use activity::{Activity, ActivityCatalog, Category};
pub use constraint::{Constraint, ConstraintStore, PrecedenceEdge};
pub use schedule::{Assignment, Schedule};
