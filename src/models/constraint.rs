//! Scheduling constraints and the constraint store.
//!
//! Three constraint forms cover the whole problem: one global
//! mutual-exclusion rule (a single actor does one thing at a time),
//! pairwise precedence with an optional minimum gap, and fixed-window pins.
//! Fixed windows are folded into the start-time domains before search; they
//! are still recorded here so the final schedule check re-verifies them.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::ActivityCatalog;

/// A scheduling constraint over the activity catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Constraint {
    /// No two activities may occupy overlapping time. Applies to every
    /// activity; exactly one instance per store.
    NoOverlapAll,

    /// `after` cannot start until `before` ends plus `min_gap` minutes.
    Precedence {
        before: String,
        after: String,
        min_gap: i64,
    },

    /// `activity` must start exactly at `start`. A degenerate domain, not
    /// a separate propagation mechanism.
    FixedWindow { activity: String, start: i64 },
}

impl Constraint {
    /// Creates a zero-gap precedence constraint.
    pub fn precedence(before: impl Into<String>, after: impl Into<String>) -> Self {
        Self::Precedence {
            before: before.into(),
            after: after.into(),
            min_gap: 0,
        }
    }

    /// Creates a precedence constraint with a minimum gap in minutes.
    pub fn precedence_with_gap(
        before: impl Into<String>,
        after: impl Into<String>,
        min_gap: i64,
    ) -> Self {
        Self::Precedence {
            before: before.into(),
            after: after.into(),
            min_gap,
        }
    }

    /// Creates a fixed-window pin.
    pub fn fixed_window(activity: impl Into<String>, start: i64) -> Self {
        Self::FixedWindow {
            activity: activity.into(),
            start,
        }
    }
}

/// A precedence constraint resolved to catalog indices.
///
/// The engine works in index space; the named [`Constraint`] list is kept
/// alongside for the final validation pass and for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrecedenceEdge {
    /// Catalog index of the activity that must end first.
    pub before: usize,
    /// Catalog index of the activity that starts after.
    pub after: usize,
    /// Minimum gap in minutes between `before`'s end and `after`'s start.
    pub min_gap: i64,
}

/// The full, immutable constraint set for one problem instance.
///
/// Built once: the global [`Constraint::NoOverlapAll`] is always present,
/// fixed-window pins are derived from the catalog's fixed starts, and the
/// supplied precedence rules are resolved against the catalog. No
/// constraint is ever dropped; everything stored here is re-checked against
/// the final schedule.
#[derive(Debug, Clone)]
pub struct ConstraintStore {
    constraints: Vec<Constraint>,
    edges: Vec<PrecedenceEdge>,
}

impl ConstraintStore {
    /// Builds the store from the catalog and explicit precedence rules.
    ///
    /// Fails with [`Error::Config`] when a rule references an activity
    /// that is not in the catalog, or when a non-precedence rule is
    /// supplied (the global no-overlap and fixed windows are derived, not
    /// configured).
    pub fn build(catalog: &ActivityCatalog, rules: &[Constraint]) -> Result<Self, Error> {
        let mut constraints = vec![Constraint::NoOverlapAll];
        let mut edges = Vec::with_capacity(rules.len());

        for act in catalog.iter() {
            if let Some(start) = act.fixed_start {
                constraints.push(Constraint::fixed_window(&act.id, start));
            }
        }

        for rule in rules {
            match rule {
                Constraint::Precedence {
                    before,
                    after,
                    min_gap,
                } => {
                    let before_idx = catalog.index_of(before).ok_or_else(|| {
                        Error::Config(format!(
                            "precedence rule references unknown activity '{before}'"
                        ))
                    })?;
                    let after_idx = catalog.index_of(after).ok_or_else(|| {
                        Error::Config(format!(
                            "precedence rule references unknown activity '{after}'"
                        ))
                    })?;
                    edges.push(PrecedenceEdge {
                        before: before_idx,
                        after: after_idx,
                        min_gap: *min_gap,
                    });
                    constraints.push(rule.clone());
                }
                other => {
                    return Err(Error::Config(format!(
                        "only precedence rules may be configured, got {other:?}"
                    )));
                }
            }
        }

        Ok(Self { constraints, edges })
    }

    /// Read-only iteration over every stored constraint.
    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// Precedence constraints in index space, for propagation and search.
    pub fn edges(&self) -> &[PrecedenceEdge] {
        &self.edges
    }

    /// Total number of stored constraints (including the global
    /// no-overlap and derived fixed windows).
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// A store always carries at least the global no-overlap constraint.
    pub fn is_empty(&self) -> bool {
        false
    }
}
