//! Ordering-based backtracking search.
//!
//! Every activity competes for the same single timeline, so assignment
//! proceeds by choosing a total order consistent with all precedence
//! constraints and placing each activity at the earliest time that is
//! inside its domain, past the end of the previous placement, and past
//! every placed predecessor's end plus gap. Candidates are tried in
//! non-decreasing earliest feasible start, ties broken by non-decreasing
//! domain upper bound, so tightly constrained activities go first.
//!
//! A node where any unplaced activity can no longer meet its upper bound
//! is a dead end. Undoing a placement counts as one backtrack step; a
//! configurable ceiling bounds the total, and exceeding it is reported as
//! `BudgetExceeded` — distinct from proven infeasibility.

use tracing::{debug, trace};

use crate::error::Error;
use crate::models::{ActivityCatalog, Assignment, ConstraintStore, Schedule};
use crate::solver::domain::{build_domains, Day, Domain};
use crate::solver::propagate::{propagate, Propagation};
use crate::solver::validate::validate_schedule;

/// Default backtrack ceiling; generous for catalogs of a few dozen
/// activities while still bounding pathological instances.
pub const DEFAULT_MAX_BACKTRACKS: u64 = 10_000;

/// Terminal outcome of a solve run.
#[derive(Debug, Clone)]
pub enum SolveOutcome {
    /// A feasible, validated schedule.
    Solved(Schedule),
    /// Propagation emptied a domain, or search exhausted every ordering.
    Infeasible,
    /// The backtrack ceiling was hit before resolution; the instance may
    /// still be feasible.
    BudgetExceeded,
}

impl SolveOutcome {
    /// The schedule, when solved.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            Self::Solved(schedule) => Some(schedule),
            _ => None,
        }
    }

    /// Whether a schedule was found.
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Result of exploring one search node.
enum Step {
    Solved,
    Exhausted,
    Budget,
}

/// The constraint-satisfaction engine: propagation to a fixpoint, then
/// depth-first placement with backtracking.
///
/// Borrows the problem instance; the canonical catalog and store are never
/// mutated. Each run derives fresh domains, so an engine can be reused.
pub struct SearchEngine<'a> {
    catalog: &'a ActivityCatalog,
    store: &'a ConstraintStore,
    day: Day,
    max_backtracks: u64,
}

/// Working state threaded through the recursion: placements plus the
/// placement log that makes undo exact.
struct SearchState {
    starts: Vec<Option<i64>>,
    order: Vec<usize>,
    backtracks: u64,
}

impl SearchState {
    fn new(len: usize) -> Self {
        Self {
            starts: vec![None; len],
            order: Vec::with_capacity(len),
            backtracks: 0,
        }
    }

    fn place(&mut self, index: usize, start: i64) {
        self.starts[index] = Some(start);
        self.order.push(index);
    }

    fn unplace(&mut self, index: usize) {
        self.starts[index] = None;
        let popped = self.order.pop();
        debug_assert_eq!(popped, Some(index));
    }
}

impl<'a> SearchEngine<'a> {
    /// Creates an engine with the default backtrack ceiling.
    pub fn new(catalog: &'a ActivityCatalog, store: &'a ConstraintStore, day: Day) -> Self {
        Self {
            catalog,
            store,
            day,
            max_backtracks: DEFAULT_MAX_BACKTRACKS,
        }
    }

    /// Overrides the backtrack ceiling.
    pub fn with_max_backtracks(mut self, max_backtracks: u64) -> Self {
        self.max_backtracks = max_backtracks;
        self
    }

    /// Runs the full pipeline: domain derivation, propagation, search,
    /// and the defensive validation of any solution.
    ///
    /// Hard faults (an activity whose own bounds are contradictory, or a
    /// schedule failing the re-check) are errors; search-level
    /// non-success is a structured [`SolveOutcome`].
    pub fn solve(&self) -> Result<SolveOutcome, Error> {
        let mut domains = build_domains(self.catalog, self.day)?;

        if let Propagation::Emptied(index) = propagate(&mut domains, self.catalog, self.store) {
            debug!(
                activity = self.catalog.get(index).id.as_str(),
                "infeasible during propagation"
            );
            return Ok(SolveOutcome::Infeasible);
        }

        // Incoming precedence edges per activity, for eligibility and
        // earliest-start computation.
        let mut incoming: Vec<Vec<(usize, i64)>> = vec![Vec::new(); self.catalog.len()];
        for edge in self.store.edges() {
            incoming[edge.after].push((edge.before, edge.min_gap));
        }

        let mut state = SearchState::new(self.catalog.len());
        let step = self.place_next(&domains, &incoming, &mut state);
        debug!(backtracks = state.backtracks, "search finished");

        match step {
            Step::Budget => Ok(SolveOutcome::BudgetExceeded),
            Step::Exhausted => Ok(SolveOutcome::Infeasible),
            Step::Solved => {
                let assignments = self
                    .catalog
                    .iter()
                    .enumerate()
                    .map(|(i, act)| {
                        let start = state.starts[i].unwrap_or_else(|| {
                            unreachable!("solved state has a start for every activity")
                        });
                        Assignment::new(&act.id, start, start + act.duration)
                    })
                    .collect();
                let schedule = Schedule::new(assignments);

                validate_schedule(&schedule, self.catalog, self.store, self.day)?;
                Ok(SolveOutcome::Solved(schedule))
            }
        }
    }

    /// End of the most recent placement, or the day start.
    fn cursor(&self, state: &SearchState) -> i64 {
        state
            .order
            .last()
            .map(|&i| {
                let start = state.starts[i].expect("last ordered activity is placed");
                start + self.catalog.get(i).duration
            })
            .unwrap_or(self.day.start)
    }

    /// Earliest feasible start for an activity whose predecessors are all
    /// placed.
    fn earliest_start(
        &self,
        index: usize,
        cursor: i64,
        domains: &[Domain],
        incoming: &[Vec<(usize, i64)>],
        state: &SearchState,
    ) -> i64 {
        let mut est = domains[index].lo.max(cursor);
        for &(before, gap) in &incoming[index] {
            if let Some(start) = state.starts[before] {
                est = est.max(start + self.catalog.get(before).duration + gap);
            }
        }
        est
    }

    fn place_next(
        &self,
        domains: &[Domain],
        incoming: &[Vec<(usize, i64)>],
        state: &mut SearchState,
    ) -> Step {
        if state.order.len() == self.catalog.len() {
            return Step::Solved;
        }

        let cursor = self.cursor(state);

        // Dead-end check: the cursor only moves right, so any unplaced
        // activity already past its upper bound stays past it.
        for index in 0..self.catalog.len() {
            if state.starts[index].is_none() && domains[index].lo.max(cursor) > domains[index].hi {
                return Step::Exhausted;
            }
        }

        // Candidates: unplaced activities with every predecessor placed.
        let mut candidates: Vec<(i64, i64, usize)> = Vec::new();
        for index in 0..self.catalog.len() {
            if state.starts[index].is_some() {
                continue;
            }
            if incoming[index]
                .iter()
                .any(|&(before, _)| state.starts[before].is_none())
            {
                continue;
            }
            let est = self.earliest_start(index, cursor, domains, incoming, state);
            if est > domains[index].hi {
                // Placed predecessors fix this bound for the whole
                // subtree; it can only grow.
                return Step::Exhausted;
            }
            candidates.push((est, domains[index].hi, index));
        }

        candidates.sort_unstable();

        for (est, _, index) in candidates {
            state.place(index, est);
            trace!(
                activity = self.catalog.get(index).id.as_str(),
                start = est,
                "placed"
            );

            match self.place_next(domains, incoming, state) {
                Step::Solved => return Step::Solved,
                Step::Budget => return Step::Budget,
                Step::Exhausted => {
                    state.unplace(index);
                    state.backtracks += 1;
                    trace!(
                        activity = self.catalog.get(index).id.as_str(),
                        backtracks = state.backtracks,
                        "backtracked"
                    );
                    if state.backtracks > self.max_backtracks {
                        return Step::Budget;
                    }
                }
            }
        }

        Step::Exhausted
    }
}
