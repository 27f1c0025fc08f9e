//! The constraint-satisfaction scheduling engine.
//!
//! Three stages, run in order by [`SearchEngine::solve`]:
//!
//! 1. **Domain derivation** — each activity's admissible start interval
//!    from the day window and its own bounds ([`build_domains`]).
//! 2. **Propagation** — precedence constraints tighten working domains to
//!    a fixpoint; an emptied domain is infeasibility without search.
//! 3. **Search** — ordering-based backtracking placement on the single
//!    timeline, bounded by a backtrack ceiling, followed by a defensive
//!    re-check of the result against every stored constraint
//!    ([`validate_schedule`]).
//!
//! Everything is single-threaded and synchronous; a run terminates with
//! exactly one of `Solved`, `Infeasible`, or `BudgetExceeded`.

mod domain;
mod propagate;
mod search;
mod validate;

pub use domain::{build_domains, Day, Domain};
pub use search::{SearchEngine, SolveOutcome, DEFAULT_MAX_BACKTRACKS};
pub use validate::{validate_schedule, Violation, ViolationKind};
