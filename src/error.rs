//! Crate-wide error taxonomy.
//!
//! Hard faults only: configuration, clock parsing, empty domains, and the
//! defensive post-solve validation check. Search-level non-success
//! (`Infeasible`, `BudgetExceeded`) is not an error — it is carried by
//! [`SolveOutcome`](crate::solver::SolveOutcome) so callers always receive
//! either a validated schedule or a clearly labeled non-success outcome.

use thiserror::Error;

use crate::clock::ParseError;
use crate::solver::Violation;

/// Errors that abort a run before (or, for `Validation`, instead of) a
/// schedule being reported.
#[derive(Debug, Error)]
pub enum Error {
    /// A clock string failed to parse during configuration loading.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An activity's combined bounds leave no admissible start time.
    /// Detected before search so a single bad activity is diagnosable
    /// independently of global feasibility.
    #[error(
        "activity '{activity}' has an empty start-time domain \
         (lo {lo} > hi {hi})"
    )]
    Domain {
        /// The offending activity.
        activity: String,
        /// Combined lower bound (minutes).
        lo: i64,
        /// Combined upper bound (minutes).
        hi: i64,
    },

    /// Malformed configuration: unknown category, bad rule reference,
    /// duplicate identifier, precedence cycle, or non-positive duration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Reading a configuration file failed.
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// A solved schedule failed the defensive constraint re-check.
    /// Indicates a propagation or search bug, never a user fault.
    #[error("solved schedule failed validation: {0}")]
    Validation(#[from] Violation),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
