//! Start-time domain derivation.
//!
//! Each activity's admissible start range is derived once from the day
//! bounds and the activity's own constraints. Search narrows working
//! copies; the canonical domains built here are never re-derived.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::models::ActivityCatalog;

/// The global day window shared by all domains, minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Earliest minute any activity may start.
    pub start: i64,
    /// Latest minute any activity may end.
    pub end: i64,
}

impl Day {
    /// Creates a day window.
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Window length in minutes.
    pub fn span(&self) -> i64 {
        self.end - self.start
    }
}

impl Default for Day {
    /// 7:00 AM to 11:00 PM.
    fn default() -> Self {
        Self::new(420, 1380)
    }
}

/// An activity's admissible start range `[lo, hi]`, inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Domain {
    /// Earliest admissible start.
    pub lo: i64,
    /// Latest admissible start.
    pub hi: i64,
}

impl Domain {
    /// Whether no admissible start remains.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }

    /// Whether exactly one start is admissible.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.lo == self.hi
    }
}

/// Derives every activity's domain from the day bounds and its own
/// constraints.
///
/// Per activity: base `lo = day.start`, `hi = day.end - duration`; a fixed
/// start overrides both; otherwise an earliest start raises `lo` and a
/// latest end lowers `hi`. An empty combined range fails with
/// [`Error::Domain`] naming the activity — detected here, before search,
/// so a single over-constrained activity is diagnosable on its own.
pub fn build_domains(catalog: &ActivityCatalog, day: Day) -> Result<Vec<Domain>, Error> {
    catalog
        .iter()
        .map(|act| {
            let (lo, hi) = match act.fixed_start {
                Some(fixed) => (fixed, fixed),
                None => {
                    let mut lo = day.start;
                    let mut hi = day.end - act.duration;
                    if let Some(earliest) = act.earliest_start {
                        lo = lo.max(earliest);
                    }
                    if let Some(latest_end) = act.latest_end {
                        hi = hi.min(latest_end - act.duration);
                    }
                    (lo, hi)
                }
            };

            if lo > hi {
                return Err(Error::Domain {
                    activity: act.id.clone(),
                    lo,
                    hi,
                });
            }
            Ok(Domain { lo, hi })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, Category};

    fn build_one(act: Activity) -> Result<Domain, Error> {
        let catalog = ActivityCatalog::new(vec![act]);
        build_domains(&catalog, Day::default()).map(|d| d[0])
    }

    #[test]
    fn test_base_bounds() {
        let d = build_one(Activity::new("A", 60, Category::Work)).unwrap();
        assert_eq!(d, Domain { lo: 420, hi: 1320 });
    }

    #[test]
    fn test_fixed_start_is_point_domain() {
        let d = build_one(Activity::new("A", 30, Category::Work).with_fixed_start(480)).unwrap();
        assert_eq!(d, Domain { lo: 480, hi: 480 });
        assert!(d.is_point());
    }

    #[test]
    fn test_fixed_start_overrides_other_bounds() {
        let d = build_one(
            Activity::new("A", 30, Category::Work)
                .with_fixed_start(480)
                .with_earliest_start(600)
                .with_latest_end(700),
        )
        .unwrap();
        assert_eq!(d, Domain { lo: 480, hi: 480 });
    }

    #[test]
    fn test_earliest_and_latest_combine_to_forced_placement() {
        // earliest 8:30 AM, latest end 9:30 AM, duration 60 — only one
        // start fits.
        let d = build_one(
            Activity::new("A", 60, Category::Work)
                .with_earliest_start(510)
                .with_latest_end(570),
        )
        .unwrap();
        assert_eq!(d, Domain { lo: 510, hi: 510 });
    }

    #[test]
    fn test_empty_domain_is_an_error_naming_the_activity() {
        // earliest 5:00 PM, latest end 5:30 PM, duration 60 — cannot fit.
        let err = build_one(
            Activity::new("Squeeze", 60, Category::Work)
                .with_earliest_start(1020)
                .with_latest_end(1050),
        )
        .unwrap_err();

        match err {
            Error::Domain { activity, lo, hi } => {
                assert_eq!(activity, "Squeeze");
                assert!(lo > hi);
            }
            other => panic!("expected Domain error, got {other:?}"),
        }
    }

    #[test]
    fn test_latest_end_only() {
        let d = build_one(Activity::new("A", 30, Category::Work).with_latest_end(750)).unwrap();
        assert_eq!(d, Domain { lo: 420, hi: 720 });
    }
}
