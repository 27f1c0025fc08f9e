//! Fixpoint propagation over working domains.
//!
//! Precedence constraints tighten both endpoints: the successor cannot
//! start before the predecessor's earliest end plus the gap, and the
//! predecessor cannot start so late that the successor misses its own
//! deadline. Iterates until no domain changes; an emptied domain is
//! immediate global infeasibility, reported without entering search.

use tracing::debug;

use crate::models::{ActivityCatalog, ConstraintStore};
use crate::solver::domain::Domain;

/// Result of running propagation to a fixpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Propagation {
    /// All domains are stable and non-empty.
    Fixpoint,
    /// The domain at this catalog index became empty.
    Emptied(usize),
}

/// Tightens `domains` in place until no precedence constraint can narrow
/// anything further.
///
/// For each `Precedence(before, after, gap)`, the relation
/// `after.start >= before.start + before.duration + gap` tightens both
/// sides: `after.lo = max(after.lo, before.lo + before.duration + gap)`
/// and `before.hi = min(before.hi, after.hi - before.duration - gap)`.
///
/// Bounds move monotonically inside the finite day window, so the loop
/// terminates.
pub(crate) fn propagate(
    domains: &mut [Domain],
    catalog: &ActivityCatalog,
    store: &ConstraintStore,
) -> Propagation {
    let mut rounds = 0usize;
    loop {
        let mut changed = false;
        rounds += 1;

        for edge in store.edges() {
            let before_dur = catalog.get(edge.before).duration;

            let after_lo = domains[edge.before].lo + before_dur + edge.min_gap;
            if after_lo > domains[edge.after].lo {
                domains[edge.after].lo = after_lo;
                changed = true;
                if domains[edge.after].is_empty() {
                    debug!(
                        activity = catalog.get(edge.after).id.as_str(),
                        "propagation emptied domain"
                    );
                    return Propagation::Emptied(edge.after);
                }
            }

            let before_hi = domains[edge.after].hi - before_dur - edge.min_gap;
            if before_hi < domains[edge.before].hi {
                domains[edge.before].hi = before_hi;
                changed = true;
                if domains[edge.before].is_empty() {
                    debug!(
                        activity = catalog.get(edge.before).id.as_str(),
                        "propagation emptied domain"
                    );
                    return Propagation::Emptied(edge.before);
                }
            }
        }

        if !changed {
            debug!(rounds, "propagation reached fixpoint");
            return Propagation::Fixpoint;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Activity, ActivityCatalog, Category, Constraint, ConstraintStore};
    use crate::solver::domain::{build_domains, Day};

    fn setup(
        activities: Vec<Activity>,
        rules: Vec<Constraint>,
        day: Day,
    ) -> (ActivityCatalog, ConstraintStore, Vec<Domain>) {
        let catalog = ActivityCatalog::new(activities);
        let store = ConstraintStore::build(&catalog, &rules).unwrap();
        let domains = build_domains(&catalog, day).unwrap();
        (catalog, store, domains)
    }

    #[test]
    fn test_gap_tightens_both_endpoints() {
        let day = Day::new(0, 480);
        let (catalog, store, mut domains) = setup(
            vec![
                Activity::new("A", 30, Category::Work),
                Activity::new("B", 30, Category::Work),
            ],
            vec![Constraint::precedence_with_gap("A", "B", 120)],
            day,
        );

        assert_eq!(propagate(&mut domains, &catalog, &store), Propagation::Fixpoint);
        // B cannot start before A's earliest end + gap.
        assert_eq!(domains[1].lo, 0 + 30 + 120);
        // A cannot start so late that B misses its deadline.
        assert_eq!(domains[0].hi, 450 - 30 - 120);
    }

    #[test]
    fn test_chain_propagates_transitively() {
        let day = Day::new(0, 1000);
        let (catalog, store, mut domains) = setup(
            vec![
                Activity::new("A", 60, Category::Work),
                Activity::new("B", 60, Category::Work),
                Activity::new("C", 60, Category::Work),
            ],
            vec![
                Constraint::precedence("A", "B"),
                Constraint::precedence("B", "C"),
            ],
            day,
        );

        assert_eq!(propagate(&mut domains, &catalog, &store), Propagation::Fixpoint);
        assert_eq!(domains[1].lo, 60);
        assert_eq!(domains[2].lo, 120);
        assert_eq!(domains[1].hi, 940 - 60);
        assert_eq!(domains[0].hi, 880 - 60);
    }

    #[test]
    fn test_unequal_durations_use_predecessor_length() {
        // before.hi is bounded by after.hi minus the *predecessor's*
        // duration: A must end (A.start + 30) by B's latest start.
        let day = Day::new(0, 510);
        let (catalog, store, mut domains) = setup(
            vec![
                Activity::new("A", 30, Category::Work),
                Activity::new("B", 60, Category::Work),
            ],
            vec![Constraint::precedence("A", "B")],
            day,
        );

        assert_eq!(propagate(&mut domains, &catalog, &store), Propagation::Fixpoint);
        assert_eq!(domains[1].lo, 30);
        assert_eq!(domains[0].hi, 450 - 30);
    }

    #[test]
    fn test_emptied_domain_short_circuits() {
        let day = Day::new(0, 1000);
        let (catalog, store, mut domains) = setup(
            vec![
                Activity::new("A", 30, Category::Work).with_fixed_start(400),
                Activity::new("B", 30, Category::Work).with_latest_end(130),
            ],
            vec![Constraint::precedence("A", "B")],
            day,
        );

        // B must start at >= 430 but end by 130.
        assert_eq!(
            propagate(&mut domains, &catalog, &store),
            Propagation::Emptied(1)
        );
    }

    #[test]
    fn test_no_edges_is_trivial_fixpoint() {
        let day = Day::default();
        let (catalog, store, mut domains) = setup(
            vec![Activity::new("A", 30, Category::Work)],
            vec![],
            day,
        );
        let before = domains.clone();
        assert_eq!(propagate(&mut domains, &catalog, &store), Propagation::Fixpoint);
        assert_eq!(domains, before);
    }
}
