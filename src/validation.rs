//! Input integrity checks.
//!
//! Validates a catalog and its relational rules before any scheduling:
//! duplicate identifiers, non-positive durations, rules referencing
//! unknown activities, self-referential rules, and precedence cycles.
//! A cyclic rule set can never be satisfied, so it is a configuration
//! fault rather than a search-time infeasibility.

use std::collections::{HashMap, HashSet};

use crate::models::{ActivityCatalog, Constraint};

/// Validation result: all detected issues, not just the first.
pub type ValidationResult = Result<(), Vec<ConfigIssue>>;

/// A configuration integrity issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    /// Issue category.
    pub kind: ConfigIssueKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of configuration issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigIssueKind {
    /// Two activities share an identifier.
    DuplicateId,
    /// An activity's duration is zero or negative.
    NonPositiveDuration,
    /// A rule references an activity not in the catalog.
    UnknownActivity,
    /// A rule orders an activity relative to itself.
    SelfReference,
    /// The precedence rules contain a cycle.
    CyclicPrecedence,
}

impl ConfigIssue {
    fn new(kind: ConfigIssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the catalog and precedence rules.
///
/// Checks, in order:
/// 1. No duplicate activity identifiers.
/// 2. Every duration is positive.
/// 3. Every rule references known activities.
/// 4. No rule orders an activity before itself.
/// 5. The precedence graph is acyclic (DFS back-edge detection).
///
/// Returns `Ok(())` or every detected issue.
pub fn validate_input(catalog: &ActivityCatalog, rules: &[Constraint]) -> ValidationResult {
    let mut issues = Vec::new();

    let mut seen = HashSet::new();
    for act in catalog.iter() {
        if !seen.insert(act.id.as_str()) {
            issues.push(ConfigIssue::new(
                ConfigIssueKind::DuplicateId,
                format!("duplicate activity '{}'", act.id),
            ));
        }
        if act.duration <= 0 {
            issues.push(ConfigIssue::new(
                ConfigIssueKind::NonPositiveDuration,
                format!(
                    "activity '{}' has non-positive duration {}",
                    act.id, act.duration
                ),
            ));
        }
    }

    for rule in rules {
        if let Constraint::Precedence { before, after, .. } = rule {
            for id in [before, after] {
                if catalog.index_of(id).is_none() {
                    issues.push(ConfigIssue::new(
                        ConfigIssueKind::UnknownActivity,
                        format!("rule references unknown activity '{id}'"),
                    ));
                }
            }
            if before == after {
                issues.push(ConfigIssue::new(
                    ConfigIssueKind::SelfReference,
                    format!("rule orders '{before}' before itself"),
                ));
            }
        }
    }

    if let Some(issue) = detect_cycle(rules) {
        issues.push(issue);
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// DFS back-edge cycle detection over the precedence graph.
fn detect_cycle(rules: &[Constraint]) -> Option<ConfigIssue> {
    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut nodes: HashSet<&str> = HashSet::new();

    for rule in rules {
        if let Constraint::Precedence { before, after, .. } = rule {
            adjacency.entry(before).or_default().push(after);
            nodes.insert(before);
            nodes.insert(after);
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    for &node in &nodes {
        if !visited.contains(node) && has_cycle(node, &adjacency, &mut visited, &mut in_stack) {
            return Some(ConfigIssue::new(
                ConfigIssueKind::CyclicPrecedence,
                format!("precedence cycle involving '{node}'"),
            ));
        }
    }

    None
}

fn has_cycle<'a>(
    node: &'a str,
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
    in_stack: &mut HashSet<&'a str>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(successors) = adjacency.get(node) {
        for &next in successors {
            if in_stack.contains(next) {
                return true;
            }
            if !visited.contains(next) && has_cycle(next, adjacency, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(node);
    false
}
