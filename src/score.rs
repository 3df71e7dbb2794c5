//! Consistency score: a severity-weighted deduction from 100.

use crate::checker::{Issue, Severity};

pub const MAX_SCORE: u32 = 100;
pub const ERROR_WEIGHT: u32 = 10;
pub const WARNING_WEIGHT: u32 = 5;
pub const INFO_WEIGHT: u32 = 2;

#[must_use]
pub const fn weight(severity: Severity) -> u32 {
    match severity {
        Severity::Error => ERROR_WEIGHT,
        Severity::Warning => WARNING_WEIGHT,
        Severity::Info => INFO_WEIGHT,
    }
}

/// Score in `0..=100`. Depends only on the severities present, so any ordering
/// of the same issues scores the same.
#[must_use]
pub fn score(issues: &[Issue]) -> u32 {
    let deduction = issues
        .iter()
        .fold(0u32, |acc, issue| acc.saturating_add(weight(issue.severity)));
    MAX_SCORE.saturating_sub(deduction)
}

#[cfg(test)]
#[path = "score_tests.rs"]
mod tests;
