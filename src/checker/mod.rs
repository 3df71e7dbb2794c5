pub mod casing;
mod configuration;
mod documentation;
mod issue;
mod naming;
mod structure;
mod style;

pub use issue::{Category, Issue, Remedy, Severity};

use crate::analyzer::ProjectSnapshot;
use crate::standards::StandardsModel;

/// Uniform signature shared by every rule family.
pub type RuleFn = fn(&ProjectSnapshot, &StandardsModel) -> Vec<Issue>;

/// Rule families in evaluation order.
const RULES: [(Category, RuleFn); 5] = [
    (Category::Structure, structure::check),
    (Category::Naming, naming::check),
    (Category::CodeStyle, style::check),
    (Category::Documentation, documentation::check),
    (Category::Configuration, configuration::check),
];

/// Evaluates a snapshot against a standards model.
///
/// Evaluation is a pure function of its inputs: no I/O, no clock, no
/// randomness. Issues come out grouped by category in `Category` order and,
/// within a category, in snapshot traversal order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn evaluate(&self, snapshot: &ProjectSnapshot, standards: &StandardsModel) -> Vec<Issue> {
        RULES
            .iter()
            .flat_map(|(_, rule)| rule(snapshot, standards))
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
