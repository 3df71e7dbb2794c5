//! The validation pipeline: analyze, evaluate, score, recommend.

use std::path::Path;

use crate::analyzer::{ProjectAnalyzer, ProjectSnapshot};
use crate::checker::{Issue, RuleEngine, Severity};
use crate::error::Result;
use crate::recommend::{self, Recommendation};
use crate::score;
use crate::standards::StandardsModel;

/// Everything one validation run produced. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub snapshot: ProjectSnapshot,
    pub issues: Vec<Issue>,
    pub score: u32,
    pub recommendations: Vec<Recommendation>,
}

impl ValidationResult {
    /// Evaluates an existing snapshot.
    #[must_use]
    pub fn evaluate(snapshot: ProjectSnapshot, standards: &StandardsModel) -> Self {
        let issues = RuleEngine::new().evaluate(&snapshot, standards);
        let score = score::score(&issues);
        let recommendations = recommend::build(&issues);
        Self {
            snapshot,
            issues,
            score,
            recommendations,
        }
    }

    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Analyzes `root` and evaluates it against `standards`.
///
/// # Errors
/// Returns `PathNotFound` for a missing root and `Interrupted` when the
/// analyzer's cancel token fires.
pub fn validate(
    analyzer: &ProjectAnalyzer,
    standards: &StandardsModel,
    root: &Path,
) -> Result<ValidationResult> {
    let snapshot = analyzer.analyze(root)?;
    Ok(ValidationResult::evaluate(snapshot, standards))
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
