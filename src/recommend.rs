//! Groups issues into prioritized, per-category recommendations.

use serde::Serialize;

use crate::checker::{Category, Issue, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub category: Category,
    pub issue_count: usize,
    pub dominant_severity: Severity,
    /// 3 for error, 2 for warning, 1 for info; higher is more urgent.
    pub priority: u8,
    pub suggested_actions: Vec<String>,
}

/// One recommendation per category that has issues, most urgent first.
///
/// Ordering: priority descending, then issue count descending, then category
/// name ascending.
#[must_use]
pub fn build(issues: &[Issue]) -> Vec<Recommendation> {
    let mut recommendations: Vec<Recommendation> = Category::ALL
        .iter()
        .filter_map(|&category| {
            let group: Vec<&Issue> = issues.iter().filter(|i| i.category == category).collect();
            let dominant = group.iter().map(|i| i.severity).max_by_key(|s| s.rank())?;
            Some(Recommendation {
                category,
                issue_count: group.len(),
                dominant_severity: dominant,
                priority: dominant.rank(),
                suggested_actions: actions_for(category)
                    .iter()
                    .map(|a| (*a).to_string())
                    .collect(),
            })
        })
        .collect();

    recommendations.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| b.issue_count.cmp(&a.issue_count))
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });
    recommendations
}

const fn actions_for(category: Category) -> &'static [&'static str] {
    match category {
        Category::Structure => &[
            "Create the missing required files and directories",
            "Run `fix --create-missing` to scaffold them from templates",
            "Keep nesting within the configured maximum depth",
        ],
        Category::Naming => &[
            "Rename files and directories to the configured case convention",
            "Run `fix --auto-fix` to apply the suggested renames",
            "Update imports that reference renamed paths",
        ],
        Category::CodeStyle => &[
            "Configure a formatter and run `fix --format-code`",
            "Add an editor config so indentation and quotes stay consistent",
        ],
        Category::Documentation => &[
            "Add the missing README sections",
            "Run `fix --create-missing` to scaffold missing documentation files",
        ],
        Category::Configuration => &[
            "Fix JSON syntax errors in configuration files",
            "Add the required keys to each tracked configuration file",
        ],
    }
}

#[cfg(test)]
#[path = "recommend_tests.rs"]
mod tests;
