use serde_json::json;

use super::*;
use crate::analyzer::ConfigFileState;

/// No README, no package.json, a PascalCase source file and an empty tsconfig.
fn scenario_snapshot() -> ProjectSnapshot {
    let mut s = ProjectSnapshot::empty("/work/app");
    s.files = vec!["MyComponent.ts".to_string(), "tsconfig.json".to_string()];
    s.max_depth = 1;
    s.sources
        .insert("MyComponent.ts".to_string(), "export const a = 'x';\n".to_string());
    s.config_files
        .insert("tsconfig.json".to_string(), ConfigFileState::Parsed(json!({})));
    s
}

#[test]
fn evaluates_families_in_category_order() {
    let issues = RuleEngine::new().evaluate(&scenario_snapshot(), &StandardsModel::default());

    let summary: Vec<_> = issues
        .iter()
        .map(|i| (i.category, i.severity, i.target_path.as_deref()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (Category::Structure, Severity::Error, Some("README.md")),
            (Category::Structure, Severity::Error, Some("package.json")),
            (Category::Naming, Severity::Warning, Some("MyComponent.ts")),
            (Category::Configuration, Severity::Error, Some("tsconfig.json")),
        ]
    );
}

#[test]
fn evaluation_is_repeatable() {
    let snap = scenario_snapshot();
    let model = StandardsModel::default();
    let engine = RuleEngine::new();

    assert_eq!(engine.evaluate(&snap, &model), engine.evaluate(&snap, &model));
}

#[test]
fn rule_table_covers_every_category_once() {
    let categories: Vec<_> = RULES.iter().map(|(c, _)| *c).collect();
    assert_eq!(categories, Category::ALL.to_vec());
}
