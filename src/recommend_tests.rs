use super::*;

fn issue(category: Category, severity: Severity) -> Issue {
    Issue::new(category, severity, "x")
}

#[test]
fn no_issues_no_recommendations() {
    assert!(build(&[]).is_empty());
}

#[test]
fn groups_by_category_with_counts() {
    let issues = [
        issue(Category::Naming, Severity::Warning),
        issue(Category::Naming, Severity::Warning),
        issue(Category::Naming, Severity::Warning),
    ];
    let recs = build(&issues);

    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].category, Category::Naming);
    assert_eq!(recs[0].issue_count, 3);
    assert_eq!(recs[0].dominant_severity, Severity::Warning);
    assert_eq!(recs[0].priority, 2);
    assert!(!recs[0].suggested_actions.is_empty());
}

#[test]
fn most_severe_issue_sets_priority() {
    let issues = [
        issue(Category::Configuration, Severity::Warning),
        issue(Category::Configuration, Severity::Error),
        issue(Category::Configuration, Severity::Info),
    ];
    let recs = build(&issues);

    assert_eq!(recs[0].dominant_severity, Severity::Error);
    assert_eq!(recs[0].priority, 3);
}

#[test]
fn sorted_by_priority_then_count_then_name() {
    let issues = [
        issue(Category::CodeStyle, Severity::Info),
        issue(Category::Naming, Severity::Warning),
        issue(Category::Documentation, Severity::Warning),
        issue(Category::Documentation, Severity::Info),
        issue(Category::Structure, Severity::Error),
        issue(Category::Configuration, Severity::Info),
    ];
    let order: Vec<_> = build(&issues).iter().map(|r| r.category).collect();

    assert_eq!(
        order,
        vec![
            Category::Structure,
            Category::Documentation,
            Category::Naming,
            Category::CodeStyle,
            Category::Configuration,
        ]
    );
}

#[test]
fn serializes_with_camel_case_keys() {
    let recs = build(&[issue(Category::CodeStyle, Severity::Info)]);
    let value = serde_json::to_value(&recs[0]).unwrap();

    assert_eq!(value["category"], "code-style");
    assert_eq!(value["issueCount"], 1);
    assert_eq!(value["dominantSeverity"], "info");
    assert_eq!(value["priority"], 1);
    assert!(value["suggestedActions"].is_array());
}
