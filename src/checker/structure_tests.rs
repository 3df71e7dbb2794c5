use indexmap::IndexMap;

use super::*;
use crate::analyzer::UnreadableEntry;

fn snapshot(dirs: &[&str], files: &[&str]) -> ProjectSnapshot {
    let mut s = ProjectSnapshot::empty("/work/app");
    s.directories = dirs.iter().map(|d| (*d).to_string()).collect();
    s.files = files.iter().map(|f| (*f).to_string()).collect();
    s.max_depth = s
        .directories
        .iter()
        .chain(&s.files)
        .map(|p| p.split('/').count())
        .max()
        .unwrap_or(0);
    s
}

fn standards() -> StandardsModel {
    let mut model = StandardsModel::default();
    model.structure_rules.required_directories =
        IndexMap::from([("src".to_string(), "application code".to_string())]);
    model
}

#[test]
fn complete_project_has_no_structure_issues() {
    let snap = snapshot(&["src"], &["README.md", "package.json"]);
    assert!(check(&snap, &standards()).is_empty());
}

#[test]
fn missing_required_directory_is_warning_with_create_remedy() {
    let snap = snapshot(&[], &["README.md", "package.json"]);
    let issues = check(&snap, &standards());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].target_path.as_deref(), Some("src"));
    assert!(issues[0].message.contains("application code"));
    assert_eq!(
        issues[0].remedy,
        Some(Remedy::CreateDirectory {
            path: "src".to_string()
        })
    );
}

#[test]
fn missing_required_files_are_errors_in_configured_order() {
    let snap = snapshot(&["src"], &[]);
    let issues = check(&snap, &standards());

    let targets: Vec<_> = issues.iter().map(|i| i.target_path.as_deref()).collect();
    assert_eq!(targets, vec![Some("README.md"), Some("package.json")]);
    assert!(issues.iter().all(|i| i.severity == Severity::Error));
    assert_eq!(
        issues[0].suggestion.as_deref(),
        Some("create `README.md` from the built-in template")
    );
}

#[test]
fn nested_required_file_is_matched_by_relative_path() {
    let mut model = standards();
    model.structure_rules.required_files.insert("docs/guide.md".to_string());

    let snap = snapshot(&["src", "docs"], &["README.md", "package.json", "docs/guide.md"]);
    assert!(check(&snap, &model).is_empty());
}

#[test]
fn missing_recommended_file_is_info() {
    let mut model = standards();
    model
        .structure_rules
        .recommended_files
        .insert("CHANGELOG.md".to_string());

    let snap = snapshot(&["src"], &["README.md", "package.json"]);
    let issues = check(&snap, &model);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Info);
}

#[test]
fn excessive_depth_yields_a_single_warning() {
    let mut model = standards();
    model.structure_rules.max_depth = 2;

    let snap = snapshot(
        &["src", "src/a", "src/a/b", "src/a/b/c"],
        &["README.md", "package.json", "src/a/b/x.ts", "src/a/b/c/y.ts"],
    );
    let issues = check(&snap, &model);

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert!(issues[0].message.contains("depth 5"));
    assert_eq!(issues[0].target_path.as_deref(), Some("src/a/b/c/y.ts"));
}

#[test]
fn depth_at_limit_is_fine() {
    let mut model = standards();
    model.structure_rules.max_depth = 2;

    let snap = snapshot(&["src"], &["README.md", "package.json", "src/index.ts"]);
    assert!(check(&snap, &model).is_empty());
}

#[test]
fn unreadable_entries_become_warnings() {
    let mut snap = snapshot(&["src"], &["README.md", "package.json"]);
    snap.unreadable.push(UnreadableEntry {
        path: "secret".to_string(),
        reason: "permission denied".to_string(),
    });

    let issues = check(&snap, &standards());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].message, "Could not read `secret`: permission denied");
    assert!(issues[0].remedy.is_none());
}
