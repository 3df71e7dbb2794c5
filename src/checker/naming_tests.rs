use super::*;

fn snapshot(dirs: &[&str], files: &[&str]) -> ProjectSnapshot {
    let mut s = ProjectSnapshot::empty("/work/app");
    s.directories = dirs.iter().map(|d| (*d).to_string()).collect();
    s.files = files.iter().map(|f| (*f).to_string()).collect();
    s
}

#[test]
fn compliant_names_produce_nothing() {
    let snap = snapshot(
        &["src", "src/user-profile"],
        &["src/user-profile/avatar-card.tsx", "src/index.ts"],
    );
    assert!(check(&snap, &StandardsModel::default()).is_empty());
}

#[test]
fn pascal_case_file_gets_kebab_rename() {
    let snap = snapshot(&["src"], &["src/MyComponent.ts"]);
    let issues = check(&snap, &StandardsModel::default());

    assert_eq!(issues.len(), 1);
    let issue = &issues[0];
    assert_eq!(issue.category, Category::Naming);
    assert_eq!(issue.severity, Severity::Warning);
    assert_eq!(issue.target_path.as_deref(), Some("src/MyComponent.ts"));
    assert_eq!(
        issue.remedy,
        Some(Remedy::Rename {
            from: "src/MyComponent.ts".to_string(),
            to: "src/my-component.ts".to_string(),
        })
    );
    assert!(issue.suggestion.as_deref().unwrap().contains("my-component.ts"));
}

#[test]
fn only_the_stem_before_the_first_dot_is_checked() {
    let snap = snapshot(&[], &["UserCard.test.tsx", "user-card.Stories.tsx"]);
    let issues = check(&snap, &StandardsModel::default());

    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].remedy,
        Some(Remedy::Rename {
            from: "UserCard.test.tsx".to_string(),
            to: "user-card.test.tsx".to_string(),
        })
    );
}

#[test]
fn dot_files_and_exempt_names_are_skipped() {
    let snap = snapshot(
        &[".github", "__tests__"],
        &[".eslintrc.json", "README.md", "Dockerfile", ".github/CODEOWNERS"],
    );
    let issues = check(&snap, &StandardsModel::default());

    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].target_path.as_deref(), Some(".github/CODEOWNERS"));
}

#[test]
fn directories_come_before_files_in_traversal_order() {
    let snap = snapshot(
        &["Components", "Components/SharedUi"],
        &["Components/Button.ts", "AppRoot.ts"],
    );
    let issues = check(&snap, &StandardsModel::default());

    let targets: Vec<_> = issues
        .iter()
        .map(|i| i.target_path.clone().unwrap())
        .collect();
    assert_eq!(
        targets,
        vec![
            "Components",
            "Components/SharedUi",
            "Components/Button.ts",
            "AppRoot.ts"
        ]
    );
    assert_eq!(
        issues[1].remedy,
        Some(Remedy::Rename {
            from: "Components/SharedUi".to_string(),
            to: "Components/shared-ui".to_string(),
        })
    );
}

#[test]
fn directory_casing_is_independent_of_file_casing() {
    let mut model = StandardsModel::default();
    model.naming_rules.directory_casing = Casing::Snake;

    let snap = snapshot(&["user-data"], &["user-data/load-all.ts"]);
    let issues = check(&snap, &model);

    assert_eq!(issues.len(), 1);
    assert_eq!(
        issues[0].remedy,
        Some(Remedy::Rename {
            from: "user-data".to_string(),
            to: "user_data".to_string(),
        })
    );
}

#[test]
fn unconvertible_name_is_reported_without_remedy() {
    let snap = snapshot(&[], &["___.ts"]);
    let issues = check(&snap, &StandardsModel::default());

    assert_eq!(issues.len(), 1);
    assert!(issues[0].remedy.is_none());
    assert!(issues[0].suggestion.is_none());
}
