use super::*;

#[test]
fn package_json_splits_production_and_development() {
    let value = serde_json::json!({
        "name": "shop-front",
        "dependencies": { "react": "^18.2.0", "axios": "1.6.0" },
        "devDependencies": { "typescript": "~5.3.0" }
    });

    let manifest = parse_package_json(&value);

    assert_eq!(manifest.name.as_deref(), Some("shop-front"));
    assert_eq!(manifest.dependencies.production.len(), 2);
    assert_eq!(manifest.dependencies.production["react"], "^18.2.0");
    assert_eq!(manifest.dependencies.development["typescript"], "~5.3.0");
}

#[test]
fn package_json_without_dependency_sections_is_empty() {
    let manifest = parse_package_json(&serde_json::json!({ "name": "bare" }));
    assert!(manifest.dependencies.is_empty());
}

#[test]
fn cargo_toml_reads_string_and_table_specs() {
    let content = r#"
[package]
name = "engine"

[dependencies]
serde = "1"
axum = { version = "0.7", features = ["macros"] }
local = { path = "../local" }

[dev-dependencies]
tempfile = "3"
"#;

    let manifest = parse_cargo_toml(content).unwrap();

    assert_eq!(manifest.name.as_deref(), Some("engine"));
    assert_eq!(manifest.dependencies.production["serde"], "1");
    assert_eq!(manifest.dependencies.production["axum"], "0.7");
    assert_eq!(manifest.dependencies.production["local"], "*");
    assert_eq!(manifest.dependencies.development["tempfile"], "3");
}

#[test]
fn malformed_cargo_toml_yields_none() {
    assert!(parse_cargo_toml("[package\nname=").is_none());
}

#[test]
fn requirements_parse_names_and_specifiers() {
    let content = "\
# core
numpy==1.26.0
pandas>=2.0  # data frames
torch
requests[security]~=2.31
-r dev-requirements.txt
scipy; python_version > '3.8'
";

    let manifest = parse_requirements(content);
    let deps = &manifest.dependencies.production;

    assert_eq!(deps["numpy"], "==1.26.0");
    assert_eq!(deps["pandas"], ">=2.0");
    assert_eq!(deps["torch"], "*");
    assert_eq!(deps["requests"], "~=2.31");
    assert_eq!(deps["scipy"], "*");
    assert_eq!(deps.len(), 5);
}
