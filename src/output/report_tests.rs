use std::path::PathBuf;

use tempfile::TempDir;
use time::macros::datetime;

use super::*;
use crate::analyzer::ProjectSnapshot;
use crate::checker::{Category, Severity};
use crate::standards::StandardsModel;

fn result_with_issues() -> ValidationResult {
    let mut snapshot = ProjectSnapshot::empty(PathBuf::from("/work/shop"));
    snapshot.files = vec!["MyComponent.ts".to_string()];
    snapshot.directories = vec!["src".to_string()];
    snapshot.total_size = 2048;
    ValidationResult::evaluate(snapshot, &StandardsModel::default())
}

#[test]
fn human_size_units() {
    assert_eq!(human_size(0), "0 B");
    assert_eq!(human_size(1023), "1023 B");
    assert_eq!(human_size(1024), "1.0 KB");
    assert_eq!(human_size(1536), "1.5 KB");
    assert_eq!(human_size(5 * 1024 * 1024), "5.0 MB");
    assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3.0 GB");
}

#[test]
fn report_carries_project_and_analysis_summary() {
    let result = result_with_issues();
    let report = ReportEmitter::new().emit_at(&result, datetime!(2026-03-01 12:00 UTC));

    assert_eq!(report.project.name, "shop");
    assert_eq!(report.project.score, result.score);
    assert_eq!(report.analysis.files, 1);
    assert_eq!(report.analysis.directories, 1);
    assert_eq!(report.analysis.size, "2.0 KB");
    assert_eq!(report.issues, result.issues);
}

#[test]
fn json_shape_matches_report_schema() {
    let result = result_with_issues();
    let report = ReportEmitter::new().emit_at(&result, datetime!(2026-03-01 12:00 UTC));
    let value = serde_json::to_value(&report).unwrap();

    assert_eq!(value["project"]["name"], "shop");
    assert_eq!(value["project"]["type"], "unknown");
    assert!(value["project"]["score"].is_u64());
    assert_eq!(value["analysis"]["size"], "2.0 KB");
    assert_eq!(value["generated"], "2026-03-01T12:00:00Z");

    let issue = &value["issues"][0];
    assert_eq!(issue["category"], "structure");
    assert_eq!(issue["severity"], "error");
    assert_eq!(issue["targetPath"], "README.md");
    assert!(issue.get("remedy").is_none());

    assert_eq!(value["recommendations"][0]["priority"], 3);
}

#[test]
fn empty_result_still_emits() {
    let snapshot = ProjectSnapshot::empty(PathBuf::from("/work/empty"));
    let result = ValidationResult {
        snapshot,
        issues: Vec::new(),
        score: 100,
        recommendations: Vec::new(),
    };

    let value = serde_json::to_value(ReportEmitter::new().emit(&result)).unwrap();

    assert_eq!(value["issues"], serde_json::json!([]));
    assert_eq!(value["recommendations"], serde_json::json!([]));
    assert_eq!(value["project"]["score"], 100);
}

#[test]
fn write_report_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out/reports/consistency-report.json");
    let report = ReportEmitter::new().emit(&result_with_issues());

    write_report(&report, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["project"]["name"], "shop");
}

#[test]
fn issue_order_is_kept() {
    let result = result_with_issues();
    let report = ReportEmitter::new().emit(&result);
    let categories: Vec<_> = report.issues.iter().map(|i| i.category).collect();

    assert_eq!(
        categories,
        vec![Category::Structure, Category::Structure, Category::Naming]
    );
    assert!(report.issues.iter().all(|i| i.severity != Severity::Info));
}
