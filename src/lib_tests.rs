use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_eq!(EXIT_SUCCESS, 0);
    assert_eq!(EXIT_CONFIG_ERROR, 2);
}

#[test]
fn crate_root_reexports_pipeline() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("README.md"), "# x\n").unwrap();
    let settings = standards::Settings::default();
    let analyzer = analyzer::ProjectAnalyzer::new(&settings).unwrap();

    let result: Result<ValidationResult> = validate(&analyzer, &settings.standards, dir.path());

    assert!(result.unwrap().score <= score::MAX_SCORE);
}
