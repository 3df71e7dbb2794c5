use tempfile::TempDir;

use super::*;

#[test]
fn empty_command_is_an_invocation_error() {
    let dir = TempDir::new().unwrap();
    let err = ProcessFormatter::default().run(dir.path()).unwrap_err();

    assert!(matches!(err, GuardError::FormatterInvocation(msg) if msg.contains("no formatter")));
}

#[test]
fn missing_program_is_an_invocation_error() {
    let dir = TempDir::new().unwrap();
    let formatter = ProcessFormatter::new(vec!["definitely-not-a-formatter-3f9a".to_string()]);

    let err = formatter.run(dir.path()).unwrap_err();

    assert_eq!(err.error_type(), "FormatterInvocation");
}

#[cfg(unix)]
#[test]
fn reports_exit_status() {
    let dir = TempDir::new().unwrap();

    let ok = ProcessFormatter::new(vec!["true".to_string()])
        .run(dir.path())
        .unwrap();
    assert!(ok.succeeded());

    let failed = ProcessFormatter::new(vec!["false".to_string()])
        .run(dir.path())
        .unwrap();
    assert!(!failed.succeeded());
    assert_eq!(failed.exit_code, 1);
}

#[cfg(unix)]
#[test]
fn runs_in_the_project_root() {
    let dir = TempDir::new().unwrap();
    let formatter = ProcessFormatter::new(vec![
        "sh".to_string(),
        "-c".to_string(),
        "touch formatted.marker".to_string(),
    ]);

    formatter.run(dir.path()).unwrap();

    assert!(dir.path().join("formatted.marker").exists());
}
