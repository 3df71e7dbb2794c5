use std::path::PathBuf;

use super::*;

#[test]
fn error_display_path_not_found() {
    let err = GuardError::PathNotFound(PathBuf::from("missing/project"));
    assert_eq!(
        err.to_string(),
        "Path not found or not a directory: missing/project"
    );
}

#[test]
fn error_display_config() {
    let err = GuardError::Config("unknown preset".to_string());
    assert_eq!(err.to_string(), "Configuration error: unknown preset");
}

#[test]
fn error_display_config_parse_names_file() {
    let err = GuardError::ConfigParse {
        file: "tsconfig.json".to_string(),
        message: "expected value at line 1".to_string(),
    };
    assert!(err.to_string().contains("tsconfig.json"));
    assert!(err.to_string().contains("line 1"));
}

#[test]
fn error_display_fix_application() {
    let err = GuardError::FixApplication {
        path: PathBuf::from("src/my-component.ts"),
        reason: "destination already exists".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Cannot apply fix to src/my-component.ts: destination already exists"
    );
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        GuardError::PathNotFound(PathBuf::from("x")).error_type(),
        "PathNotFound"
    );
    assert_eq!(GuardError::Interrupted.error_type(), "Interrupted");
    assert_eq!(
        GuardError::FormatterInvocation("exit 1".to_string()).error_type(),
        "FormatterInvocation"
    );
    assert_eq!(
        GuardError::Io(std::io::Error::other("boom")).error_type(),
        "IO"
    );
}

#[test]
fn suggestion_path_not_found() {
    let err = GuardError::PathNotFound(PathBuf::from("nowhere"));
    assert!(err.suggestion().unwrap().contains("existing project directory"));
}

#[test]
fn suggestion_permission_denied() {
    let err = GuardError::Io(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "denied",
    ));
    assert!(err.suggestion().unwrap().contains("permissions"));
}

#[test]
fn suggestion_other_io_error_has_none() {
    let err = GuardError::Io(std::io::Error::other("unknown error"));
    assert!(err.suggestion().is_none());
}

#[test]
fn io_error_converts_via_from() {
    fn fails() -> Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
        Ok(())
    }
    assert!(matches!(fails(), Err(GuardError::Io(_))));
}
