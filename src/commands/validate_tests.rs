use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;

fn quiet_cli() -> Cli {
    Cli::parse_from(["consistency-guard", "--quiet", "--color", "never", "--no-config", "validate"])
}

fn args(path: PathBuf, format: OutputFormat) -> ValidateArgs {
    ValidateArgs { path, format }
}

#[test]
fn text_output_lists_issues_and_score() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("MyComponent.ts"), "export const a = 'x';\n").unwrap();

    let output = run_validate_impl(&args(dir.path().to_path_buf(), OutputFormat::Text), &quiet_cli())
        .unwrap();

    assert!(output.contains("Missing required file `README.md`"));
    assert!(output.contains("MyComponent.ts"));
    assert!(output.contains("Score: "));
}

#[test]
fn json_output_is_a_report() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "# demo\n").unwrap();

    let output = run_validate_impl(&args(dir.path().to_path_buf(), OutputFormat::Json), &quiet_cli())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["analysis"]["files"], 1);
    assert!(value["project"]["score"].as_u64().unwrap() <= 100);
    assert!(value["generated"].is_string());
}

#[test]
fn missing_path_exits_with_config_error() {
    let dir = TempDir::new().unwrap();
    let code = run_validate(
        &args(dir.path().join("missing"), OutputFormat::Text),
        &quiet_cli(),
    );

    assert_eq!(code, crate::EXIT_CONFIG_ERROR);
}

#[test]
fn issues_do_not_change_exit_code() {
    let dir = TempDir::new().unwrap();

    let code = run_validate(&args(dir.path().to_path_buf(), OutputFormat::Json), &quiet_cli());

    assert_eq!(code, EXIT_SUCCESS);
}
