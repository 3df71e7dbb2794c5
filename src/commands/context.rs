use std::path::Path;

use crate::analyzer::ProjectAnalyzer;
use crate::cli::{Cli, ColorChoice};
use crate::error::{GuardError, Result};
use crate::output::{ColorMode, ErrorOutput, ScanProgress};
use crate::standards::{LoadResult, Settings, StandardsLoader};
use crate::validation::{self, ValidationResult};
use crate::EXIT_CONFIG_ERROR;

#[must_use]
pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load standards for `project_root` honoring `--config`, `--preset` and `--no-config`.
///
/// # Errors
/// Returns an error if the standards document is missing, malformed or names
/// an unknown preset.
pub fn load_settings(cli: &Cli, project_root: &Path) -> Result<LoadResult> {
    let loader = StandardsLoader::new().with_preset(cli.preset.clone());

    if cli.no_config {
        loader.load_defaults()
    } else if let Some(path) = &cli.config {
        loader.load_from_path(path)
    } else {
        loader.load(project_root)
    }
}

/// Everything a command needs after a validation run.
pub struct ValidationRun {
    pub settings: Settings,
    pub result: ValidationResult,
}

/// Load standards and validate the project at `root`.
///
/// # Errors
/// Returns `PathNotFound` for a missing root and configuration errors from
/// loading the standards.
pub fn run_validation(cli: &Cli, root: &Path) -> Result<ValidationRun> {
    if !root.is_dir() {
        return Err(GuardError::PathNotFound(root.to_path_buf()));
    }

    let diagnostics = ErrorOutput::new(color_choice_to_mode(cli.color));
    let loaded = load_settings(cli, root)?;

    if cli.verbose > 0 {
        let source = loaded.source.as_ref().map_or_else(
            || "built-in standards".to_string(),
            |path| path.display().to_string(),
        );
        diagnostics.print_note(&format!("Loaded standards from {source}"));
        if let Some(preset) = &loaded.settings.preset {
            diagnostics.print_note(&format!("Using preset '{preset}'"));
        }
    }

    let progress = ScanProgress::new(cli.quiet);
    let analyzer = ProjectAnalyzer::new(&loaded.settings)?.with_progress(progress.clone());
    let outcome = validation::validate(&analyzer, &loaded.settings.standards, root);
    progress.finish();
    let result = outcome?;

    if cli.verbose > 0 {
        let snapshot = &result.snapshot;
        diagnostics.print_note(&format!(
            "Scanned {} files and {} directories ({} entries walked, {} type)",
            snapshot.files.len(),
            snapshot.directories.len(),
            progress.position(),
            snapshot.project_type
        ));
    }
    if !cli.quiet {
        for entry in &result.snapshot.unreadable {
            diagnostics.print_warning_with_detail(
                &format!("Skipped unreadable entry `{}`", entry.path),
                Some(&entry.reason),
                None,
            );
        }
    }

    Ok(ValidationRun {
        settings: loaded.settings,
        result,
    })
}

/// Print a command failure and map it to the configuration-error exit code.
pub(crate) fn report_failure(cli: &Cli, error: &GuardError) -> i32 {
    let suggestion = error.suggestion();
    ErrorOutput::new(color_choice_to_mode(cli.color)).print_error_with_detail(
        error.error_type(),
        &error.to_string(),
        None,
        suggestion.as_deref(),
    );
    EXIT_CONFIG_ERROR
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
