use crate::cli::{Cli, FixArgs};
use crate::error::Result;
use crate::output::{ErrorOutput, TextFormatter};
use crate::remediate::{AppliedFix, FixOptions, ProcessFormatter, Remediator};
use crate::EXIT_SUCCESS;

use super::context::{color_choice_to_mode, report_failure, run_validation};

/// What a fix run changed, with the score before and after.
#[derive(Debug)]
pub struct FixSummary {
    pub fixes: Vec<AppliedFix>,
    pub score_before: u32,
    pub score_after: u32,
}

#[must_use]
pub fn run_fix(args: &FixArgs, cli: &Cli) -> i32 {
    let mode = color_choice_to_mode(cli.color);
    if !fix_options(args).any() && !cli.quiet {
        ErrorOutput::new(mode).print_warning_with_detail(
            "No fixes selected",
            None,
            Some("Pass --auto-fix, --create-missing or --format-code"),
        );
    }

    match run_fix_impl(args, cli) {
        Ok(summary) => {
            print!("{}", TextFormatter::new(mode).format_fixes(&summary.fixes));
            if !cli.quiet {
                println!(
                    "Score: {}/100 -> {}/100",
                    summary.score_before, summary.score_after
                );
            }
            EXIT_SUCCESS
        }
        Err(e) => report_failure(cli, &e),
    }
}

#[must_use]
pub const fn fix_options(args: &FixArgs) -> FixOptions {
    FixOptions {
        auto_rename_naming: args.auto_fix,
        scaffold_missing_files: args.create_missing,
        invoke_formatter: args.format_code,
    }
}

/// Validates the project, applies the selected fixes, then validates again.
///
/// Individual fix failures are recorded in the summary rather than returned.
///
/// # Errors
/// Returns an error if the path does not exist or the standards cannot be loaded.
pub fn run_fix_impl(args: &FixArgs, cli: &Cli) -> Result<FixSummary> {
    let before = run_validation(cli, &args.path)?;
    let options = fix_options(args);
    if !options.any() {
        return Ok(FixSummary {
            fixes: Vec::new(),
            score_before: before.result.score,
            score_after: before.result.score,
        });
    }

    let formatter = ProcessFormatter::new(before.settings.formatter.command.clone());
    let fixes = Remediator::new(&before.settings.standards, formatter, options)
        .apply(&before.result.snapshot, &before.result.issues);

    let after = run_validation(cli, &args.path)?;
    Ok(FixSummary {
        fixes,
        score_before: before.result.score,
        score_after: after.result.score,
    })
}

#[cfg(test)]
#[path = "fix_tests.rs"]
mod tests;
