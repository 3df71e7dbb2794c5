use crate::cli::{Cli, ValidateArgs};
use crate::error::Result;
use crate::output::{JsonFormatter, OutputFormat, ReportEmitter, ReportFormatter, TextFormatter};
use crate::EXIT_SUCCESS;

use super::context::{color_choice_to_mode, report_failure, run_validation};

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match run_validate_impl(args, cli) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => report_failure(cli, &e),
    }
}

/// Validates the project and renders the report in the requested format.
///
/// # Errors
/// Returns an error if the path does not exist or the standards cannot be loaded.
pub fn run_validate_impl(args: &ValidateArgs, cli: &Cli) -> Result<String> {
    let run = run_validation(cli, &args.path)?;
    let report = ReportEmitter::new().emit(&run.result);

    match args.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
                .format(&report)
        }
        OutputFormat::Json => {
            let mut json = JsonFormatter.format(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
