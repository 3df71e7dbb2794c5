use crate::cli::{Cli, ReportArgs};
use crate::error::Result;
use crate::output::{ReportEmitter, write_report};
use crate::EXIT_SUCCESS;

use super::context::{report_failure, run_validation};

#[must_use]
pub fn run_report(args: &ReportArgs, cli: &Cli) -> i32 {
    match run_report_impl(args, cli) {
        Ok(score) => {
            if !cli.quiet {
                println!(
                    "Report written to {} (score {score}/100)",
                    args.output.display()
                );
            }
            EXIT_SUCCESS
        }
        Err(e) => report_failure(cli, &e),
    }
}

/// Validates the project and writes the JSON report to `args.output`.
/// Returns the score that was written.
///
/// # Errors
/// Returns an error if validation fails or the report file cannot be written.
pub fn run_report_impl(args: &ReportArgs, cli: &Cli) -> Result<u32> {
    let run = run_validation(cli, &args.path)?;
    let report = ReportEmitter::new().emit(&run.result);
    write_report(&report, &args.output)?;
    Ok(report.project.score)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
