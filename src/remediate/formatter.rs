use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::error::{GuardError, Result};

/// Exit status and wall time of one formatter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatResult {
    pub exit_code: i32,
    pub duration_ms: u64,
}

impl FormatResult {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.exit_code == 0
    }
}

/// Capability to run the project's formatter over a root directory.
///
/// The formatter is a black box: only its exit status matters, its output is
/// never parsed.
pub trait FormatCommand {
    /// # Errors
    /// Returns `FormatterInvocation` if the formatter cannot be started.
    fn run(&self, root: &Path) -> Result<FormatResult>;
}

/// Runs a configured program with the project root as working directory.
#[derive(Debug, Clone, Default)]
pub struct ProcessFormatter {
    command: Vec<String>,
}

impl ProcessFormatter {
    #[must_use]
    pub const fn new(command: Vec<String>) -> Self {
        Self { command }
    }
}

impl FormatCommand for ProcessFormatter {
    fn run(&self, root: &Path) -> Result<FormatResult> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(GuardError::FormatterInvocation(
                "no formatter command configured".to_string(),
            ));
        };

        let start = Instant::now();
        let status = Command::new(program)
            .args(args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| GuardError::FormatterInvocation(format!("failed to start `{program}`: {e}")))?;

        Ok(FormatResult {
            exit_code: status.code().unwrap_or(-1),
            duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        })
    }
}

#[cfg(test)]
#[path = "formatter_tests.rs"]
mod tests;
