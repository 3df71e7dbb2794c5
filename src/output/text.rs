use std::fmt::Write;

use crate::checker::{Issue, Severity};
use crate::error::Result;
use crate::remediate::{AppliedFix, FixOutcome};

use super::{ColorMode, Report, ReportFormatter, ansi, no_color_set};

/// Recommendations shown in the summary unless verbose.
const TOP_RECOMMENDATIONS: usize = 3;

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                !no_color_set() && std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    const fn severity_style(severity: Severity) -> (&'static str, &'static str) {
        match severity {
            Severity::Error => ("✖", ansi::RED),
            Severity::Warning => ("⚠", ansi::YELLOW),
            Severity::Info => ("ℹ", ansi::CYAN),
        }
    }

    const fn score_color(score: u32) -> &'static str {
        match score {
            80.. => ansi::GREEN,
            50..80 => ansi::YELLOW,
            _ => ansi::RED,
        }
    }

    fn format_issue(&self, issue: &Issue, out: &mut String) {
        let (icon, color) = Self::severity_style(issue.severity);
        let label = self.paint(&format!("{icon} {:<7}", issue.severity.as_str()), color);
        writeln!(out, "  {label} [{}] {}", issue.category, issue.message).ok();
        if let Some(suggestion) = &issue.suggestion {
            writeln!(out, "            {} {suggestion}", self.paint("help:", ansi::CYAN)).ok();
        }
    }

    fn format_summary(&self, report: &Report, out: &mut String) {
        let count = |s: Severity| report.issues.iter().filter(|i| i.severity == s).count();
        let errors = self.paint(&count(Severity::Error).to_string(), ansi::RED);
        let warnings = self.paint(&count(Severity::Warning).to_string(), ansi::YELLOW);
        let infos = self.paint(&count(Severity::Info).to_string(), ansi::CYAN);

        writeln!(
            out,
            "Summary: {errors} errors, {warnings} warnings, {infos} info \
             ({} files, {} directories, {})",
            report.analysis.files, report.analysis.directories, report.analysis.size
        )
        .ok();

        let score = report.project.score;
        writeln!(
            out,
            "Score: {}",
            self.paint(&format!("{score}/100"), Self::score_color(score))
        )
        .ok();
    }

    fn format_recommendations(&self, report: &Report, out: &mut String) {
        if report.recommendations.is_empty() {
            return;
        }

        let shown = if self.verbose > 0 {
            report.recommendations.len()
        } else {
            TOP_RECOMMENDATIONS
        };

        writeln!(out, "\nTop recommendations:").ok();
        for (idx, rec) in report.recommendations.iter().take(shown).enumerate() {
            let (_, color) = Self::severity_style(rec.dominant_severity);
            writeln!(
                out,
                "  {}. {} ({} {}, priority {})",
                idx + 1,
                self.paint(rec.category.as_str(), color),
                rec.issue_count,
                if rec.issue_count == 1 { "issue" } else { "issues" },
                rec.priority
            )
            .ok();
            for action in &rec.suggested_actions {
                writeln!(out, "     - {action}").ok();
            }
        }
    }

    /// One line per attempted fix, followed by a tally.
    #[must_use]
    pub fn format_fixes(&self, fixes: &[AppliedFix]) -> String {
        let mut out = String::new();
        if fixes.is_empty() {
            writeln!(out, "No fixes applied.").ok();
            return out;
        }

        for fix in fixes {
            let status = match &fix.outcome {
                FixOutcome::Applied => self.paint("✓ applied", ansi::GREEN),
                FixOutcome::Skipped(reason) => {
                    self.paint(&format!("- skipped ({reason})"), ansi::YELLOW)
                }
                FixOutcome::Failed(reason) => {
                    self.paint(&format!("✗ failed ({reason})"), ansi::RED)
                }
            };
            writeln!(out, "  {:<16} {}  {status}", fix.kind.as_str(), fix.target).ok();
        }

        let applied = fixes.iter().filter(|f| f.is_applied()).count();
        let failed = fixes.iter().filter(|f| f.is_failed()).count();
        writeln!(
            out,
            "\nFixes: {applied} applied, {failed} failed, {} skipped",
            fixes.len() - applied - failed
        )
        .ok();
        out
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = String::new();

        writeln!(
            out,
            "Project: {} ({})",
            report.project.name, report.project.project_type
        )
        .ok();
        writeln!(out, "Path: {}", report.project.path).ok();

        if report.issues.is_empty() {
            writeln!(out, "\n{}", self.paint("No issues found.", ansi::GREEN)).ok();
        } else {
            writeln!(out, "\nIssues:").ok();
            for issue in &report.issues {
                self.format_issue(issue, &mut out);
            }
        }

        out.push('\n');
        self.format_summary(report, &mut out);
        self.format_recommendations(report, &mut out);

        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
