//! Colored error and warning diagnostics on stderr.
//!
//! Format: `✖ ErrorType: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use super::{ColorMode, ansi, no_color_set};

pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => Self::stderr_supports_color(),
        };
        Self { use_colors }
    }

    fn stderr_supports_color() -> bool {
        !no_color_set() && std::io::stderr().is_terminal()
    }

    pub fn print_error_with_detail(
        &self,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, error_type, message, detail, suggestion);
    }

    pub fn print_warning_with_detail(
        &self,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        let mut stderr = std::io::stderr().lock();
        self.write_warning(&mut stderr, message, detail, suggestion);
    }

    /// Notes shown in verbose mode.
    pub fn print_note(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_note(&mut stderr, message);
    }

    pub fn write_error<W: Write>(
        &self,
        w: &mut W,
        error_type: &str,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        // Failing to write a diagnostic to stderr is not itself reportable.
        if self.use_colors {
            writeln!(
                w,
                "{}{}✖ {error_type}:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            )
            .ok();
        } else {
            writeln!(w, "✖ {error_type}: {message}").ok();
        }
        self.write_tail(w, detail, suggestion);
    }

    pub fn write_warning<W: Write>(
        &self,
        w: &mut W,
        message: &str,
        detail: Option<&str>,
        suggestion: Option<&str>,
    ) {
        if self.use_colors {
            writeln!(
                w,
                "{}{}⚠ Warning:{} {message}",
                ansi::BOLD,
                ansi::YELLOW,
                ansi::RESET
            )
            .ok();
        } else {
            writeln!(w, "⚠ Warning: {message}").ok();
        }
        self.write_tail(w, detail, suggestion);
    }

    pub fn write_note<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            writeln!(w, "{}· {message}{}", ansi::DIM, ansi::RESET).ok();
        } else {
            writeln!(w, "· {message}").ok();
        }
    }

    fn write_tail<W: Write>(&self, w: &mut W, detail: Option<&str>, suggestion: Option<&str>) {
        if let Some(d) = detail {
            if self.use_colors {
                writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET).ok();
            } else {
                writeln!(w, "  × {d}").ok();
            }
        }

        if let Some(s) = suggestion {
            if self.use_colors {
                writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET).ok();
            } else {
                writeln!(w, "  help: {s}").ok();
            }
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
