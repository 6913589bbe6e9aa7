//! Error and diagnostic output on stderr.
//!
//! Format: `✖ ErrorType: message` / `  × detail` / `  help: suggestion`

use std::io::{IsTerminal, Write};

use crate::error::ReportGuardError;

use super::{ColorMode, ansi, is_no_color_set};

/// Error output formatter with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        let use_colors = match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => !is_no_color_set() && std::io::stderr().is_terminal(),
        };
        Self { use_colors }
    }

    /// Prints a fatal error with its detail and suggestion, if any.
    pub fn print_error(&self, err: &ReportGuardError) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, err);
    }

    /// Prints a diagnostic line (verbose mode).
    pub fn print_info(&self, message: &str) {
        let mut stderr = std::io::stderr().lock();
        self.write_info(&mut stderr, message);
    }

    /// Writes error to a writer (for testing).
    pub fn write_error<W: Write>(&self, w: &mut W, err: &ReportGuardError) {
        // stderr write failures are not recoverable here; ignore them
        let error_type = err.error_type();
        let message = err.message();
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

        if let Some(d) = err.detail() {
            if self.use_colors {
                writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET).ok();
            } else {
                writeln!(w, "  × {d}").ok();
            }
        }

        if let Some(s) = err.suggestion() {
            if self.use_colors {
                writeln!(w, "  {}help:{} {s}", ansi::CYAN, ansi::RESET).ok();
            } else {
                writeln!(w, "  help: {s}").ok();
            }
        }
    }

    /// Writes a diagnostic line to a writer (for testing).
    pub fn write_info<W: Write>(&self, w: &mut W, message: &str) {
        if self.use_colors {
            writeln!(w, "{}{message}{}", ansi::DIM, ansi::RESET).ok();
        } else {
            writeln!(w, "{message}").ok();
        }
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
