use std::fmt::Write;

use crate::checker::{CheckResult, Summary};

use super::{ColorMode, ansi, is_no_color_set};

pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if is_no_color_set() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    const fn status_icon(result: &CheckResult) -> &'static str {
        match result {
            CheckResult::Passed { .. } => "✓",
            CheckResult::Failed { .. } => "✗",
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &CheckResult, output: &mut String) {
        let color = match result {
            CheckResult::Passed { .. } => ansi::GREEN,
            CheckResult::Failed { .. } => ansi::RED,
        };
        let icon = self.colorize(Self::status_icon(result), color);

        writeln!(output, "{icon} {}", result.message()).ok();
    }

    fn format_summary(&self, summary: &Summary) -> String {
        let passed = self.colorize(&summary.passed.to_string(), ansi::GREEN);
        let failed = self.colorize(&summary.failed.to_string(), ansi::RED);

        format!(
            "Summary: {} checks, {passed} passed, {failed} failed",
            summary.total
        )
    }

    /// Render the transcript: one marker line per result, in order, then the summary.
    #[must_use]
    pub fn format(&self, results: &[CheckResult]) -> String {
        let mut output = String::new();

        for result in results {
            self.format_result(result, &mut output);
        }

        let summary = Summary::from_results(results);
        writeln!(output, "{}", self.format_summary(&summary)).ok();

        output
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
