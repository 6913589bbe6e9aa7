use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "report-guard")]
#[command(
    author,
    version,
    about = "Verify a generated LLM summary report contains its expected data and scripts"
)]
#[command(long_about = "Checks a generated HTML summary report for its embedded data blocks, \
    table population script, column headers and conversion constants.\n\n\
    Exit codes:\n  \
    0 - All checks passed (or --warn-only)\n  \
    1 - At least one expected construct not found\n  \
    2 - Report or configuration could not be loaded")]
pub struct Cli {
    /// Path to the generated HTML report
    #[arg(env = "REPORT_GUARD_INPUT")]
    pub report: PathBuf,

    /// TOML file overriding the conversion constants and column labels
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Always exit 0 when the report was read, even if checks fail
    #[arg(long)]
    pub warn_only: bool,

    /// Increase diagnostic output on stderr (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the transcript; only the exit code reports the outcome
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
