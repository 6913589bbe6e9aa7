pub mod artifact;
pub mod checker;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;

#[cfg(test)]
mod test_fixtures;

pub use error::{ReportGuardError, Result};

use checker::Summary;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CHECKS_FAILED: i32 = 1;
pub const EXIT_LOAD_ERROR: i32 = 2;

/// Exit code for a completed run. `warn_only` reports success regardless of misses.
#[must_use]
pub const fn exit_code(summary: &Summary, warn_only: bool) -> i32 {
    if warn_only || summary.all_passed() {
        EXIT_SUCCESS
    } else {
        EXIT_CHECKS_FAILED
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
