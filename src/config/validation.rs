//! Configuration semantic validation.
//!
//! Runs after parsing; rejects values that would turn a check into a no-op.

use crate::config::Config;
use crate::{ReportGuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a conversion factor is zero, the column list is empty,
/// or a column label is blank.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    if config.rub_rate == 0 {
        return Err(ReportGuardError::Config(
            "rub_rate must be greater than 0".to_string(),
        ));
    }

    if config.time_divisor == 0 {
        return Err(ReportGuardError::Config(
            "time_divisor must be greater than 0".to_string(),
        ));
    }

    if config.columns.is_empty() {
        return Err(ReportGuardError::Config(
            "columns must list at least one label".to_string(),
        ));
    }

    if let Some(index) = config.columns.iter().position(|c| c.trim().is_empty()) {
        return Err(ReportGuardError::Config(format!(
            "columns[{index}] must not be empty"
        )));
    }

    Ok(())
}
