//! Checks for the LLM cost/time summary page.
//!
//! The page embeds its data as JavaScript literals and fills the summary
//! table on `DOMContentLoaded`. Identifiers and record markers below are the
//! exact text the page generator writes.

use crate::config::Config;
use crate::error::Result;

use super::{Check, CheckSuite, Rule};

const POPULATE_FUNCTION: &str = "function populateSummaryTable()";
const DOM_READY_LISTENER: &str = "document.addEventListener('DOMContentLoaded'";

/// Build the fixed check sequence, with literal constants taken from `config`.
///
/// Order: embedded data blocks, script hooks, column headers, conversion factors.
///
/// # Errors
/// Returns `InvalidPattern` if a block expression fails to compile.
pub fn summary_report_suite(config: &Config) -> Result<CheckSuite> {
    let mut checks = vec![
        Check::new(
            "csv-data",
            "CSV data",
            Rule::block("csvData", '[', ']', "{ model_permaslug:", "entries")?,
        ),
        Check::new(
            "html-files",
            "HTML files mapping",
            Rule::block("htmlFiles", '[', ']', "{ filename:", "entries")?,
        ),
        Check::new(
            "model-mapping",
            "Model mapping",
            Rule::block("modelMapping", '{', '}', "': '", "mappings")?,
        ),
        Check::new(
            "populate-summary-table",
            "populateSummaryTable function",
            Rule::literal(POPULATE_FUNCTION),
        ),
        Check::new(
            "dom-ready",
            "DOMContentLoaded event listener",
            Rule::literal(DOM_READY_LISTENER),
        ),
    ];

    checks.extend(
        config
            .columns
            .iter()
            .map(|label| Check::new("column", format!("Column '{label}'"), Rule::literal(label))),
    );

    checks.push(Check::new(
        "rub-conversion",
        format!("USD to RUB conversion (rate {})", config.rub_rate),
        Rule::literal(format!("* {}", config.rub_rate)),
    ));
    checks.push(Check::new(
        "ms-conversion",
        format!("MS to seconds conversion (divisor {})", config.time_divisor),
        Rule::literal(format!("/ {}", config.time_divisor)),
    ));

    Ok(CheckSuite::new(checks))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
