//! Shared report fixtures for unit tests.

/// A generated summary page carrying every expected construct:
/// 3 CSV records, 4 HTML files, 3 model mappings.
pub const SUMMARY_REPORT: &str = include_str!("../tests/fixtures/summary_report.html");

/// `SUMMARY_REPORT` with every occurrence of `from` replaced by `to`.
pub fn report_with(from: &str, to: &str) -> String {
    assert!(
        SUMMARY_REPORT.contains(from),
        "fixture does not contain {from:?}"
    );
    SUMMARY_REPORT.replace(from, to)
}
