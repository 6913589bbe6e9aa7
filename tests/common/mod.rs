#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the report-guard binary.
#[macro_export]
macro_rules! report_guard {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("report-guard"));
        cmd.env_remove("REPORT_GUARD_INPUT").env_remove("NO_COLOR");
        cmd
    }};
}

/// The generated summary page with every expected construct present.
pub const SUMMARY_REPORT: &str = include_str!("../fixtures/summary_report.html");

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content and returns its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Writes the full summary report as `index.html`.
    pub fn create_report(&self) -> PathBuf {
        self.create_file("index.html", SUMMARY_REPORT)
    }

    /// Writes the summary report with `from` replaced by `to`.
    pub fn create_report_with(&self, from: &str, to: &str) -> PathBuf {
        assert!(SUMMARY_REPORT.contains(from), "fixture lacks {from:?}");
        self.create_file("index.html", &SUMMARY_REPORT.replace(from, to))
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
