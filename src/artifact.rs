use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReportGuardError, Result};

/// The full text of the report under test.
///
/// Loaded once and never mutated; checks only borrow `content`.
#[derive(Debug, Clone)]
pub struct Artifact {
    path: PathBuf,
    content: String,
}

impl Artifact {
    /// Read the whole file at `path`.
    ///
    /// # Errors
    /// Returns `FileAccess` if the file is missing, unreadable, or not UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ReportGuardError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// Wrap in-memory text, labelled with a synthetic path.
    #[must_use]
    pub fn from_text(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.content.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
