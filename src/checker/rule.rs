use regex::Regex;

use crate::error::{ReportGuardError, Result};

/// How a check decides whether its construct is present.
#[derive(Debug, Clone)]
pub enum Rule {
    /// A `const <name> = <open> ... <close>;` assignment spanning any number of
    /// lines. The body is captured lazily (up to the first `<close>;`) and the
    /// non-overlapping occurrences of `record_marker` inside it are counted.
    Block {
        pattern: Regex,
        record_marker: String,
        unit: String,
    },
    /// Exact, case-sensitive substring containment.
    Literal { needle: String },
}

/// Outcome of applying a [`Rule`] to a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMatch {
    Missing,
    Present,
    /// Block found; holds the number of records inside it.
    Counted(usize),
}

impl Rule {
    /// Build a block rule for `const {identifier} = {open}...{close};`.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the assembled expression does not compile.
    pub fn block(
        identifier: &str,
        open: char,
        close: char,
        record_marker: impl Into<String>,
        unit: impl Into<String>,
    ) -> Result<Self> {
        let head = regex::escape(&format!("const {identifier} = {open}"));
        let tail = regex::escape(&format!("{close};"));
        let source = format!("(?s){head}(.*?){tail}");

        let pattern = Regex::new(&source).map_err(|e| ReportGuardError::InvalidPattern {
            pattern: source.clone(),
            source: e,
        })?;

        Ok(Self::Block {
            pattern,
            record_marker: record_marker.into(),
            unit: unit.into(),
        })
    }

    #[must_use]
    pub fn literal(needle: impl Into<String>) -> Self {
        Self::Literal {
            needle: needle.into(),
        }
    }

    #[must_use]
    pub fn apply(&self, text: &str) -> RuleMatch {
        match self {
            Self::Block {
                pattern,
                record_marker,
                ..
            } => pattern
                .captures(text)
                .and_then(|caps| caps.get(1))
                .map_or(RuleMatch::Missing, |body| {
                    RuleMatch::Counted(count_records(body.as_str(), record_marker))
                }),
            Self::Literal { needle } => {
                if text.contains(needle.as_str()) {
                    RuleMatch::Present
                } else {
                    RuleMatch::Missing
                }
            }
        }
    }

    /// Human-readable pattern, for verbose listings.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Block {
                pattern,
                record_marker,
                ..
            } => format!("/{}/ counting '{record_marker}'", pattern.as_str()),
            Self::Literal { needle } => format!("'{needle}'"),
        }
    }

    /// Unit used when reporting a block's record count.
    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        match self {
            Self::Block { unit, .. } => Some(unit.as_str()),
            Self::Literal { .. } => None,
        }
    }
}

/// Non-overlapping occurrences of `marker` in `body`. An empty marker counts nothing.
fn count_records(body: &str, marker: &str) -> usize {
    if marker.is_empty() {
        return 0;
    }
    body.matches(marker).count()
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
