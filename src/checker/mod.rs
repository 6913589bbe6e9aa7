mod report;
mod result;
mod rule;

pub use report::summary_report_suite;
pub use result::{CheckResult, RecordCount, Summary};
pub use rule::{Rule, RuleMatch};

use crate::artifact::Artifact;

/// A named structural assertion against the report text.
#[derive(Debug, Clone)]
pub struct Check {
    id: String,
    subject: String,
    rule: Rule,
}

impl Check {
    /// - `id`: stable kebab-case identifier, shared by the per-column checks
    /// - `subject`: what the result line says was (not) found
    #[must_use]
    pub fn new(id: impl Into<String>, subject: impl Into<String>, rule: Rule) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            rule,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub const fn rule(&self) -> &Rule {
        &self.rule
    }

    /// Evaluate against `text`. Reads only; never fails.
    #[must_use]
    pub fn run(&self, text: &str) -> CheckResult {
        let records = match self.rule.apply(text) {
            RuleMatch::Missing => {
                return CheckResult::Failed {
                    id: self.id.clone(),
                    subject: self.subject.clone(),
                };
            }
            RuleMatch::Present => None,
            RuleMatch::Counted(count) => Some(RecordCount {
                count,
                unit: self.rule.unit().unwrap_or("records").to_string(),
            }),
        };

        CheckResult::Passed {
            id: self.id.clone(),
            subject: self.subject.clone(),
            records,
        }
    }
}

/// Ordered list of checks. Order is preserved in the results.
#[derive(Debug, Clone, Default)]
pub struct CheckSuite {
    checks: Vec<Check>,
}

impl CheckSuite {
    #[must_use]
    pub const fn new(checks: Vec<Check>) -> Self {
        Self { checks }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Check> {
        self.checks.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

/// Run every check in `suite` against `artifact`, one result per check.
#[must_use]
pub fn run_checks(artifact: &Artifact, suite: &CheckSuite) -> Vec<CheckResult> {
    suite
        .iter()
        .map(|check| check.run(artifact.content()))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
