/// Records counted inside a matched block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCount {
    pub count: usize,
    pub unit: String,
}

/// Result of one check against the report.
///
/// A miss is a `Failed` result, never an error: the remaining checks still run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Passed {
        id: String,
        subject: String,
        records: Option<RecordCount>,
    },
    Failed {
        id: String,
        subject: String,
    },
}

impl CheckResult {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Passed { id, .. } | Self::Failed { id, .. } => id,
        }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        match self {
            Self::Passed { subject, .. } | Self::Failed { subject, .. } => subject,
        }
    }

    #[must_use]
    pub const fn records(&self) -> Option<&RecordCount> {
        match self {
            Self::Passed { records, .. } => records.as_ref(),
            Self::Failed { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// One-line description without the status marker.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Passed {
                subject,
                records: Some(records),
                ..
            } => format!("{subject} found ({} {})", records.count, records.unit),
            Self::Passed { subject, .. } => format!("{subject} found"),
            Self::Failed { subject, .. } => format!("{subject} not found"),
        }
    }
}

/// Pass/fail tally over a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
}

impl Summary {
    #[must_use]
    pub fn from_results(results: &[CheckResult]) -> Self {
        let passed = results.iter().filter(|r| r.is_passed()).count();
        Self {
            total: results.len(),
            passed,
            failed: results.len() - passed,
        }
    }

    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
