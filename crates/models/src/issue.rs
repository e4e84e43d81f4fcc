use crate::term::Slot;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How serious a validation finding is.
///
/// `Error` findings are expected to block (unmet prerequisites); `Warning`
/// findings are advisory, like an out-of-range credit load.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A single finding from one validation run.
///
/// Issues are plain output values: produced once, never mutated, with no
/// lifecycle of their own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    /// Course the issue is about, or `None` for slot-level findings such as
    /// workload.
    pub course_code: Option<String>,
    pub year: i32,
    pub term: String,
    pub message: String,
    pub severity: Severity,
}

impl ValidationIssue {
    pub fn error(course_code: &str, slot: &Slot, message: String) -> Self {
        Self {
            course_code: Some(course_code.to_string()),
            year: slot.year(),
            term: slot.term().to_string(),
            message,
            severity: Severity::Error,
        }
    }

    pub fn warning(course_code: Option<&str>, slot: &Slot, message: String) -> Self {
        Self {
            course_code: course_code.map(str::to_string),
            year: slot.year(),
            term: slot.term().to_string(),
            message,
            severity: Severity::Warning,
        }
    }
}

/// The aggregate outcome of one validation run, split by severity.
///
/// Relative order within each list follows the order the findings were
/// produced in, so unchanged inputs reproduce an identical report.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Partition a stream of findings by severity. No deduplication: the
    /// sources check independent properties and a complete picture is the
    /// point.
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        let mut report = Self::default();

        for issue in issues {
            match issue.severity {
                Severity::Error => report.errors.push(issue),
                Severity::Warning => report.warnings.push(issue),
            }
        }

        report
    }

    /// A plan is valid when no `error`-severity findings were produced.
    /// Warnings alone never invalidate a plan.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}
