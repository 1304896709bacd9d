//! Core types for lint diagnostics and run results.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

/// Severity level for check violations.
///
/// Ordered so that `Error > Warning > Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Critical issues that must be fixed.
    Error,
    /// Important issues that should be addressed.
    #[default]
    Warning,
    /// Informational suggestions.
    Info,
}

impl Severity {
    /// Returns the string representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Ord for Severity {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(s: Severity) -> u8 {
            match s {
                Severity::Error => 2,
                Severity::Warning => 1,
                Severity::Info => 0,
            }
        }
        rank(*self).cmp(&rank(*other))
    }
}

impl PartialOrd for Severity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A diagnostic message produced by a check predicate.
///
/// This is the raw output of a check before it is enriched with
/// object and check metadata into a [`Report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable message describing the issue.
    pub message: String,
    /// Optional remediation override. When absent, the check's own
    /// remediation text is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<String>,
}

impl Diagnostic {
    /// Creates a new diagnostic with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            remediation: None,
        }
    }

    /// Creates a diagnostic with a remediation override.
    pub fn with_remediation(message: impl Into<String>, remediation: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            remediation: Some(remediation.into()),
        }
    }
}

/// Reference to the object a report was raised against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectRef {
    /// Source file the object was loaded from.
    pub file_path: PathBuf,
    /// Object name from `metadata.name`.
    pub name: String,
    /// Kubernetes kind (e.g. "Deployment").
    pub kind: String,
    /// Namespace, if the object declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

/// One triggered diagnostic, tied to the object and check that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// The object the check fired on.
    pub object: ObjectRef,
    /// Name of the check that produced this report.
    pub check: String,
    /// Severity of the violation.
    pub severity: Severity,
    /// Diagnostic message.
    pub message: String,
    /// Remediation advice.
    pub remediation: String,
}

impl Report {
    /// Sort key: file path, then object name, then check name.
    #[must_use]
    pub fn sort_key(&self) -> (&PathBuf, &str, &str) {
        (&self.object.file_path, &self.object.name, &self.check)
    }
}

/// Summary attached to every run result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Tool version that produced the result.
    pub klint_version: String,
    /// Number of valid objects analyzed.
    pub objects_analyzed: usize,
    /// Number of checks that were enabled for the run.
    pub checks_run: usize,
}

/// Result of a lint run: an ordered report sequence plus a summary.
///
/// Produced once by the run engine and immutable thereafter; the
/// formatters render the same value to every sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// All reports, ordered by (file path, object name, check name).
    pub reports: Vec<Report>,
    /// Run summary.
    pub summary: Summary,
}

impl RunResult {
    /// Returns true if any report was produced.
    #[must_use]
    pub fn has_reports(&self) -> bool {
        !self.reports.is_empty()
    }
}
