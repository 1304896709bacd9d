//! Check definitions: specs, scopes, and predicate functions.

use crate::object::{KubeObject, ObjectKind};
use crate::types::{Diagnostic, Severity};
use serde::{Deserialize, Serialize};

/// A check predicate: zero or more diagnostics per object.
pub type CheckFunc = Box<dyn Fn(&KubeObject) -> Vec<Diagnostic> + Send + Sync>;

/// Declarative description of a check.
///
/// Custom checks are deserialized from configuration in exactly this
/// shape; built-in checks are constructed in code.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSpec {
    /// Unique check name (e.g. "privileged-container").
    pub name: String,

    /// What this check looks for.
    pub description: String,

    /// Remediation advice attached to every report from this check.
    pub remediation: String,

    /// Key of the template this check instantiates.
    pub template: String,

    /// Template parameters.
    #[serde(default)]
    pub params: serde_yaml::Value,

    /// Which object kinds this check applies to.
    #[serde(default)]
    pub scope: CheckScope,

    /// Severity of reports from this check.
    #[serde(default)]
    pub severity: Severity,
}

impl CheckSpec {
    /// Creates a spec with default scope, params, and severity.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        remediation: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            remediation: remediation.into(),
            template: template.into(),
            params: serde_yaml::Value::Null,
            scope: CheckScope::default(),
            severity: Severity::default(),
        }
    }

    /// Sets template parameters.
    #[must_use]
    pub fn with_params(mut self, params: serde_yaml::Value) -> Self {
        self.params = params;
        self
    }

    /// Sets the scope.
    #[must_use]
    pub fn with_scope(mut self, scope: CheckScope) -> Self {
        self.scope = scope;
        self
    }

    /// Sets the severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

/// Scope configuration for a check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckScope {
    /// Object kinds this check applies to.
    #[serde(default)]
    pub object_kinds: ObjectKindsDesc,
}

impl CheckScope {
    /// Creates a scope over the given kind identifiers.
    #[must_use]
    pub fn new(kinds: &[&str]) -> Self {
        Self {
            object_kinds: ObjectKindsDesc::new(kinds),
        }
    }
}

/// A list of kind identifiers: explicit kinds, or the group names
/// `DeploymentLike` and `Any`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectKindsDesc(
    /// Kind identifiers, matched case-sensitively.
    pub Vec<String>,
);

impl ObjectKindsDesc {
    /// Creates a description from kind identifiers.
    #[must_use]
    pub fn new(kinds: &[&str]) -> Self {
        Self(kinds.iter().map(|s| (*s).to_string()).collect())
    }

    /// True when `kind` falls within this description.
    #[must_use]
    pub fn matches(&self, kind: ObjectKind) -> bool {
        for k in &self.0 {
            match k.as_str() {
                "DeploymentLike" if kind.is_deployment_like() => return true,
                "Any" => return true,
                _ if k == kind.as_str() => return true,
                _ => {}
            }
        }
        false
    }
}

impl Default for ObjectKindsDesc {
    fn default() -> Self {
        Self(vec!["DeploymentLike".to_string()])
    }
}
