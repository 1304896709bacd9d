//! Parsed Kubernetes objects and their metadata.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

/// Annotation prefix that suppresses a check on a single object.
///
/// `ignore-check.klint.io/<check-name>: "reason"` disables `<check-name>`
/// for the annotated object only.
pub const IGNORE_ANNOTATION_PREFIX: &str = "ignore-check.klint.io/";

/// Object kinds the linter understands for scope matching.
///
/// Kinds outside this list parse as [`ObjectKind::Any`] and only match
/// checks scoped to `Any`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    /// apps/v1 Deployment.
    Deployment,
    /// apps/v1 StatefulSet.
    StatefulSet,
    /// apps/v1 DaemonSet.
    DaemonSet,
    /// apps/v1 ReplicaSet.
    ReplicaSet,
    /// core/v1 Pod.
    Pod,
    /// batch/v1 Job.
    Job,
    /// batch/v1 CronJob.
    CronJob,
    /// core/v1 Service.
    Service,
    /// networking.k8s.io/v1 Ingress.
    Ingress,
    /// core/v1 ServiceAccount.
    ServiceAccount,
    /// Unrecognized or custom resource kind.
    Any,
}

impl ObjectKind {
    /// Parses a Kubernetes `kind` string.
    #[must_use]
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "Deployment" => Some(Self::Deployment),
            "StatefulSet" => Some(Self::StatefulSet),
            "DaemonSet" => Some(Self::DaemonSet),
            "ReplicaSet" => Some(Self::ReplicaSet),
            "Pod" => Some(Self::Pod),
            "Job" => Some(Self::Job),
            "CronJob" => Some(Self::CronJob),
            "Service" => Some(Self::Service),
            "Ingress" => Some(Self::Ingress),
            "ServiceAccount" => Some(Self::ServiceAccount),
            _ => None,
        }
    }

    /// Returns the canonical kind name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deployment => "Deployment",
            Self::StatefulSet => "StatefulSet",
            Self::DaemonSet => "DaemonSet",
            Self::ReplicaSet => "ReplicaSet",
            Self::Pod => "Pod",
            Self::Job => "Job",
            Self::CronJob => "CronJob",
            Self::Service => "Service",
            Self::Ingress => "Ingress",
            Self::ServiceAccount => "ServiceAccount",
            Self::Any => "Any",
        }
    }

    /// True for workload kinds that carry a pod template.
    #[must_use]
    pub fn is_deployment_like(self) -> bool {
        matches!(
            self,
            Self::Deployment
                | Self::StatefulSet
                | Self::DaemonSet
                | Self::ReplicaSet
                | Self::Pod
                | Self::Job
                | Self::CronJob
        )
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Metadata about where an object (valid or not) came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectMetadata {
    /// The file the object was read from.
    pub file_path: PathBuf,
}

impl ObjectMetadata {
    /// Creates metadata for an object loaded from `path`.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: path.into(),
        }
    }
}

/// Errors turning a YAML document into a [`KubeObject`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ObjectParseError {
    /// The document is not a YAML mapping.
    #[error("document is not a mapping")]
    NotAMapping,

    /// A required field is absent or not a string.
    #[error("missing or invalid field: {0}")]
    MissingField(&'static str),
}

/// A successfully parsed Kubernetes object ready for linting.
///
/// The full document is retained as a YAML value; checks navigate it
/// directly rather than going through a typed object model.
#[derive(Debug, Clone)]
pub struct KubeObject {
    metadata: ObjectMetadata,
    name: String,
    namespace: Option<String>,
    kind: ObjectKind,
    kind_name: String,
    annotations: BTreeMap<String, String>,
    value: serde_yaml::Value,
}

impl KubeObject {
    /// Builds an object from a parsed YAML document.
    ///
    /// # Errors
    ///
    /// Fails when the document is not a mapping or lacks `apiVersion`,
    /// `kind`, or `metadata.name`.
    pub fn from_value(
        value: serde_yaml::Value,
        metadata: ObjectMetadata,
    ) -> Result<Self, ObjectParseError> {
        if !value.is_mapping() {
            return Err(ObjectParseError::NotAMapping);
        }

        value
            .get("apiVersion")
            .and_then(serde_yaml::Value::as_str)
            .ok_or(ObjectParseError::MissingField("apiVersion"))?;

        let kind_name = value
            .get("kind")
            .and_then(serde_yaml::Value::as_str)
            .ok_or(ObjectParseError::MissingField("kind"))?
            .to_string();

        let obj_meta = value
            .get("metadata")
            .ok_or(ObjectParseError::MissingField("metadata"))?;
        let name = obj_meta
            .get("name")
            .and_then(serde_yaml::Value::as_str)
            .ok_or(ObjectParseError::MissingField("metadata.name"))?
            .to_string();
        let namespace = obj_meta
            .get("namespace")
            .and_then(serde_yaml::Value::as_str)
            .map(String::from);

        let mut annotations = BTreeMap::new();
        if let Some(mapping) = obj_meta
            .get("annotations")
            .and_then(serde_yaml::Value::as_mapping)
        {
            for (k, v) in mapping {
                if let (Some(k), Some(v)) = (k.as_str(), v.as_str()) {
                    annotations.insert(k.to_string(), v.to_string());
                }
            }
        }

        let kind = ObjectKind::from_kind(&kind_name).unwrap_or(ObjectKind::Any);

        Ok(Self {
            metadata,
            name,
            namespace,
            kind,
            kind_name,
            annotations,
            value,
        })
    }

    /// Source metadata.
    #[must_use]
    pub fn metadata(&self) -> &ObjectMetadata {
        &self.metadata
    }

    /// `metadata.name` of the object.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// `metadata.namespace`, if declared.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Recognized object kind ([`ObjectKind::Any`] for unknown kinds).
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        self.kind
    }

    /// Raw `kind` string as written in the manifest.
    #[must_use]
    pub fn kind_name(&self) -> &str {
        &self.kind_name
    }

    /// Object annotations (string-valued only).
    #[must_use]
    pub fn annotations(&self) -> &BTreeMap<String, String> {
        &self.annotations
    }

    /// The full YAML document.
    #[must_use]
    pub fn value(&self) -> &serde_yaml::Value {
        &self.value
    }

    /// True when an `ignore-check.klint.io/<name>` annotation suppresses
    /// the named check for this object.
    #[must_use]
    pub fn is_check_ignored(&self, check_name: &str) -> bool {
        self.annotations
            .contains_key(&format!("{IGNORE_ANNOTATION_PREFIX}{check_name}"))
    }
}

/// An object that failed to load, retained alongside its siblings.
#[derive(Debug, Clone)]
pub struct InvalidObject {
    /// Source metadata.
    pub metadata: ObjectMetadata,
    /// The error that prevented loading.
    pub load_err: String,
}

impl InvalidObject {
    /// Records a load failure for the object at `metadata`.
    pub fn new(metadata: ObjectMetadata, error: impl Into<String>) -> Self {
        Self {
            metadata,
            load_err: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<KubeObject, ObjectParseError> {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        KubeObject::from_value(value, ObjectMetadata::from_file("test.yaml"))
    }

    #[test]
    fn parses_basic_object() {
        let obj = parse(
            "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web\n  namespace: prod\n",
        )
        .unwrap();
        assert_eq!(obj.name(), "web");
        assert_eq!(obj.namespace(), Some("prod"));
        assert_eq!(obj.kind(), ObjectKind::Deployment);
        assert_eq!(obj.kind_name(), "Deployment");
    }

    #[test]
    fn unknown_kind_maps_to_any() {
        let obj =
            parse("apiVersion: example.io/v1\nkind: Widget\nmetadata:\n  name: w\n").unwrap();
        assert_eq!(obj.kind(), ObjectKind::Any);
        assert_eq!(obj.kind_name(), "Widget");
    }

    #[test]
    fn missing_name_is_an_error() {
        let err = parse("apiVersion: v1\nkind: Pod\nmetadata: {}\n").unwrap_err();
        assert_eq!(err, ObjectParseError::MissingField("metadata.name"));
    }

    #[test]
    fn missing_kind_is_an_error() {
        let err = parse("apiVersion: v1\nmetadata:\n  name: x\n").unwrap_err();
        assert_eq!(err, ObjectParseError::MissingField("kind"));
    }

    #[test]
    fn non_mapping_document_is_an_error() {
        let value: serde_yaml::Value = serde_yaml::from_str("- a\n- b\n").unwrap();
        let err = KubeObject::from_value(value, ObjectMetadata::from_file("t.yaml")).unwrap_err();
        assert_eq!(err, ObjectParseError::NotAMapping);
    }

    #[test]
    fn ignore_annotation_suppresses_named_check_only() {
        let obj = parse(
            "apiVersion: v1\nkind: Pod\nmetadata:\n  name: p\n  annotations:\n    ignore-check.klint.io/privileged-container: \"intentional\"\n",
        )
        .unwrap();
        assert!(obj.is_check_ignored("privileged-container"));
        assert!(!obj.is_check_ignored("latest-tag"));
    }

    #[test]
    fn deployment_like_kinds() {
        assert!(ObjectKind::Deployment.is_deployment_like());
        assert!(ObjectKind::CronJob.is_deployment_like());
        assert!(!ObjectKind::Service.is_deployment_like());
        assert!(!ObjectKind::Any.is_deployment_like());
    }
}
