//! Navigation helpers for digging values out of manifest YAML.

use klint_core::{KubeObject, ObjectKind};
use serde_yaml::Value;

/// Locates the pod spec inside a workload object.
///
/// Pods carry it at `spec`, CronJobs under the job template, and every
/// other deployment-like kind under `spec.template.spec`. Returns
/// `None` for non-workload kinds or when the path is absent.
#[must_use]
pub fn pod_spec(object: &KubeObject) -> Option<&Value> {
    let root = object.value();
    match object.kind() {
        ObjectKind::Pod => root.get("spec"),
        ObjectKind::CronJob => root
            .get("spec")?
            .get("jobTemplate")?
            .get("spec")?
            .get("template")?
            .get("spec"),
        kind if kind.is_deployment_like() => root.get("spec")?.get("template")?.get("spec"),
        _ => None,
    }
}

/// All containers in a pod spec, init containers included.
#[must_use]
pub fn containers(pod_spec: &Value) -> Vec<&Value> {
    let mut out = Vec::new();
    for key in ["containers", "initContainers"] {
        if let Some(seq) = pod_spec.get(key).and_then(Value::as_sequence) {
            out.extend(seq.iter());
        }
    }
    out
}

/// A container's `name` field, or a placeholder when absent.
#[must_use]
pub fn container_name(container: &Value) -> &str {
    container
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed>")
}

/// A boolean field from the container's `securityContext`, if set.
#[must_use]
pub fn security_context_bool(container: &Value, field: &str) -> Option<bool> {
    container.get("securityContext")?.get(field)?.as_bool()
}

/// `spec.replicas` of a workload, if declared.
#[must_use]
pub fn replicas(object: &KubeObject) -> Option<u64> {
    object.value().get("spec")?.get("replicas")?.as_u64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use klint_core::ObjectMetadata;

    fn object(yaml: &str) -> KubeObject {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        KubeObject::from_value(value, ObjectMetadata::from_file("t.yaml")).unwrap()
    }

    #[test]
    fn pod_spec_for_pod_is_spec() {
        let obj = object(
            "apiVersion: v1\nkind: Pod\nmetadata:\n  name: p\nspec:\n  containers:\n    - name: app\n",
        );
        let spec = pod_spec(&obj).unwrap();
        assert_eq!(containers(spec).len(), 1);
    }

    #[test]
    fn pod_spec_for_deployment_is_under_template() {
        let obj = object(
            "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: d\nspec:\n  template:\n    spec:\n      containers:\n        - name: app\n        - name: sidecar\n      initContainers:\n        - name: setup\n",
        );
        let spec = pod_spec(&obj).unwrap();
        assert_eq!(containers(spec).len(), 3);
    }

    #[test]
    fn pod_spec_for_cron_job_is_under_job_template() {
        let obj = object(
            "apiVersion: batch/v1\nkind: CronJob\nmetadata:\n  name: c\nspec:\n  jobTemplate:\n    spec:\n      template:\n        spec:\n          containers:\n            - name: task\n",
        );
        let spec = pod_spec(&obj).unwrap();
        assert_eq!(container_name(containers(spec)[0]), "task");
    }

    #[test]
    fn non_workload_kinds_have_no_pod_spec() {
        let obj = object("apiVersion: v1\nkind: Service\nmetadata:\n  name: s\nspec: {}\n");
        assert!(pod_spec(&obj).is_none());
    }

    #[test]
    fn security_context_bool_distinguishes_unset() {
        let c: Value =
            serde_yaml::from_str("name: app\nsecurityContext:\n  privileged: true\n").unwrap();
        assert_eq!(security_context_bool(&c, "privileged"), Some(true));
        assert_eq!(security_context_bool(&c, "runAsNonRoot"), None);

        let bare: Value = serde_yaml::from_str("name: app\n").unwrap();
        assert_eq!(security_context_bool(&bare, "privileged"), None);
    }

    #[test]
    fn replicas_reads_spec_replicas() {
        let obj = object(
            "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: d\nspec:\n  replicas: 3\n",
        );
        assert_eq!(replicas(&obj), Some(3));

        let obj = object("apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: d\nspec: {}\n");
        assert_eq!(replicas(&obj), None);
    }
}
