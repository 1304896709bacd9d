//! Templates requiring liveness and readiness probes.

use super::TemplateError;
use crate::extract::{container_name, pod_spec};
use klint_core::{CheckFunc, Diagnostic};
use serde_yaml::Value;

/// Flags long-running containers without a liveness probe.
pub(super) fn liveness_probe() -> Result<CheckFunc, TemplateError> {
    Ok(probe_check("livenessProbe", "liveness"))
}

/// Flags long-running containers without a readiness probe.
pub(super) fn readiness_probe() -> Result<CheckFunc, TemplateError> {
    Ok(probe_check("readinessProbe", "readiness"))
}

/// Probes only apply to the main `containers` list; init containers
/// run to completion and are skipped.
fn probe_check(field: &'static str, label: &'static str) -> CheckFunc {
    Box::new(move |object| {
        let Some(containers) = pod_spec(object)
            .and_then(|spec| spec.get("containers"))
            .and_then(Value::as_sequence)
        else {
            return Vec::new();
        };
        containers
            .iter()
            .filter(|c| c.get(field).is_none())
            .map(|c| {
                Diagnostic::new(format!(
                    "container \"{}\" does not specify a {label} probe",
                    container_name(c)
                ))
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use klint_core::{KubeObject, ObjectMetadata};

    fn object(yaml: &str) -> KubeObject {
        let value: Value = serde_yaml::from_str(yaml).unwrap();
        KubeObject::from_value(value, ObjectMetadata::from_file("t.yaml")).unwrap()
    }

    #[test]
    fn missing_liveness_probe_is_reported() {
        let check = liveness_probe().unwrap();
        let obj = object(
            "apiVersion: v1\nkind: Pod\nmetadata:\n  name: p\nspec:\n  containers:\n    - name: app\n    - name: probed\n      livenessProbe:\n        httpGet:\n          path: /healthz\n          port: 8080\n",
        );
        let diags = check(&obj);
        assert_eq!(diags.len(), 1);
        assert_eq!(
            diags[0].message,
            "container \"app\" does not specify a liveness probe"
        );
    }

    #[test]
    fn init_containers_are_exempt() {
        let check = readiness_probe().unwrap();
        let obj = object(
            "apiVersion: v1\nkind: Pod\nmetadata:\n  name: p\nspec:\n  initContainers:\n    - name: setup\n  containers:\n    - name: app\n      readinessProbe:\n        tcpSocket:\n          port: 80\n",
        );
        assert!(check(&obj).is_empty());
    }
}
