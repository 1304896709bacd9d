//! Templates over container and pod security contexts.

use super::TemplateError;
use crate::extract::{container_name, containers, pod_spec, security_context_bool};
use klint_core::{CheckFunc, Diagnostic};
use serde_yaml::Value;

/// Flags containers that run with `privileged: true`.
pub(super) fn privileged() -> Result<CheckFunc, TemplateError> {
    Ok(Box::new(|object| {
        let Some(spec) = pod_spec(object) else {
            return Vec::new();
        };
        containers(spec)
            .into_iter()
            .filter(|c| security_context_bool(c, "privileged") == Some(true))
            .map(|c| Diagnostic::new(format!("container \"{}\" is privileged", container_name(c))))
            .collect()
    }))
}

/// Flags containers that allow privilege escalation.
///
/// Kubernetes defaults `allowPrivilegeEscalation` to true, so both an
/// explicit `true` and an unset field are reported.
pub(super) fn privilege_escalation() -> Result<CheckFunc, TemplateError> {
    Ok(Box::new(|object| {
        let Some(spec) = pod_spec(object) else {
            return Vec::new();
        };
        containers(spec)
            .into_iter()
            .filter(|c| security_context_bool(c, "allowPrivilegeEscalation") != Some(false))
            .map(|c| {
                Diagnostic::new(format!(
                    "container \"{}\" allows privilege escalation",
                    container_name(c)
                ))
            })
            .collect()
    }))
}

/// Flags containers not guaranteed to run as a non-root user.
///
/// `runAsNonRoot: true` at either the pod or the container level
/// satisfies the check.
pub(super) fn run_as_non_root() -> Result<CheckFunc, TemplateError> {
    Ok(Box::new(|object| {
        let Some(spec) = pod_spec(object) else {
            return Vec::new();
        };
        let pod_level = spec
            .get("securityContext")
            .and_then(|sc| sc.get("runAsNonRoot"))
            .and_then(Value::as_bool)
            == Some(true);

        containers(spec)
            .into_iter()
            .filter(|c| {
                let container_level = security_context_bool(c, "runAsNonRoot");
                match container_level {
                    Some(set) => !set,
                    None => !pod_level,
                }
            })
            .map(|c| {
                Diagnostic::new(format!(
                    "container \"{}\" is not set to runAsNonRoot",
                    container_name(c)
                ))
            })
            .collect()
    }))
}

/// Flags containers without a read-only root filesystem.
pub(super) fn read_only_root_fs() -> Result<CheckFunc, TemplateError> {
    Ok(Box::new(|object| {
        let Some(spec) = pod_spec(object) else {
            return Vec::new();
        };
        containers(spec)
            .into_iter()
            .filter(|c| security_context_bool(c, "readOnlyRootFilesystem") != Some(true))
            .map(|c| {
                Diagnostic::new(format!(
                    "container \"{}\" does not have a read-only root file system",
                    container_name(c)
                ))
            })
            .collect()
    }))
}
