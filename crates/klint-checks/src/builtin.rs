//! The standard check library.

use crate::error::CheckLoadError;
use crate::templates;
use klint_core::{CheckOrigin, CheckRegistry, CheckScope, CheckSpec, Severity};
use serde_yaml::Value;
use tracing::debug;

/// Checks enabled when configuration neither widens nor suppresses the
/// default set.
pub const DEFAULT_CHECKS: &[&str] = &[
    "default-service-account",
    "no-liveness-probe",
    "no-readiness-probe",
    "privilege-escalation",
    "privileged-container",
    "run-as-non-root",
    "unset-cpu-requirements",
    "unset-memory-requirements",
];

fn resource_params(resource: &str) -> Value {
    let mut m = serde_yaml::Mapping::new();
    m.insert("resource".into(), resource.into());
    Value::Mapping(m)
}

fn builtin_specs() -> Vec<CheckSpec> {
    vec![
        CheckSpec::new(
            "privileged-container",
            "Indicates when containers are running in privileged mode.",
            "Do not run your container as privileged unless it is required.",
            "privileged",
        )
        .with_severity(Severity::Error),
        CheckSpec::new(
            "privilege-escalation",
            "Indicates when containers are allowed to gain more privileges than their parent process.",
            "Set allowPrivilegeEscalation to false explicitly.",
            "privilege-escalation",
        ),
        CheckSpec::new(
            "run-as-non-root",
            "Indicates when containers are not set to run as a non-root user.",
            "Set runAsNonRoot to true in the pod or container securityContext.",
            "run-as-non-root",
        ),
        CheckSpec::new(
            "read-only-root-fs",
            "Indicates when containers are running without a read-only root filesystem.",
            "Set readOnlyRootFilesystem to true in the container securityContext.",
            "read-only-root-fs",
        ),
        CheckSpec::new(
            "latest-tag",
            "Indicates when a container image is not pinned to a specific tag.",
            "Pin the image to an immutable tag or digest instead of latest.",
            "latest-tag",
        ),
        CheckSpec::new(
            "host-network",
            "Indicates when a workload shares the host's network namespace.",
            "Remove hostNetwork and expose ports through a Service instead.",
            "host-network",
        )
        .with_severity(Severity::Error),
        CheckSpec::new(
            "no-liveness-probe",
            "Indicates when containers fail to specify a liveness probe.",
            "Specify a liveness probe in your container.",
            "liveness-probe",
        ),
        CheckSpec::new(
            "no-readiness-probe",
            "Indicates when containers fail to specify a readiness probe.",
            "Specify a readiness probe in your container.",
            "readiness-probe",
        ),
        CheckSpec::new(
            "unset-cpu-requirements",
            "Indicates when containers do not have CPU requests and limits set.",
            "Set CPU requests and limits for your container.",
            "resource-requirements",
        )
        .with_params(resource_params("cpu")),
        CheckSpec::new(
            "unset-memory-requirements",
            "Indicates when containers do not have memory requests and limits set.",
            "Set memory requests and limits for your container.",
            "resource-requirements",
        )
        .with_params(resource_params("memory")),
        CheckSpec::new(
            "minimum-replicas",
            "Indicates when a workload runs fewer replicas than required for availability.",
            "Increase spec.replicas to at least the required minimum.",
            "minimum-replicas",
        )
        .with_scope(CheckScope::new(&["Deployment", "StatefulSet", "ReplicaSet"])),
        CheckSpec::new(
            "default-service-account",
            "Indicates when pods run under the default service account.",
            "Create a dedicated service account for your workload.",
            "service-account",
        ),
    ]
}

/// Registers the full built-in library into `registry`.
///
/// # Errors
///
/// Returns [`CheckLoadError`] when a template fails to instantiate or
/// a name collides with an already registered check.
pub fn load_builtin_checks_into(registry: &mut CheckRegistry) -> Result<(), CheckLoadError> {
    for spec in builtin_specs() {
        let func = templates::instantiate(&spec.template, &spec.params).map_err(|source| {
            CheckLoadError::Template {
                check: spec.name.clone(),
                source,
            }
        })?;
        let default = DEFAULT_CHECKS.contains(&spec.name.as_str());
        debug!("registering built-in check {} (default: {default})", spec.name);
        registry.register(spec, func, CheckOrigin::Builtin { default })?;
    }
    Ok(())
}
