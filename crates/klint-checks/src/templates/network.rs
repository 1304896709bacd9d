//! Templates over pod networking settings.

use super::TemplateError;
use crate::extract::pod_spec;
use klint_core::{CheckFunc, Diagnostic};
use serde_yaml::Value;

/// Flags workloads that share the host's network namespace.
pub(super) fn host_network() -> Result<CheckFunc, TemplateError> {
    Ok(Box::new(|object| {
        let uses_host_network = pod_spec(object)
            .and_then(|spec| spec.get("hostNetwork"))
            .and_then(Value::as_bool)
            == Some(true);
        if uses_host_network {
            vec![Diagnostic::new("object has hostNetwork enabled")]
        } else {
            Vec::new()
        }
    }))
}
