//! Templates over workload replica counts.

use super::{parse_params, TemplateError};
use crate::extract::replicas;
use klint_core::{CheckFunc, Diagnostic};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct MinimumReplicasParams {
    #[serde(default = "default_min_replicas")]
    min_replicas: u64,
}

fn default_min_replicas() -> u64 {
    2
}

impl Default for MinimumReplicasParams {
    fn default() -> Self {
        Self {
            min_replicas: default_min_replicas(),
        }
    }
}

/// Flags workloads running fewer than the required replicas.
///
/// Params: `minReplicas` (default 2). An unset `spec.replicas` counts
/// as 1, matching the Kubernetes default.
pub(super) fn minimum_replicas(params: &serde_yaml::Value) -> Result<CheckFunc, TemplateError> {
    let params: MinimumReplicasParams = parse_params("minimum-replicas", params)?;
    let min = params.min_replicas;

    Ok(Box::new(move |object| {
        let actual = replicas(object).unwrap_or(1);
        if actual < min {
            vec![Diagnostic::new(format!(
                "object has {actual} replica(s), fewer than the required minimum of {min}"
            ))]
        } else {
            Vec::new()
        }
    }))
}
