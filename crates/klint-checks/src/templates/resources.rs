//! Templates over container resource requirements.

use super::{parse_params, TemplateError};
use crate::extract::{container_name, containers, pod_spec};
use klint_core::{CheckFunc, Diagnostic};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct ResourceRequirementsParams {
    #[serde(default)]
    resource: String,
}

/// Flags containers without a request or limit for the named resource.
///
/// Params: `resource: cpu|memory`.
pub(super) fn resource_requirements(
    params: &serde_yaml::Value,
) -> Result<CheckFunc, TemplateError> {
    let params: ResourceRequirementsParams = parse_params("resource-requirements", params)?;
    let resource = params.resource;
    if resource != "cpu" && resource != "memory" {
        return Err(TemplateError::InvalidParams {
            template: "resource-requirements",
            message: format!("resource must be \"cpu\" or \"memory\", got \"{resource}\""),
        });
    }

    Ok(Box::new(move |object| {
        let Some(spec) = pod_spec(object) else {
            return Vec::new();
        };
        let mut diags = Vec::new();
        for container in containers(spec) {
            let resources = container.get("resources");
            for section in ["requests", "limits"] {
                let set = resources
                    .and_then(|r| r.get(section))
                    .and_then(|s| s.get(resource.as_str()))
                    .is_some();
                if !set {
                    // "requests" -> "request" in the message
                    let noun = &section[..section.len() - 1];
                    diags.push(Diagnostic::new(format!(
                        "container \"{}\" has no {resource} {noun}",
                        container_name(container)
                    )));
                }
            }
        }
        diags
    }))
}
