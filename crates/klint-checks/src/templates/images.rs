//! Templates over container image references.

use super::TemplateError;
use crate::extract::{container_name, containers, pod_spec};
use klint_core::{CheckFunc, Diagnostic};
use serde_yaml::Value;

/// Flags containers whose image is untagged or tagged `latest`.
///
/// Digest-pinned references (`image@sha256:...`) always pass.
pub(super) fn latest_tag() -> Result<CheckFunc, TemplateError> {
    Ok(Box::new(|object| {
        let Some(spec) = pod_spec(object) else {
            return Vec::new();
        };
        containers(spec)
            .into_iter()
            .filter_map(|c| {
                let image = c.get("image").and_then(Value::as_str)?;
                if is_floating(image) {
                    Some(Diagnostic::new(format!(
                        "container \"{}\" uses image \"{image}\" which is not pinned to a specific tag",
                        container_name(c)
                    )))
                } else {
                    None
                }
            })
            .collect()
    }))
}

/// True when an image reference would float to whatever is newest.
fn is_floating(image: &str) -> bool {
    if image.contains('@') {
        return false;
    }
    // Only a colon after the last slash is a tag separator; earlier
    // ones belong to a registry port (e.g. registry:5000/app)
    let after_registry = image.rsplit('/').next().unwrap_or(image);
    match after_registry.rsplit_once(':') {
        Some((_, tag)) => tag == "latest",
        None => true,
    }
}
