//! Template over pod service account usage.

use super::TemplateError;
use crate::extract::pod_spec;
use klint_core::{CheckFunc, Diagnostic};
use serde_yaml::Value;

/// Flags workloads running under the default service account.
///
/// Both `serviceAccountName` and the deprecated `serviceAccount` field
/// are consulted; an unset account means the default one.
pub(super) fn service_account() -> Result<CheckFunc, TemplateError> {
    Ok(Box::new(|object| {
        let Some(spec) = pod_spec(object) else {
            return Vec::new();
        };
        let account = spec
            .get("serviceAccountName")
            .or_else(|| spec.get("serviceAccount"))
            .and_then(Value::as_str);
        match account {
            None | Some("default") | Some("") => {
                vec![Diagnostic::new("object uses the default service account")]
            }
            Some(_) => Vec::new(),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use klint_core::{KubeObject, ObjectMetadata};

    fn pod(spec_yaml: &str) -> KubeObject {
        let yaml = format!("apiVersion: v1\nkind: Pod\nmetadata:\n  name: p\nspec:\n{spec_yaml}");
        let value: Value = serde_yaml::from_str(&yaml).unwrap();
        KubeObject::from_value(value, ObjectMetadata::from_file("t.yaml")).unwrap()
    }

    #[test]
    fn unset_account_is_the_default_account() {
        let check = service_account().unwrap();
        assert_eq!(check(&pod("  containers: []\n")).len(), 1);
    }

    #[test]
    fn explicit_default_is_reported() {
        let check = service_account().unwrap();
        assert_eq!(
            check(&pod("  serviceAccountName: default\n")).len(),
            1
        );
    }

    #[test]
    fn dedicated_account_passes() {
        let check = service_account().unwrap();
        assert!(check(&pod("  serviceAccountName: web-sa\n")).is_empty());
    }

    #[test]
    fn deprecated_field_is_consulted() {
        let check = service_account().unwrap();
        assert!(check(&pod("  serviceAccount: web-sa\n")).is_empty());
    }
}
