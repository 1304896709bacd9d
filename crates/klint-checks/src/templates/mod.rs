//! Check templates: parameterized predicate factories.
//!
//! A template turns a parameter block from a [`klint_core::CheckSpec`]
//! into a runnable [`CheckFunc`]. Built-in and custom checks alike are
//! instantiated through [`instantiate`].

mod images;
mod network;
mod probes;
mod replicas;
mod resources;
mod security_context;
mod service_account;

use klint_core::CheckFunc;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Template instantiation errors.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No template with this key exists.
    #[error("unknown template: {0}")]
    Unknown(String),

    /// The parameter block does not fit the template's schema.
    #[error("invalid params for template {template}: {message}")]
    InvalidParams {
        /// Key of the template being instantiated.
        template: &'static str,
        /// Description of the parameter problem.
        message: String,
    },
}

/// Instantiates the template with key `key` using `params`.
///
/// # Errors
///
/// Returns [`TemplateError::Unknown`] for an unrecognized key and
/// [`TemplateError::InvalidParams`] when the parameters do not match
/// the template's schema.
pub fn instantiate(key: &str, params: &serde_yaml::Value) -> Result<CheckFunc, TemplateError> {
    match key {
        "privileged" => security_context::privileged(),
        "privilege-escalation" => security_context::privilege_escalation(),
        "run-as-non-root" => security_context::run_as_non_root(),
        "read-only-root-fs" => security_context::read_only_root_fs(),
        "latest-tag" => images::latest_tag(),
        "host-network" => network::host_network(),
        "liveness-probe" => probes::liveness_probe(),
        "readiness-probe" => probes::readiness_probe(),
        "resource-requirements" => resources::resource_requirements(params),
        "minimum-replicas" => replicas::minimum_replicas(params),
        "service-account" => service_account::service_account(),
        _ => Err(TemplateError::Unknown(key.to_string())),
    }
}

/// Deserializes a template parameter block, treating null as defaults.
fn parse_params<T>(template: &'static str, params: &serde_yaml::Value) -> Result<T, TemplateError>
where
    T: DeserializeOwned + Default,
{
    if params.is_null() {
        return Ok(T::default());
    }
    serde_yaml::from_value(params.clone()).map_err(|e| TemplateError::InvalidParams {
        template,
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_key_is_rejected() {
        let err = instantiate("no-such-template", &serde_yaml::Value::Null)
            .err()
            .unwrap();
        assert!(matches!(err, TemplateError::Unknown(_)));
        assert_eq!(err.to_string(), "unknown template: no-such-template");
    }

    #[test]
    fn every_library_template_instantiates_with_defaults() {
        for key in [
            "privileged",
            "privilege-escalation",
            "run-as-non-root",
            "read-only-root-fs",
            "latest-tag",
            "host-network",
            "liveness-probe",
            "readiness-probe",
            "minimum-replicas",
            "service-account",
        ] {
            assert!(instantiate(key, &serde_yaml::Value::Null).is_ok(), "{key}");
        }
    }

    #[test]
    fn bad_params_are_rejected_with_the_template_key() {
        let params: serde_yaml::Value = serde_yaml::from_str("minReplicas: not-a-number").unwrap();
        let err = instantiate("minimum-replicas", &params).err().unwrap();
        assert!(matches!(
            err,
            TemplateError::InvalidParams {
                template: "minimum-replicas",
                ..
            }
        ));
    }
}
