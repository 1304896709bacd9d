//! Resolves configuration against the registry into the enabled-check set.

use crate::config::Config;
use crate::registry::{CheckOrigin, CheckRegistry, RegistryError};

/// Computes the validated set of enabled check names.
///
/// Base set: built-in checks flagged as default, unless
/// `doNotAutoAddDefaults` is set; `addAllBuiltIn` widens the base to
/// every built-in. Custom checks are enabled by declaring them.
/// `include` adds names on top, `exclude` removes them last.
///
/// Every name configuration references must exist in the registry;
/// nothing is silently skipped. An empty result is not an error here —
/// the caller decides what an empty run means.
///
/// # Errors
///
/// Returns [`RegistryError::UnknownCheck`] for any `include` or
/// `exclude` entry naming a check the registry does not contain.
pub fn get_enabled_checks_and_validate(
    config: &Config,
    registry: &CheckRegistry,
) -> Result<Vec<String>, RegistryError> {
    for name in config
        .checks
        .include
        .iter()
        .chain(config.checks.exclude.iter())
    {
        if !registry.contains(name) {
            return Err(RegistryError::UnknownCheck(name.clone()));
        }
    }

    let mut enabled: Vec<String> = registry
        .iter()
        .filter(|check| match check.origin {
            CheckOrigin::Builtin { default } => {
                if config.checks.add_all_built_in {
                    true
                } else {
                    default && !config.checks.do_not_auto_add_defaults
                }
            }
            CheckOrigin::Custom => true,
        })
        .map(|check| check.spec.name.clone())
        .collect();

    for name in &config.checks.include {
        if !enabled.iter().any(|n| n == name) {
            enabled.push(name.clone());
        }
    }
    enabled.retain(|name| !config.checks.exclude.contains(name));
    enabled.sort();

    Ok(enabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{CheckFunc, CheckSpec};
    use crate::config::ChecksConfig;

    fn noop() -> CheckFunc {
        Box::new(|_| Vec::new())
    }

    fn registry() -> CheckRegistry {
        let mut registry = CheckRegistry::new();
        registry
            .register(
                CheckSpec::new("default-a", "", "", "noop"),
                noop(),
                CheckOrigin::Builtin { default: true },
            )
            .unwrap();
        registry
            .register(
                CheckSpec::new("default-b", "", "", "noop"),
                noop(),
                CheckOrigin::Builtin { default: true },
            )
            .unwrap();
        registry
            .register(
                CheckSpec::new("optional-c", "", "", "noop"),
                noop(),
                CheckOrigin::Builtin { default: false },
            )
            .unwrap();
        registry
            .register(
                CheckSpec::new("custom-d", "", "", "noop"),
                noop(),
                CheckOrigin::Custom,
            )
            .unwrap();
        registry
    }

    #[test]
    fn defaults_and_custom_checks_enabled_by_default() {
        let enabled = get_enabled_checks_and_validate(&Config::default(), &registry()).unwrap();
        assert_eq!(enabled, vec!["custom-d", "default-a", "default-b"]);
    }

    #[test]
    fn include_adds_non_default_builtin() {
        let config = Config {
            checks: ChecksConfig {
                include: vec!["optional-c".to_string()],
                ..ChecksConfig::default()
            },
            ..Config::default()
        };
        let enabled = get_enabled_checks_and_validate(&config, &registry()).unwrap();
        assert!(enabled.contains(&"optional-c".to_string()));
        assert!(enabled.contains(&"default-a".to_string()));
    }

    #[test]
    fn exclude_removes_even_defaults_and_custom() {
        let config = Config {
            checks: ChecksConfig {
                exclude: vec!["default-a".to_string(), "custom-d".to_string()],
                ..ChecksConfig::default()
            },
            ..Config::default()
        };
        let enabled = get_enabled_checks_and_validate(&config, &registry()).unwrap();
        assert_eq!(enabled, vec!["default-b"]);
    }

    #[test]
    fn add_all_built_in_widens_base() {
        let config = Config {
            checks: ChecksConfig {
                add_all_built_in: true,
                ..ChecksConfig::default()
            },
            ..Config::default()
        };
        let enabled = get_enabled_checks_and_validate(&config, &registry()).unwrap();
        assert_eq!(
            enabled,
            vec!["custom-d", "default-a", "default-b", "optional-c"]
        );
    }

    #[test]
    fn suppressing_defaults_leaves_includes_and_custom() {
        let config = Config {
            checks: ChecksConfig {
                do_not_auto_add_defaults: true,
                include: vec!["default-b".to_string()],
                ..ChecksConfig::default()
            },
            ..Config::default()
        };
        let enabled = get_enabled_checks_and_validate(&config, &registry()).unwrap();
        assert_eq!(enabled, vec!["custom-d", "default-b"]);
    }

    #[test]
    fn unknown_include_fails_loudly() {
        let config = Config {
            checks: ChecksConfig {
                include: vec!["no-such-check".to_string()],
                ..ChecksConfig::default()
            },
            ..Config::default()
        };
        let err = get_enabled_checks_and_validate(&config, &registry()).unwrap_err();
        assert_eq!(err, RegistryError::UnknownCheck("no-such-check".to_string()));
    }

    #[test]
    fn unknown_exclude_fails_loudly() {
        let config = Config {
            checks: ChecksConfig {
                exclude: vec!["typo-check".to_string()],
                ..ChecksConfig::default()
            },
            ..Config::default()
        };
        let err = get_enabled_checks_and_validate(&config, &registry()).unwrap_err();
        assert_eq!(err, RegistryError::UnknownCheck("typo-check".to_string()));
    }

    #[test]
    fn result_can_be_empty_without_error() {
        let config = Config {
            checks: ChecksConfig {
                do_not_auto_add_defaults: true,
                exclude: vec!["custom-d".to_string()],
                ..ChecksConfig::default()
            },
            ..Config::default()
        };
        let enabled = get_enabled_checks_and_validate(&config, &registry()).unwrap();
        assert!(enabled.is_empty());
    }
}
