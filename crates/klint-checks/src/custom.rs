//! Loading user-declared checks from configuration.

use crate::error::CheckLoadError;
use crate::templates;
use klint_core::{CheckOrigin, CheckRegistry, Config};
use tracing::debug;

/// Instantiates every `customChecks` entry and registers it.
///
/// Custom checks share the namespace with built-ins; declaring a name
/// that already exists is an error, not a silent override.
///
/// # Errors
///
/// Returns [`CheckLoadError`] when a custom check references an unknown
/// template, its params do not fit the template, or its name collides
/// with a registered check.
pub fn load_custom_checks_into(
    config: &Config,
    registry: &mut CheckRegistry,
) -> Result<(), CheckLoadError> {
    for spec in &config.custom_checks {
        let func = templates::instantiate(&spec.template, &spec.params).map_err(|source| {
            CheckLoadError::Template {
                check: spec.name.clone(),
                source,
            }
        })?;
        debug!(
            "registering custom check {} (template: {})",
            spec.name, spec.template
        );
        registry.register(spec.clone(), func, CheckOrigin::Custom)?;
    }
    Ok(())
}
