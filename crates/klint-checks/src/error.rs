//! Errors for loading checks into a registry.

use crate::templates::TemplateError;
use klint_core::RegistryError;
use thiserror::Error;

/// Failure to turn a check spec into a registered check.
#[derive(Debug, Error)]
pub enum CheckLoadError {
    /// The check's template could not be instantiated.
    #[error("check {check}: {source}")]
    Template {
        /// Name of the check being loaded.
        check: String,
        /// Underlying template error.
        source: TemplateError,
    },

    /// Registration failed (duplicate name).
    #[error(transparent)]
    Registry(#[from] RegistryError),
}
