//! The check registry: named checks with duplicate detection.

use crate::check::{CheckFunc, CheckSpec};
use std::collections::BTreeMap;
use thiserror::Error;

/// Where a registered check came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOrigin {
    /// Shipped with the linter.
    Builtin {
        /// Whether the check is in the default-enabled set.
        default: bool,
    },
    /// Declared in user configuration.
    Custom,
}

/// A check spec together with its instantiated predicate.
pub struct RegisteredCheck {
    /// Declarative description.
    pub spec: CheckSpec,
    /// Instantiated predicate function.
    pub func: CheckFunc,
    /// Provenance of the check.
    pub origin: CheckOrigin,
}

/// Registry errors: both are user-correctable and fatal to the run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two checks share a name.
    #[error("duplicate check name: {0}")]
    Duplicate(String),

    /// Configuration references a check that does not exist.
    #[error("unknown check: {0}")]
    UnknownCheck(String),
}

/// Mapping from unique check name to its definition.
///
/// An explicit value constructed once per invocation and passed down,
/// never a process-wide singleton. Iteration order is the sorted name
/// order, which keeps downstream output deterministic.
#[derive(Default)]
pub struct CheckRegistry {
    checks: BTreeMap<String, RegisteredCheck>,
}

impl CheckRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a check, rejecting duplicate names.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] when the name is taken.
    pub fn register(
        &mut self,
        spec: CheckSpec,
        func: CheckFunc,
        origin: CheckOrigin,
    ) -> Result<(), RegistryError> {
        if self.checks.contains_key(&spec.name) {
            return Err(RegistryError::Duplicate(spec.name));
        }
        let name = spec.name.clone();
        self.checks.insert(name, RegisteredCheck { spec, func, origin });
        Ok(())
    }

    /// Looks up a check by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&RegisteredCheck> {
        self.checks.get(name)
    }

    /// True when a check with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.checks.contains_key(name)
    }

    /// Iterates checks in name order.
    pub fn iter(&self) -> impl Iterator<Item = &RegisteredCheck> {
        self.checks.values()
    }

    /// Number of registered checks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// True when no checks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
