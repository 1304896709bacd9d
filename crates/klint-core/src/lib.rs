//! # klint-core
//!
//! Core framework for linting Kubernetes YAML manifests.
//!
//! This crate provides the foundational types and the execution engine
//! for building manifest linters. It includes:
//!
//! - [`KubeObject`] for parsed manifests and [`LintContext`] for loaded inputs
//! - [`CheckSpec`] and [`CheckRegistry`] for declarative check definitions
//! - [`Config`] for check enablement and custom check declarations
//! - [`run`] for executing enabled checks into a [`RunResult`]
//!
//! ## Example
//!
//! ```ignore
//! use klint_core::{create_contexts, get_enabled_checks_and_validate, run, Config};
//!
//! let config = Config::default();
//! let registry = build_registry()?;
//! let enabled = get_enabled_checks_and_validate(&config, &registry)?;
//! let contexts = create_contexts(&["manifests/"], &config)?;
//! let result = run(&contexts, &registry, &enabled)?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod config;
mod context;
mod object;
mod registry;
mod resolver;
mod run;
mod types;

pub use check::{CheckFunc, CheckScope, CheckSpec, ObjectKindsDesc};
pub use config::{ChecksConfig, Config, ConfigError};
pub use context::{create_contexts, LintContext, LoadError};
pub use object::{
    InvalidObject, KubeObject, ObjectKind, ObjectMetadata, ObjectParseError,
    IGNORE_ANNOTATION_PREFIX,
};
pub use registry::{CheckOrigin, CheckRegistry, RegisteredCheck, RegistryError};
pub use resolver::get_enabled_checks_and_validate;
pub use run::{run, RunError};
pub use types::{Diagnostic, ObjectRef, Report, RunResult, Severity, Summary};
