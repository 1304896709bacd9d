//! # klint-checks
//!
//! Built-in check templates and the standard check library for klint.
//!
//! Checks are instances of parameterized templates. This crate provides:
//!
//! - [`templates::instantiate`] to turn a template key and params into a
//!   runnable check function
//! - [`load_builtin_checks_into`] to register the standard library
//! - [`load_custom_checks_into`] to register checks declared in
//!   configuration

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod builtin;
mod custom;
mod error;
mod extract;

pub mod templates;

pub use builtin::{load_builtin_checks_into, DEFAULT_CHECKS};
pub use custom::load_custom_checks_into;
pub use error::CheckLoadError;
