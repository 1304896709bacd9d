//! # klint-cli
//!
//! Command implementations for the `klint` binary.
//!
//! The lint pipeline is exposed as a library so its stage ordering and
//! output behavior can be exercised against in-memory sinks.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod commands;
pub mod config_resolver;
pub mod format;
