//! Command implementations.

pub mod lint;
pub mod list_checks;
