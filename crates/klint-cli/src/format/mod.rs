//! Output formatters for lint results.
//!
//! Formatters render a [`RunResult`] to any byte sink, so the same
//! value can be written identically to stdout and to the result
//! artifact.

mod json;
mod plain;
mod sarif;

use anyhow::Result;
use klint_core::RunResult;
use std::collections::BTreeMap;
use std::io::Write;

pub use json::JsonFormatter;
pub use plain::PlainFormatter;
pub use sarif::SarifFormatter;

/// Output format options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Plain,
    /// JSON output.
    Json,
    /// SARIF 2.1.0 for IDE and CI integration.
    Sarif,
}

impl OutputFormat {
    /// The registry key for this format.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Json => "json",
            Self::Sarif => "sarif",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Renders a run result to a byte sink.
pub trait Formatter {
    /// Writes the formatted result to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the underlying write fails.
    fn render(&self, result: &RunResult, out: &mut dyn Write) -> Result<()>;
}

/// Name-keyed collection of formatters.
///
/// Looked up once, before any input is loaded, so an unsupported
/// format never triggers filesystem work.
#[derive(Default)]
pub struct FormatterRegistry {
    formatters: BTreeMap<&'static str, Box<dyn Formatter>>,
}

impl FormatterRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a formatter under `key`.
    pub fn register(&mut self, key: &'static str, formatter: Box<dyn Formatter>) {
        self.formatters.insert(key, formatter);
    }

    /// The standard set: plain, json, and sarif.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("plain", Box::new(PlainFormatter));
        registry.register("json", Box::new(JsonFormatter));
        registry.register("sarif", Box::new(SarifFormatter));
        registry
    }

    /// Looks up the formatter for `format`.
    #[must_use]
    pub fn get(&self, format: OutputFormat) -> Option<&dyn Formatter> {
        self.formatters.get(format.as_str()).map(AsRef::as_ref)
    }
}
