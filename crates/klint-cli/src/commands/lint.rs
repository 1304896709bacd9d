//! Lint command implementation.
//!
//! Stage order is load-bearing: the formatter is looked up before any
//! input is touched, the result artifact is written before stdout, and
//! the "found N lint errors" failure is raised only after both sinks
//! hold the full formatted result.

use anyhow::{bail, Context, Result};
use klint_checks::{load_builtin_checks_into, load_custom_checks_into};
use klint_core::{create_contexts, get_enabled_checks_and_validate, CheckRegistry, Config};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::config_resolver::{ConfigLocator, ConfigSource};
use crate::format::{FormatterRegistry, OutputFormat};

/// Fixed path of the machine-readable result artifact, written next to
/// wherever the linter is invoked.
pub const OUTPUT_ARTIFACT: &str = "output.json";

/// How a lint run ended, short of a hard error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Configuration resolved to an empty check set; nothing ran.
    NoChecksEnabled,
    /// Every input object failed to load; nothing ran.
    NoValidObjects,
    /// Checks ran and both sinks hold the formatted result.
    Completed {
        /// Number of reports produced.
        reports: usize,
    },
}

/// Check enablement overrides from command flags, merged into the
/// loaded configuration.
#[derive(Debug, Default, Clone)]
pub struct CheckOverrides {
    /// Names to append to `checks.include`.
    pub include: Vec<String>,
    /// Names to append to `checks.exclude`.
    pub exclude: Vec<String>,
}

/// Runs the lint command against the real filesystem and stdout.
///
/// # Errors
///
/// Fails on configuration, loading, engine, or output errors, and
/// with "found N lint errors" when any report was produced.
pub fn run(
    paths: &[PathBuf],
    format: OutputFormat,
    config_path: Option<&Path>,
    overrides: &CheckOverrides,
    verbose: bool,
) -> Result<()> {
    let mut registry = CheckRegistry::new();
    load_builtin_checks_into(&mut registry)?;

    let mut config = load_config(&ConfigLocator::new(".").locate(config_path))?;
    config
        .checks
        .include
        .extend(overrides.include.iter().cloned());
    config
        .checks
        .exclude
        .extend(overrides.exclude.iter().cloned());

    let formatters = FormatterRegistry::standard();
    let mut stdout = std::io::stdout().lock();
    let outcome = run_pipeline(
        paths,
        format,
        &config,
        registry,
        verbose,
        &formatters,
        Path::new(OUTPUT_ARTIFACT),
        &mut stdout,
    )?;

    if let Outcome::Completed { reports } = outcome {
        if reports > 0 {
            bail!("found {reports} lint errors");
        }
    }
    Ok(())
}

/// Loads configuration from the resolved source, or defaults.
fn load_config(source: &ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p = other.path().context("resolved config has no path")?;
            if other.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            Config::from_file(p).context("failed to load config")
        }
    }
}

/// Executes the lint pipeline against explicit sinks.
///
/// `registry` must already hold the built-in library; custom checks
/// from `config` are added here. The formatted result is written to
/// the `artifact` path first (truncating any previous run), then to
/// `primary`, byte for byte the same.
///
/// # Errors
///
/// Fails when custom checks or enabled-check validation fail, when an
/// input path is inaccessible, when the engine fails, or when either
/// sink cannot be written ("output saving failed" for the artifact,
/// "output formatting failed" for the primary sink).
#[allow(clippy::too_many_arguments)]
pub fn run_pipeline(
    paths: &[PathBuf],
    format: OutputFormat,
    config: &Config,
    mut registry: CheckRegistry,
    verbose: bool,
    formatters: &FormatterRegistry,
    artifact: &Path,
    primary: &mut dyn Write,
) -> Result<Outcome> {
    // Resolve the formatter before touching any input
    let formatter = formatters
        .get(format)
        .with_context(|| format!("unknown output format: {format}"))?;

    load_custom_checks_into(config, &mut registry)?;

    let enabled = get_enabled_checks_and_validate(config, &registry)?;
    if enabled.is_empty() {
        warn!("no checks enabled");
        return Ok(Outcome::NoChecksEnabled);
    }

    let contexts = create_contexts(paths, config)?;
    if verbose {
        for ctx in &contexts {
            for invalid in ctx.invalid_objects() {
                warn!(
                    "failed to load object from {}: {}",
                    invalid.metadata.file_path.display(),
                    invalid.load_err
                );
            }
        }
    }
    if contexts.iter().all(|ctx| ctx.objects().is_empty()) {
        warn!("no valid objects found");
        return Ok(Outcome::NoValidObjects);
    }

    let result = klint_core::run(&contexts, &registry, &enabled)?;

    let file = File::create(artifact).context("output saving failed")?;
    let mut writer = BufWriter::new(file);
    formatter
        .render(&result, &mut writer)
        .and_then(|()| writer.flush().map_err(Into::into))
        .context("output saving failed")?;

    formatter
        .render(&result, primary)
        .context("output formatting failed")?;

    Ok(Outcome::Completed {
        reports: result.reports.len(),
    })
}
