//! Configuration types for klint.

use crate::check::CheckSpec;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level configuration, deserialized from a YAML file.
///
/// Resolved once per invocation; immutable thereafter. No partial
/// configuration is ever produced on error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Check enablement settings.
    #[serde(default)]
    pub checks: ChecksConfig,

    /// User-defined checks, instantiated from templates at startup.
    #[serde(default)]
    pub custom_checks: Vec<CheckSpec>,

    /// Glob patterns for input paths to skip entirely.
    #[serde(default)]
    pub ignore_paths: Vec<String>,
}

/// Which checks run, resolved against the registry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChecksConfig {
    /// Enable every built-in check, not just the default set.
    #[serde(default, rename = "addAllBuiltIn")]
    pub add_all_built_in: bool,

    /// Do not enable the default check set automatically.
    #[serde(default)]
    pub do_not_auto_add_defaults: bool,

    /// Check names to enable in addition to the defaults.
    #[serde(default)]
    pub include: Vec<String>,

    /// Check names to disable.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Config {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Parse`] when it is not valid configuration YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the YAML is invalid or does
    /// not match the schema.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// True when an input path matches one of the configured ignore globs.
    #[must_use]
    pub fn should_ignore_path(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.ignore_paths.iter().any(|pattern| {
            glob::Pattern::new(pattern).is_ok_and(|g| g.matches(&path_str))
        })
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Config file is not valid configuration YAML.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}
