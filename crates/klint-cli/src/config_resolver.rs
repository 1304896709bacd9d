//! Locating the effective configuration file.
//!
//! A run reads at most one config file. An explicit `--config` path is
//! taken as-is; otherwise the working directory is searched for
//! `klint.yaml` then `.klint.yaml`, and finally the per-user directory
//! (`~/.klint`, overridable through `KLINT_CONFIG_DIR`) is searched for
//! `config.yaml`. When no candidate exists the built-in defaults apply.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Provenance of the configuration picked for a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Path passed with `--config`, used without an existence check.
    Explicit(PathBuf),
    /// Config file found in the working directory.
    Project(PathBuf),
    /// Per-user fallback from the global config directory.
    Global(PathBuf),
    /// Nothing found; built-in defaults apply.
    Default,
}

impl ConfigSource {
    /// The file to load, when one was selected.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Whether the per-user fallback was selected.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Searches the standard locations for a configuration file.
///
/// Both search roots are fixed at construction, so a locator describes
/// one deterministic lookup.
#[derive(Debug)]
pub struct ConfigLocator {
    project_dir: PathBuf,
    global_dir: Option<PathBuf>,
}

impl ConfigLocator {
    /// Creates a locator rooted at `project_dir`, with the per-user
    /// directory taken from `KLINT_CONFIG_DIR` or the home directory.
    #[must_use]
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        let global_dir = std::env::var("KLINT_CONFIG_DIR")
            .map(PathBuf::from)
            .ok()
            .or_else(|| home::home_dir().map(|home| home.join(".klint")));
        Self {
            project_dir: project_dir.into(),
            global_dir,
        }
    }

    /// Replaces the per-user directory, or disables it with `None`.
    #[must_use]
    pub fn with_global_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.global_dir = dir;
        self
    }

    /// Picks the configuration source for this run.
    ///
    /// An explicit path short-circuits the search and is not checked
    /// for existence: a typo in `--config` must surface as a load
    /// error, not silently fall back to a weaker candidate.
    #[must_use]
    pub fn locate(&self, explicit: Option<&Path>) -> ConfigSource {
        if let Some(path) = explicit {
            return ConfigSource::Explicit(path.to_path_buf());
        }

        for name in ["klint.yaml", ".klint.yaml"] {
            let candidate = self.project_dir.join(name);
            if candidate.is_file() {
                debug!("using project config {}", candidate.display());
                return ConfigSource::Project(candidate);
            }
        }

        if let Some(candidate) = self.global_dir.as_deref().map(|d| d.join("config.yaml")) {
            if candidate.is_file() {
                debug!("using per-user config {}", candidate.display());
                return ConfigSource::Global(candidate);
            }
        }

        ConfigSource::Default
    }
}
