//! Lint contexts and the best-effort input loader.

use crate::config::Config;
use crate::object::{InvalidObject, KubeObject, ObjectMetadata};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// The parsed representation of one input argument's documents.
///
/// Valid and invalid objects are kept side by side; partial failure
/// never discards what did load.
#[derive(Debug, Default)]
pub struct LintContext {
    objects: Vec<KubeObject>,
    invalid_objects: Vec<InvalidObject>,
}

impl LintContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Successfully parsed objects.
    #[must_use]
    pub fn objects(&self) -> &[KubeObject] {
        &self.objects
    }

    /// Objects that failed to load, with their errors.
    #[must_use]
    pub fn invalid_objects(&self) -> &[InvalidObject] {
        &self.invalid_objects
    }

    /// Adds a valid object.
    pub fn add_object(&mut self, object: KubeObject) {
        self.objects.push(object);
    }

    /// Records a load failure.
    pub fn add_invalid_object(&mut self, invalid: InvalidObject) {
        self.invalid_objects.push(invalid);
    }
}

/// Fatal input-loading errors.
///
/// Per-object parse failures are never fatal; they are recorded on the
/// context as [`InvalidObject`]s instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// An input path itself could not be accessed.
    #[error("failed to access {path}: {source}")]
    PathAccess {
        /// The inaccessible path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// Turns input path arguments into one [`LintContext`] per path.
///
/// Files yield their YAML documents; directories are walked recursively
/// for `*.yaml`/`*.yml` files. Loading is best-effort per object: a
/// malformed document is recorded as invalid and never prevents its
/// siblings from loading. Paths matching the configuration's ignore
/// globs yield empty contexts.
///
/// # Errors
///
/// Returns [`LoadError::PathAccess`] only when an argument path itself
/// cannot be accessed.
pub fn create_contexts<P: AsRef<Path>>(
    paths: &[P],
    config: &Config,
) -> Result<Vec<LintContext>, LoadError> {
    let mut contexts = Vec::with_capacity(paths.len());

    for path in paths {
        let path = path.as_ref();
        let mut ctx = LintContext::new();

        if config.should_ignore_path(path) {
            debug!("ignoring path {}", path.display());
            contexts.push(ctx);
            continue;
        }

        let meta = std::fs::metadata(path).map_err(|e| LoadError::PathAccess {
            path: path.to_path_buf(),
            source: e,
        })?;

        if meta.is_dir() {
            for entry in walkdir::WalkDir::new(path)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
            {
                let entry_path = entry.path();
                if !entry.file_type().is_file()
                    || !is_yaml_file(entry_path)
                    || config.should_ignore_path(entry_path)
                {
                    continue;
                }
                // Unreadable files inside a directory are best-effort too
                match std::fs::read_to_string(entry_path) {
                    Ok(content) => load_documents(&mut ctx, entry_path, &content),
                    Err(e) => ctx.add_invalid_object(InvalidObject::new(
                        ObjectMetadata::from_file(entry_path),
                        format!("failed to read file: {e}"),
                    )),
                }
            }
        } else {
            let content =
                std::fs::read_to_string(path).map_err(|e| LoadError::PathAccess {
                    path: path.to_path_buf(),
                    source: e,
                })?;
            load_documents(&mut ctx, path, &content);
        }

        debug!(
            "loaded {} object(s), {} invalid, from {}",
            ctx.objects().len(),
            ctx.invalid_objects().len(),
            path.display()
        );
        contexts.push(ctx);
    }

    Ok(contexts)
}

fn is_yaml_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    )
}

/// Parses every document in `content`, recording failures per object.
fn load_documents(ctx: &mut LintContext, path: &Path, content: &str) {
    for doc in split_documents(content) {
        let metadata = ObjectMetadata::from_file(path);
        match serde_yaml::from_str::<serde_yaml::Value>(doc) {
            Ok(serde_yaml::Value::Null) => {}
            Ok(value) => match KubeObject::from_value(value, metadata.clone()) {
                Ok(object) => ctx.add_object(object),
                Err(e) => ctx.add_invalid_object(InvalidObject::new(metadata, e.to_string())),
            },
            Err(e) => ctx.add_invalid_object(InvalidObject::new(metadata, e.to_string())),
        }
    }
}

/// Splits a multi-document YAML stream on `---` separators.
///
/// Documents are parsed independently so that one syntactically broken
/// document cannot poison the rest of the stream.
fn split_documents(content: &str) -> Vec<&str> {
    let mut docs = Vec::new();
    let mut start = 0;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        if line.trim_end() == "---" {
            docs.push(&content[start..offset]);
            start = offset + line.len();
        }
        offset += line.len();
    }
    docs.push(&content[start..]);

    docs.retain(|d| {
        !d.trim().is_empty() && d.lines().any(|l| !l.trim_start().starts_with('#') && !l.trim().is_empty())
    });
    docs
}
