//! Manifest loader — reads a resource document from disk and decodes it
//! into a caller-specified type.
//!
//! Input may be YAML or JSON; both take the same decode path (YAML 1.2 is a
//! superset of JSON), so equivalent documents in either format decode to
//! equal values. The file extension is never consulted.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde_yaml::Value;
use tracing::debug;

use crate::error::ManifestError;

/// Upper bound on the raw document buffer. Anything larger is rejected as a
/// decode error before parsing starts.
pub const MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

/// Upper bound on the nesting depth of the decoded document tree.
pub const MAX_NODE_DEPTH: usize = 100;

/// Loads typed resource manifests, typically fixture documents for tests.
///
/// Holds no state beyond an optional base path, so a single loader can be
/// shared freely across parallel test cases.
#[derive(Debug, Clone)]
pub struct ManifestLoader {
    base_path: Option<PathBuf>,
}

impl ManifestLoader {
    pub fn new() -> Self {
        Self { base_path: None }
    }

    /// Set a base directory that relative manifest paths are joined onto.
    pub fn with_base_path(mut self, path: impl AsRef<Path>) -> Self {
        self.base_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Read the document at `path` and decode it into `T`.
    ///
    /// The whole file is read first; nothing is decoded if the read fails.
    /// Repeated calls on an unchanged file yield equal results.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Io`] if the file cannot be read, and
    /// [`ManifestError::Decode`] if its content is malformed, exceeds a
    /// decode bound, or does not match the shape of `T`.
    pub fn load<T: DeserializeOwned>(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<T, ManifestError> {
        let path = self.resolve(path.as_ref());
        let bytes = std::fs::read(&path).map_err(|e| ManifestError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let resource = decode_document(&bytes, &path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "loaded manifest");
        Ok(resource)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_path {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Default for ManifestLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the document at `path` into `T` with a default loader.
///
/// # Errors
///
/// Same contract as [`ManifestLoader::load`].
pub fn load_manifest<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, ManifestError> {
    ManifestLoader::new().load(path)
}

/// Single decode strategy for both formats: parse into one YAML document
/// tree, enforce the bounds on that tree, then deserialize it into the
/// target structure.
fn decode_document<T: DeserializeOwned>(bytes: &[u8], path: &Path) -> Result<T, ManifestError> {
    if bytes.len() > MAX_DOCUMENT_BYTES {
        return Err(decode_error(
            path,
            format!(
                "document is {} bytes, exceeding the {} byte bound",
                bytes.len(),
                MAX_DOCUMENT_BYTES
            ),
        ));
    }

    let doc: Value = serde_yaml::from_slice(bytes).map_err(|e| decode_error(path, e.to_string()))?;

    let depth = node_depth(&doc);
    if depth > MAX_NODE_DEPTH {
        return Err(decode_error(
            path,
            format!(
                "document nests {} levels deep, exceeding the bound of {}",
                depth, MAX_NODE_DEPTH
            ),
        ));
    }

    serde_yaml::from_value(doc).map_err(|e| decode_error(path, e.to_string()))
}

fn decode_error(path: &Path, reason: String) -> ManifestError {
    ManifestError::Decode {
        path: path.display().to_string(),
        reason,
    }
}

/// Depth of the document tree, walked iteratively so the measurement itself
/// cannot overflow the stack on hostile input.
fn node_depth(root: &Value) -> usize {
    let mut max = 0;
    let mut stack: Vec<(&Value, usize)> = vec![(root, 1)];
    while let Some((node, depth)) = stack.pop() {
        max = max.max(depth);
        match node {
            Value::Sequence(items) => {
                stack.extend(items.iter().map(|item| (item, depth + 1)));
            }
            Value::Mapping(map) => {
                for (key, value) in map {
                    stack.push((key, depth + 1));
                    stack.push((value, depth + 1));
                }
            }
            Value::Tagged(tagged) => stack.push((&tagged.value, depth + 1)),
            _ => {}
        }
    }
    max
}
