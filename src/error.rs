//! Manifest error types

use thiserror::Error;

/// Errors returned by manifest loading.
///
/// Exactly two kinds exist: the path could not be read, or the bytes read
/// were not a valid, in-bound, schema-compatible document. Neither is
/// retried, and neither is ever converted into a defaulted success.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The file at `path` could not be read.
    #[error("failed to read manifest at '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document at `path` was malformed, exceeded a decode bound, or did
    /// not match the shape of the target structure.
    #[error("failed to decode manifest at '{path}': {reason}")]
    Decode { path: String, reason: String },
}

impl ManifestError {
    /// Path of the offending document.
    pub fn path(&self) -> &str {
        match self {
            ManifestError::Io { path, .. } | ManifestError::Decode { path, .. } => path,
        }
    }

    /// True when the path itself could not be read.
    pub fn is_io(&self) -> bool {
        matches!(self, ManifestError::Io { .. })
    }

    /// True when bytes were read but did not decode into the target.
    pub fn is_decode(&self) -> bool {
        matches!(self, ManifestError::Decode { .. })
    }
}
