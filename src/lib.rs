//! # typed-manifest
//!
//! Typed manifest loader for test fixtures: reads a declarative resource
//! document (YAML or JSON) from disk and decodes it into a caller-defined
//! type. One resource instance per call.
//!
//! ## Overview
//!
//! The loader accepts either serialization format transparently — content,
//! not the file extension, determines how the document is read. Both formats
//! go through a single decode strategy over one document tree, so equivalent
//! YAML and JSON documents always decode to equal values. Malformed,
//! oversized, or deeply nested input is rejected by fixed decode bounds
//! instead of exhausting memory.
//!
//! Failures are structured and two-kinded: the path could not be read
//! ([`ManifestError::Io`]), or the bytes were not a valid, in-bound,
//! schema-compatible document ([`ManifestError::Decode`]). The loader never
//! retries and never substitutes a default resource; the caller decides
//! whether a failed fixture aborts the run.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`loader`] | [`ManifestLoader`] and the decode bounds |
//! | [`error`] | [`ManifestError`] — the two error kinds |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde::Deserialize;
//! use typed_manifest::ManifestLoader;
//!
//! #[derive(Debug, Deserialize)]
//! struct Workflow {
//!     kind: String,
//! }
//!
//! fn main() -> typed_manifest::Result<()> {
//!     let loader = ManifestLoader::new().with_base_path("tests/fixtures");
//!     let workflow: Workflow = loader.load("workflow.yaml")?;
//!     println!("kind: {}", workflow.kind);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod loader;

pub use error::ManifestError;
pub use loader::{load_manifest, ManifestLoader, MAX_DOCUMENT_BYTES, MAX_NODE_DEPTH};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, ManifestError>;
