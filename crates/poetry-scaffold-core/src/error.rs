//! Error taxonomy for the scaffolding pipeline
//!
//! Validation failures fall into two buckets with deliberately different
//! handling: a malformed email re-prompts (recoverable), while a malformed
//! upper version bound aborts the run immediately. Catalog errors are always
//! fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by field validation, version-range construction, and
/// template catalog resolution.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Recoverable: handled by the email retry loop, never aborts on its own.
    #[error("Invalid email format: '{0}'")]
    InvalidEmail(String),

    /// Fatal format error for the upper Python version bound.
    #[error("Invalid upper Python version format '{0}'. It should be in the format x.y or x.y.z.")]
    InvalidCeilingVersion(String),

    /// The floor version must be resolved before a constraint can be built.
    #[error("Python version must not be empty")]
    EmptyPythonVersion,

    /// The requested template has no entry under `template.dependency` in
    /// the catalog.
    #[error("Template '{0}' not found in the template catalog")]
    TemplateNotFound(String),

    /// The catalog file could not be read or parsed at all.
    #[error("Failed to load template catalog {path}: {reason}")]
    CatalogUnreadable { path: PathBuf, reason: String },
}
