//! Template catalog loading
//!
//! Templates are named bundles of extra dependencies, declared in a TOML
//! catalog under `template.dependency.<name>`:
//!
//! ```toml
//! [template.dependency.ai]
//! numpy = "^1.26"
//! torch = "^2.2"
//! ```
//!
//! The catalog is looked up in the working directory first, then in the
//! user config directory.

use crate::error::ScaffoldError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Catalog file name, both in the working directory and under the user
/// config directory.
pub const CATALOG_FILE: &str = "config.toml";

/// Parsed template catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    template: TemplateSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TemplateSection {
    #[serde(default)]
    dependency: HashMap<String, HashMap<String, String>>,
}

impl Catalog {
    /// Parse a catalog from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Look up the dependency table for a template by name.
    pub fn dependencies_for(
        &self,
        template: &str,
    ) -> Result<HashMap<String, String>, ScaffoldError> {
        self.template
            .dependency
            .get(template)
            .cloned()
            .ok_or_else(|| ScaffoldError::TemplateNotFound(template.to_string()))
    }
}

/// Source of template dependency tables.
///
/// The input resolver consults this seam so tests can substitute an
/// in-memory catalog for the file-backed one.
pub trait TemplateCatalog {
    /// Resolve a template name to its extra dependencies.
    ///
    /// An empty name means "no template" and must return an empty map
    /// without touching any backing store.
    fn dependencies(&self, template: &str) -> Result<HashMap<String, String>, ScaffoldError>;
}

/// File-backed catalog, loaded lazily on first non-empty lookup.
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn load(&self) -> Result<Catalog, ScaffoldError> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ScaffoldError::CatalogUnreadable {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Catalog::parse(&content).map_err(|e| ScaffoldError::CatalogUnreadable {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}

impl TemplateCatalog for FileCatalog {
    fn dependencies(&self, template: &str) -> Result<HashMap<String, String>, ScaffoldError> {
        if template.is_empty() {
            return Ok(HashMap::new());
        }
        self.load()?.dependencies_for(template)
    }
}

/// Resolve the catalog location: `config.toml` in the working directory
/// wins, otherwise fall back to the user config directory. The returned
/// path may not exist; a missing file only matters once a template is
/// actually requested.
pub fn locate_catalog() -> PathBuf {
    let local = PathBuf::from(CATALOG_FILE);
    if local.exists() {
        return local;
    }
    if let Some(config_dir) = dirs::config_dir() {
        let user = config_dir.join("create-poetry-app").join(CATALOG_FILE);
        if user.exists() {
            return user;
        }
    }
    local
}

/// Convenience wrapper used by callers that already know the catalog path.
pub fn load_template_dependencies(
    template: &str,
    catalog_path: &Path,
) -> Result<HashMap<String, String>, ScaffoldError> {
    FileCatalog::new(catalog_path.to_path_buf()).dependencies(template)
}
