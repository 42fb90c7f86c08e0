//! Resolved project configuration
//!
//! `ProjectSpec` is the single aggregate passed through the pipeline: built
//! field by field by the input resolver, finalized once the version bounds
//! are known, then consumed read-only by the manifest writer.

use crate::error::ScaffoldError;
use crate::range::python_constraint;
use std::collections::HashMap;

pub const DEFAULT_PROJECT_NAME: &str = "projectname";
pub const DEFAULT_PACKAGE_NAME: &str = "main";
pub const DEFAULT_PYTHON_VERSION: &str = "^3.12";
pub const DEFAULT_VENV_CONFIG: &str = "true";
pub const DEFAULT_DESCRIPTION: &str = "description";
pub const DEFAULT_AUTHOR_NAME: &str = "Your Name";
pub const DEFAULT_AUTHOR_EMAIL: &str = "you@example.com";

/// All configuration needed to scaffold a project.
///
/// Empty strings mean "not yet resolved" during resolution. After
/// [`ProjectSpec::finalize`] the struct is treated as immutable.
#[derive(Debug, Clone, Default)]
pub struct ProjectSpec {
    /// Directory name of the new project.
    pub project_name: String,

    /// Importable package name; hyphens are normalized to underscores
    /// before this is written anywhere.
    pub package_name: String,

    /// Floor Python version: bare (`3.12`) or operator-decorated (`^3.12`).
    pub python_version: String,

    /// Optional exclusive upper bound, digits and dots only once cleaned.
    pub upper_python_version: String,

    pub description: String,
    pub author_name: String,
    pub author_email: String,

    /// Poetry `virtualenvs.in-project` setting, kept as the literal
    /// "true"/"false" string Poetry expects.
    pub venv_in_project: String,

    /// Template name; empty means no extra dependencies.
    pub template: String,

    /// Extra dependencies resolved from the template catalog.
    pub dependencies: HashMap<String, String>,

    /// Derived constraint for the `python` dependency. Never prompted for;
    /// set only by [`ProjectSpec::finalize`].
    pub python_constraint: String,
}

impl ProjectSpec {
    /// Derive the python dependency constraint from the resolved bounds.
    pub fn finalize(&mut self) -> Result<(), ScaffoldError> {
        self.python_constraint =
            python_constraint(&self.python_version, &self.upper_python_version)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finalize_derives_constraint() {
        let mut spec = ProjectSpec {
            python_version: "3.10".to_string(),
            upper_python_version: "3.13".to_string(),
            ..Default::default()
        };
        spec.finalize().unwrap();
        assert_eq!(spec.python_constraint, ">=3.10,<3.13");
    }

    #[test]
    fn test_finalize_rejects_unresolved_floor() {
        let mut spec = ProjectSpec::default();
        assert!(spec.finalize().is_err());
    }
}
