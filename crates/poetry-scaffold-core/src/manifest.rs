//! pyproject.toml generation
//!
//! Renders the finalized [`ProjectSpec`] into Poetry's manifest grammar.
//! No validation happens here: every value is already validated and
//! normalized by the time it arrives. The whole document is assembled in
//! memory and written with a single call, so the destination is never left
//! half-written.

use crate::spec::ProjectSpec;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Manifest file name inside the project directory.
pub const MANIFEST_FILE: &str = "pyproject.toml";

/// Render the manifest document for a finalized spec.
pub fn render(spec: &ProjectSpec) -> String {
    let author = format!("{} <{}>", spec.author_name, spec.author_email);

    let mut doc = format!(
        "[tool.poetry]\n\
         name = \"{name}\"\n\
         version = \"0.1.0\"\n\
         description = \"{description}\"\n\
         authors = [\"{author}\"]\n\
         readme = \"README.md\"\n\
         packages = [{{include = \"{name}\", from = \"src\"}}]\n\
         \n\
         [tool.poetry.dependencies]\n\
         python = \"{python}\"\n",
        name = spec.package_name,
        description = spec.description,
        author = author,
        python = spec.python_constraint,
    );

    // Iteration order of the extra dependencies is not significant.
    for (package, version) in &spec.dependencies {
        let _ = writeln!(doc, "{package} = \"{version}\"");
    }

    doc.push_str(
        "\n[build-system]\n\
         requires = [\"poetry-core\"]\n\
         build-backend = \"poetry.core.masonry.api\"\n",
    );

    doc
}

/// Write the manifest into `project_dir`, replacing whatever Poetry
/// generated there. Returns the path written.
pub fn write(spec: &ProjectSpec, project_dir: &Path) -> Result<PathBuf> {
    let path = project_dir.join(MANIFEST_FILE);
    std::fs::write(&path, render(spec))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn demo_spec() -> ProjectSpec {
        let mut spec = ProjectSpec {
            project_name: "demo".to_string(),
            package_name: "demo_pkg".to_string(),
            python_version: "3.10".to_string(),
            upper_python_version: "3.13".to_string(),
            description: "a demo".to_string(),
            author_name: "Ada".to_string(),
            author_email: "ada@example.com".to_string(),
            venv_in_project: "true".to_string(),
            ..Default::default()
        };
        spec.finalize().unwrap();
        spec
    }

    #[test]
    fn test_render_identity_block() {
        let doc = render(&demo_spec());
        assert!(doc.starts_with("[tool.poetry]\n"));
        assert!(doc.contains("name = \"demo_pkg\"\n"));
        assert!(doc.contains("version = \"0.1.0\"\n"));
        assert!(doc.contains("authors = [\"Ada <ada@example.com>\"]\n"));
        assert!(doc.contains("readme = \"README.md\"\n"));
        assert!(doc.contains("packages = [{include = \"demo_pkg\", from = \"src\"}]\n"));
    }

    #[test]
    fn test_render_python_constraint() {
        let doc = render(&demo_spec());
        assert!(doc.contains("[tool.poetry.dependencies]\npython = \">=3.10,<3.13\"\n"));
    }

    #[test]
    fn test_render_extra_dependencies() {
        let mut spec = demo_spec();
        spec.dependencies =
            HashMap::from([("numpy".to_string(), "^1.26".to_string())]);
        let doc = render(&spec);
        assert!(doc.contains("numpy = \"^1.26\"\n"));
    }

    #[test]
    fn test_render_without_template_has_no_extra_lines() {
        let doc = render(&demo_spec());
        let dependencies = doc
            .split("[tool.poetry.dependencies]\n")
            .nth(1)
            .unwrap()
            .split("\n[build-system]")
            .next()
            .unwrap();
        assert_eq!(dependencies.trim_end(), "python = \">=3.10,<3.13\"");
    }

    #[test]
    fn test_render_build_system_block() {
        let doc = render(&demo_spec());
        assert!(doc.ends_with(
            "[build-system]\nrequires = [\"poetry-core\"]\nbuild-backend = \"poetry.core.masonry.api\"\n"
        ));
    }

    #[test]
    fn test_write_is_single_document() {
        let dir = tempfile::tempdir().unwrap();
        let spec = demo_spec();
        let path = write(&spec, dir.path()).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), render(&spec));
    }
}
