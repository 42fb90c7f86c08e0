//! Input resolution
//!
//! Resolves every configurable field through the same precedence chain:
//! explicit flag, then interactive prompt, then fixed default. Fields are
//! visited in a fixed order because later steps depend on earlier ones
//! (the template must be resolved before its dependencies can be loaded,
//! and defaults-mode short-circuits everything after the template).
//!
//! Terminal I/O goes through the [`Prompter`] seam so the resolver can be
//! driven by scripted responses in tests.

use crate::error::ScaffoldError;
use crate::spec::{
    ProjectSpec, DEFAULT_AUTHOR_EMAIL, DEFAULT_AUTHOR_NAME, DEFAULT_DESCRIPTION,
    DEFAULT_PACKAGE_NAME, DEFAULT_PROJECT_NAME, DEFAULT_PYTHON_VERSION, DEFAULT_VENV_CONFIG,
};
use crate::template::TemplateCatalog;
use crate::validate::{clean_ceiling_version, is_valid_email, normalize_package_name};
use anyhow::Result;

/// Flag values for the create command. `None` means "not supplied, ask".
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Skip every prompt except project name and template.
    pub yes: bool,

    /// Project directory name.
    pub project_name: Option<String>,

    /// Importable package name.
    pub package_name: Option<String>,

    /// Floor Python version (`3.12`, `^3.12`, `~3.12`).
    pub python_version: Option<String>,

    /// Exclusive upper Python version bound.
    pub upper_python_version: Option<String>,

    /// Project description.
    pub description: Option<String>,

    /// Author name.
    pub author_name: Option<String>,

    /// Author email.
    pub author_email: Option<String>,

    /// Poetry virtualenvs.in-project setting ("true"/"false").
    pub venv_in_project: Option<String>,

    /// Template name from the dependency catalog.
    pub template: Option<String>,
}

/// Blocking terminal interaction used during resolution.
pub trait Prompter {
    /// Ask for a value with a stated default; an empty response resolves
    /// to the default.
    fn input(&mut self, prompt: &str, default: &str) -> Result<String>;

    /// Ask for a value where an empty response is a valid answer.
    fn input_optional(&mut self, prompt: &str) -> Result<String>;

    /// Ask a yes/no question, defaulting to no.
    fn confirm(&mut self, prompt: &str) -> Result<bool>;

    /// Surface a diagnostic without interrupting the flow.
    fn warn(&mut self, message: &str) -> Result<()>;
}

/// Resolve all fields into a [`ProjectSpec`].
///
/// Project name and template are resolved unconditionally; template
/// resolution loads the dependency catalog immediately, and a catalog
/// failure aborts before any further field is touched. With `-y` the
/// remaining fields take their fixed defaults (overriding any flags) and
/// the template is dropped again: defaults-mode never carries extra
/// dependencies.
pub fn resolve_spec<P: Prompter, C: TemplateCatalog>(
    args: CreateArgs,
    prompter: &mut P,
    catalog: &C,
) -> Result<ProjectSpec> {
    let mut spec = ProjectSpec {
        project_name: args.project_name.unwrap_or_default(),
        package_name: args.package_name.unwrap_or_default(),
        python_version: args.python_version.unwrap_or_default(),
        upper_python_version: args.upper_python_version.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        author_name: args.author_name.unwrap_or_default(),
        author_email: args.author_email.unwrap_or_default(),
        venv_in_project: args.venv_in_project.unwrap_or_default(),
        template: args.template.unwrap_or_default(),
        ..Default::default()
    };

    if spec.project_name.is_empty() {
        spec.project_name = prompter.input(
            &format!("Enter project name (default: {DEFAULT_PROJECT_NAME})"),
            DEFAULT_PROJECT_NAME,
        )?;
    }

    if spec.template.is_empty() {
        spec.template =
            prompter.input_optional("Enter project template (optional, e.g., datascience, ai)")?;
    }
    spec.dependencies = catalog.dependencies(&spec.template)?;

    if args.yes {
        spec.package_name = DEFAULT_PACKAGE_NAME.to_string();
        spec.python_version = DEFAULT_PYTHON_VERSION.to_string();
        spec.upper_python_version.clear();
        spec.description = DEFAULT_DESCRIPTION.to_string();
        spec.author_name = DEFAULT_AUTHOR_NAME.to_string();
        spec.author_email = DEFAULT_AUTHOR_EMAIL.to_string();
        spec.venv_in_project = DEFAULT_VENV_CONFIG.to_string();
        spec.template.clear();
        spec.dependencies.clear();
        return Ok(spec);
    }

    if spec.package_name.is_empty() {
        spec.package_name = prompter.input(
            &format!("Enter your package name (default: {DEFAULT_PACKAGE_NAME})"),
            DEFAULT_PACKAGE_NAME,
        )?;
    }
    spec.package_name = normalize_package_name(&spec.package_name);

    if spec.python_version.is_empty() {
        spec.python_version = prompter.input(
            &format!(
                "Enter Python version (default: {DEFAULT_PYTHON_VERSION}, e.g., 3.12 or ^3.12 or ~3.12)"
            ),
            DEFAULT_PYTHON_VERSION,
        )?;
    }

    if spec.upper_python_version.is_empty() {
        let raw = prompter
            .input_optional("Enter upper Python version limit (optional, numbers only, e.g., 3.13)")?;
        // Unlike email, a malformed ceiling is fatal: no retry loop.
        spec.upper_python_version = clean_ceiling_version(&raw)?;
    }

    if spec.description.is_empty() {
        spec.description = prompter.input(
            &format!("Enter project description (default: {DEFAULT_DESCRIPTION})"),
            DEFAULT_DESCRIPTION,
        )?;
    }

    if spec.author_name.is_empty() {
        spec.author_name = prompter.input(
            &format!("Enter author name (default: {DEFAULT_AUTHOR_NAME})"),
            DEFAULT_AUTHOR_NAME,
        )?;
    }

    spec.author_email = resolve_email(spec.author_email, prompter)?;

    if spec.venv_in_project.is_empty() {
        spec.venv_in_project = prompter.input(
            &format!("Set virtualenvs.in-project to true/false (default: {DEFAULT_VENV_CONFIG})"),
            DEFAULT_VENV_CONFIG,
        )?;
    }

    Ok(spec)
}

/// The only retrying field: invalid values clear and re-enter the prompt
/// until a syntactically valid email is obtained. An empty response takes
/// the default, which always passes validation.
fn resolve_email<P: Prompter>(initial: String, prompter: &mut P) -> Result<String> {
    let mut candidate = initial;
    loop {
        if candidate.is_empty() {
            candidate = prompter.input(
                &format!("Enter author email (default: {DEFAULT_AUTHOR_EMAIL})"),
                DEFAULT_AUTHOR_EMAIL,
            )?;
        }
        if is_valid_email(&candidate) {
            return Ok(candidate);
        }
        prompter.warn(&format!(
            "{} Please enter a valid email address.",
            ScaffoldError::InvalidEmail(candidate.clone())
        ))?;
        candidate.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, VecDeque};

    /// Prompter driven by a fixed list of responses.
    struct Scripted {
        responses: VecDeque<&'static str>,
        warnings: Vec<String>,
        prompts: usize,
    }

    impl Scripted {
        fn new(responses: &[&'static str]) -> Self {
            Self {
                responses: responses.iter().copied().collect(),
                warnings: Vec::new(),
                prompts: 0,
            }
        }
    }

    impl Prompter for Scripted {
        fn input(&mut self, _prompt: &str, default: &str) -> Result<String> {
            self.prompts += 1;
            let response = self.responses.pop_front().expect("unexpected prompt");
            Ok(if response.is_empty() {
                default.to_string()
            } else {
                response.to_string()
            })
        }

        fn input_optional(&mut self, _prompt: &str) -> Result<String> {
            self.prompts += 1;
            Ok(self
                .responses
                .pop_front()
                .expect("unexpected prompt")
                .to_string())
        }

        fn confirm(&mut self, _prompt: &str) -> Result<bool> {
            self.prompts += 1;
            Ok(self.responses.pop_front() == Some("y"))
        }

        fn warn(&mut self, message: &str) -> Result<()> {
            self.warnings.push(message.to_string());
            Ok(())
        }
    }

    /// Catalog stub with a single "ai" template.
    struct StubCatalog;

    impl TemplateCatalog for StubCatalog {
        fn dependencies(
            &self,
            template: &str,
        ) -> Result<HashMap<String, String>, ScaffoldError> {
            match template {
                "" => Ok(HashMap::new()),
                "ai" => Ok(HashMap::from([(
                    "numpy".to_string(),
                    "^1.26".to_string(),
                )])),
                other => Err(ScaffoldError::TemplateNotFound(other.to_string())),
            }
        }
    }

    #[test]
    fn test_defaults_mode_with_project_flag() {
        let args = CreateArgs {
            yes: true,
            project_name: Some("demo".to_string()),
            ..Default::default()
        };
        // Only the template prompt fires; empty response means no template.
        let mut prompter = Scripted::new(&[""]);
        let mut spec = resolve_spec(args, &mut prompter, &StubCatalog).unwrap();
        spec.finalize().unwrap();

        assert_eq!(spec.project_name, "demo");
        assert_eq!(spec.package_name, "main");
        assert_eq!(spec.python_version, "^3.12");
        assert_eq!(spec.python_constraint, "^3.12");
        assert!(spec.dependencies.is_empty());
        assert_eq!(prompter.prompts, 1);
    }

    #[test]
    fn test_defaults_mode_drops_template_dependencies() {
        let args = CreateArgs {
            yes: true,
            project_name: Some("demo".to_string()),
            template: Some("ai".to_string()),
            ..Default::default()
        };
        let mut prompter = Scripted::new(&[]);
        let spec = resolve_spec(args, &mut prompter, &StubCatalog).unwrap();

        assert!(spec.template.is_empty());
        assert!(spec.dependencies.is_empty());
        assert_eq!(prompter.prompts, 0);
    }

    #[test]
    fn test_flags_suppress_all_prompts() {
        let args = CreateArgs {
            yes: false,
            project_name: Some("demo".to_string()),
            package_name: Some("my-pkg".to_string()),
            python_version: Some("3.10".to_string()),
            upper_python_version: Some("3.13".to_string()),
            description: Some("a demo".to_string()),
            author_name: Some("Ada".to_string()),
            author_email: Some("ada@example.com".to_string()),
            venv_in_project: Some("false".to_string()),
            template: Some("ai".to_string()),
        };
        let mut prompter = Scripted::new(&[]);
        let mut spec = resolve_spec(args, &mut prompter, &StubCatalog).unwrap();
        spec.finalize().unwrap();

        assert_eq!(prompter.prompts, 0);
        assert_eq!(spec.package_name, "my_pkg");
        assert_eq!(spec.python_constraint, ">=3.10,<3.13");
        assert_eq!(
            spec.dependencies.get("numpy").map(String::as_str),
            Some("^1.26")
        );
    }

    #[test]
    fn test_empty_responses_take_defaults() {
        let args = CreateArgs::default();
        // project, template, package, floor, ceiling, description,
        // author, email, venv
        let mut prompter = Scripted::new(&["", "", "", "", "", "", "", "", ""]);
        let mut spec = resolve_spec(args, &mut prompter, &StubCatalog).unwrap();
        spec.finalize().unwrap();

        assert_eq!(spec.project_name, "projectname");
        assert_eq!(spec.package_name, "main");
        assert_eq!(spec.description, "description");
        assert_eq!(spec.author_name, "Your Name");
        assert_eq!(spec.author_email, "you@example.com");
        assert_eq!(spec.venv_in_project, "true");
        assert_eq!(spec.python_constraint, "^3.12");
    }

    #[test]
    fn test_email_retry_loop() {
        let args = CreateArgs {
            project_name: Some("demo".to_string()),
            package_name: Some("pkg".to_string()),
            python_version: Some("3.12".to_string()),
            upper_python_version: Some("3.13".to_string()),
            description: Some("d".to_string()),
            author_name: Some("Ada".to_string()),
            venv_in_project: Some("true".to_string()),
            template: Some("".to_string()),
            ..Default::default()
        };
        // Template prompt fires (flag value is empty), then three email
        // attempts.
        let mut prompter = Scripted::new(&["", "not-an-email", "still@bad", "ada@example.com"]);
        let spec = resolve_spec(args, &mut prompter, &StubCatalog).unwrap();

        assert_eq!(spec.author_email, "ada@example.com");
        assert_eq!(prompter.warnings.len(), 2);
    }

    #[test]
    fn test_invalid_email_flag_enters_retry_loop() {
        let args = CreateArgs {
            project_name: Some("demo".to_string()),
            package_name: Some("pkg".to_string()),
            python_version: Some("3.12".to_string()),
            upper_python_version: Some("3.13".to_string()),
            description: Some("d".to_string()),
            author_name: Some("Ada".to_string()),
            author_email: Some("nope".to_string()),
            venv_in_project: Some("true".to_string()),
            template: Some("".to_string()),
            ..Default::default()
        };
        let mut prompter = Scripted::new(&["", "ada@example.org"]);
        let spec = resolve_spec(args, &mut prompter, &StubCatalog).unwrap();

        assert_eq!(spec.author_email, "ada@example.org");
        assert_eq!(prompter.warnings.len(), 1);
    }

    #[test]
    fn test_prompted_ceiling_is_cleaned() {
        let args = CreateArgs {
            project_name: Some("demo".to_string()),
            package_name: Some("pkg".to_string()),
            python_version: Some("3.10".to_string()),
            description: Some("d".to_string()),
            author_name: Some("Ada".to_string()),
            author_email: Some("ada@example.com".to_string()),
            venv_in_project: Some("true".to_string()),
            template: Some("".to_string()),
            ..Default::default()
        };
        // Template prompt, then ceiling with decorations to strip.
        let mut prompter = Scripted::new(&["", "v3.13!"]);
        let mut spec = resolve_spec(args, &mut prompter, &StubCatalog).unwrap();
        spec.finalize().unwrap();

        assert_eq!(spec.upper_python_version, "3.13");
        assert_eq!(spec.python_constraint, ">=3.10,<3.13");
    }

    #[test]
    fn test_malformed_ceiling_is_fatal() {
        let args = CreateArgs {
            project_name: Some("demo".to_string()),
            package_name: Some("pkg".to_string()),
            python_version: Some("3.10".to_string()),
            template: Some("".to_string()),
            ..Default::default()
        };
        let mut prompter = Scripted::new(&["", "abc"]);
        let err = resolve_spec(args, &mut prompter, &StubCatalog).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::InvalidCeilingVersion(_))
        ));
    }

    #[test]
    fn test_unknown_template_is_fatal() {
        let args = CreateArgs {
            project_name: Some("demo".to_string()),
            template: Some("datascience".to_string()),
            ..Default::default()
        };
        let mut prompter = Scripted::new(&[]);
        let err = resolve_spec(args, &mut prompter, &StubCatalog).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::TemplateNotFound(name)) if name == "datascience"
        ));
    }

    #[test]
    fn test_prompted_package_name_is_normalized() {
        let args = CreateArgs {
            project_name: Some("demo".to_string()),
            python_version: Some("3.12".to_string()),
            upper_python_version: Some("3.13".to_string()),
            description: Some("d".to_string()),
            author_name: Some("Ada".to_string()),
            author_email: Some("ada@example.com".to_string()),
            venv_in_project: Some("true".to_string()),
            template: Some("".to_string()),
            ..Default::default()
        };
        let mut prompter = Scripted::new(&["", "my-cool-pkg"]);
        let spec = resolve_spec(args, &mut prompter, &StubCatalog).unwrap();

        assert_eq!(spec.package_name, "my_cool_pkg");
    }
}
