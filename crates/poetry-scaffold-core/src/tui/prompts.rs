//! Charm-style CLI workflow using cliclack
//!
//! Drives the full pipeline: resolve inputs, derive the version constraint,
//! clear the destination, scaffold with Poetry, write the manifest, bind
//! the interpreter, and install dependencies.

use crate::manifest;
use crate::poetry;
use crate::resolve::{resolve_spec, CreateArgs, Prompter};
use crate::runtime::{self, EnvironmentBinding, ProcessEnv};
use crate::template::{locate_catalog, FileCatalog};
use crate::validate::sanitize_version;
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// [`Prompter`] backed by cliclack prompts.
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn input(&mut self, prompt: &str, default: &str) -> Result<String> {
        let value: String = cliclack::input(prompt)
            .placeholder(default)
            .default_input(default)
            .interact()?;
        Ok(value)
    }

    fn input_optional(&mut self, prompt: &str) -> Result<String> {
        let value: String = cliclack::input(prompt).required(false).interact()?;
        Ok(value)
    }

    fn confirm(&mut self, prompt: &str) -> Result<bool> {
        let value = cliclack::confirm(prompt).initial_value(false).interact()?;
        Ok(value)
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        cliclack::log::warning(message)?;
        Ok(())
    }
}

/// Run the create workflow end to end.
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("create-poetry-app")?;

    let catalog = FileCatalog::new(locate_catalog());
    let mut prompter = CliclackPrompter;

    // Step 1: Resolve every field and derive the python constraint
    let mut spec = resolve_spec(args, &mut prompter, &catalog)?;
    spec.finalize()?;

    // Step 2: Clear the destination (asks before removing anything)
    let project_dir = PathBuf::from(&spec.project_name);
    if clear_destination(&project_dir, &mut prompter)? {
        cliclack::log::info(format!("Removed existing directory {}", project_dir.display()))?;
    }

    // Step 3: Scaffold the directory structure
    poetry::new_project(&spec.project_name, &spec.package_name).await?;

    // Step 4: Write and echo the manifest
    let manifest_path = manifest::write(&spec, &project_dir)?;
    cliclack::log::success(format!("Generated {}", manifest_path.display()))?;
    println!("{}", manifest::render(&spec));

    // Step 5: Persist the virtualenv setting
    poetry::configure_venv(&spec.venv_in_project).await?;

    // Step 6: Bind the interpreter, dropping any inherited virtualenv first
    let mut env = ProcessEnv;
    if let Some(stale) = env.current() {
        cliclack::log::info(format!(
            "Deactivating inherited virtualenv {}",
            stale.display()
        ))?;
        env.clear();
    }

    let version = sanitize_version(&spec.python_version);
    let interpreter = runtime::check_python(&version);
    if !interpreter.available {
        bail!(
            "Python {} is not available. Please install it using your preferred \
             Python version management tool.",
            version
        );
    }
    cliclack::log::success(format!(
        "Found {}",
        interpreter.version.as_deref().unwrap_or(&interpreter.name)
    ))?;
    poetry::use_python_version(&project_dir, &version).await?;

    // Step 7: Install dependencies
    poetry::install(&project_dir).await?;

    if spec.venv_in_project.eq_ignore_ascii_case("true") {
        let activate = project_dir.join(".venv").join("bin").join("activate");
        if activate.exists() {
            cliclack::log::info(format!(
                "Activate the virtual environment with: source {}",
                activate.display()
            ))?;
        } else {
            cliclack::log::warning(format!(
                "Virtual environment activation script not found at {}",
                activate.display()
            ))?;
        }
    }

    cliclack::outro(format!(
        "Project '{}' created with Python {}",
        spec.project_name, spec.python_version
    ))?;

    Ok(())
}

/// If the destination exists and is non-empty, ask before removing it.
/// Declining aborts the run. Returns whether anything was removed.
fn clear_destination<P: Prompter>(dir: &Path, prompter: &mut P) -> Result<bool> {
    let occupied = dir.exists()
        && dir
            .read_dir()
            .map(|mut entries| entries.next().is_some())
            .unwrap_or(false);

    if !occupied {
        return Ok(false);
    }

    prompter.warn(&format!(
        "Destination {} exists and is not empty.",
        dir.display()
    ))?;

    if !prompter.confirm("Remove the existing directory and continue?")? {
        bail!("Operation aborted.");
    }

    std::fs::remove_dir_all(dir)
        .with_context(|| format!("Failed to remove {}", dir.display()))?;
    Ok(true)
}
