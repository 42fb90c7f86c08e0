//! Poetry subprocess drivers
//!
//! Thin wrappers around the external `poetry` binary. Each call reports a
//! binary outcome; any failure is fatal to the pipeline and nothing is
//! rolled back.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::path::Path;
use tokio::process::Command;

/// Run `poetry` with the given arguments, streaming its output to the
/// terminal and failing on a non-zero exit.
async fn run_poetry(args: &[&str], dir: Option<&Path>) -> Result<()> {
    println!("{} poetry {}", "Running:".dimmed(), args.join(" ").yellow());

    let mut cmd = Command::new("poetry");
    cmd.args(args);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }

    let status = cmd
        .status()
        .await
        .with_context(|| format!("Failed to run poetry {}", args.join(" ")))?;

    if !status.success() {
        bail!(
            "poetry {} failed with exit code {}",
            args.join(" "),
            status.code().unwrap_or(-1)
        );
    }
    Ok(())
}

/// Scaffold the project directory structure (`poetry new --src`).
pub async fn new_project(project_name: &str, package_name: &str) -> Result<()> {
    run_poetry(
        &["new", project_name, "--name", package_name, "--src"],
        None,
    )
    .await
}

/// Persist the virtualenvs.in-project setting.
pub async fn configure_venv(value: &str) -> Result<()> {
    run_poetry(&["config", "virtualenvs.in-project", value], None).await
}

/// Bind the project environment to a specific interpreter
/// (`poetry env use python<version>`).
pub async fn use_python_version(project_dir: &Path, sanitized_version: &str) -> Result<()> {
    let interpreter = format!("python{sanitized_version}");
    run_poetry(&["env", "use", &interpreter], Some(project_dir)).await
}

/// Install the dependencies declared in the generated manifest.
pub async fn install(project_dir: &Path) -> Result<()> {
    run_poetry(&["install"], Some(project_dir)).await
}
