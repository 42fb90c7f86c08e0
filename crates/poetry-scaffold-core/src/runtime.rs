//! Python interpreter detection and virtualenv binding
//!
//! This module provides:
//! - Detection of a versioned Python interpreter on PATH
//! - A narrow capability over the process's virtualenv binding, so the
//!   pipeline never reads or mutates ambient environment state directly

use std::path::PathBuf;
use std::process::Command;

/// Interpreter detection result.
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether `python<version>` (e.g. `python3.12`) is available on
/// PATH, reporting the version string it prints.
pub fn check_python(sanitized_version: &str) -> RuntimeInfo {
    let name = format!("python{sanitized_version}");
    let output = Command::new(&name).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Capability over the current virtualenv binding.
///
/// An inherited `VIRTUAL_ENV` makes Poetry reuse the active environment
/// instead of the project's own; the pipeline drops it before binding the
/// new environment.
pub trait EnvironmentBinding {
    /// Path of the currently bound virtualenv, if any.
    fn current(&self) -> Option<PathBuf>;

    /// Drop the binding for this process and its children.
    fn clear(&mut self);
}

/// Binding backed by the real process environment (`VIRTUAL_ENV`).
pub struct ProcessEnv;

impl EnvironmentBinding for ProcessEnv {
    fn current(&self) -> Option<PathBuf> {
        std::env::var_os("VIRTUAL_ENV").map(PathBuf::from)
    }

    fn clear(&mut self) {
        std::env::remove_var("VIRTUAL_ENV");
    }
}
