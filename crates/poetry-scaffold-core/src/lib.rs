//! Poetry Scaffold Core - library behind the `create-poetry-app` CLI
//!
//! Collects project metadata, generates a pyproject.toml, and drives
//! Poetry to materialize the project directory, pin a Python version, and
//! install dependencies.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Validators and builders** - pure functions over single fields
//!   ([`validate`], [`range`]) and the manifest renderer ([`manifest`])
//! - **Resolution** - the [`resolve`] state machine applying the
//!   flag -> prompt -> default precedence per field, consulting the
//!   [`template`] catalog
//! - **Collaborators** - Poetry subprocess drivers ([`poetry`]) and
//!   interpreter/virtualenv handling ([`runtime`])
//! - **TUI** - optional cliclack-based workflow (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): enables the cliclack-based prompt module and the
//!   end-to-end `run` workflow

pub mod error;
pub mod manifest;
pub mod poetry;
pub mod range;
pub mod resolve;
pub mod runtime;
pub mod spec;
pub mod template;
pub mod validate;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use range::python_constraint;
pub use resolve::{resolve_spec, CreateArgs, Prompter};
pub use runtime::{check_python, EnvironmentBinding, ProcessEnv, RuntimeInfo};
pub use spec::ProjectSpec;
pub use template::{Catalog, FileCatalog, TemplateCatalog};

#[cfg(feature = "tui")]
pub use tui::run;
