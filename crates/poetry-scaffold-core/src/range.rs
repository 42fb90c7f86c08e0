//! Python version constraint construction
//!
//! Combines the resolved floor version and optional ceiling into the single
//! constraint string written to the manifest's `python` dependency.

use crate::error::ScaffoldError;
use crate::validate::{clean_ceiling_version, sanitize_version};

/// Build the dependency constraint from a floor and an optional ceiling.
///
/// Exactly three shapes are possible:
/// - ceiling present: `>=<floor>,<<ceiling>` with both ends sanitized
/// - floor already carries an operator (`^3.12`, `~3.12`): passed through
/// - bare numeric floor: promoted to a caret range (`3.12` -> `^3.12`)
///
/// The ceiling is re-validated here even when it was cleaned at prompt time;
/// the cleanup is idempotent. An empty floor is rejected up front so a bare
/// `^` can never be emitted.
pub fn python_constraint(floor: &str, ceiling: &str) -> Result<String, ScaffoldError> {
    if floor.is_empty() {
        return Err(ScaffoldError::EmptyPythonVersion);
    }

    if !ceiling.is_empty() {
        let upper = clean_ceiling_version(ceiling)?;
        return Ok(format!(">={},<{}", sanitize_version(floor), upper));
    }

    if floor.starts_with(|c: char| !c.is_ascii_digit()) {
        Ok(floor.to_string())
    } else {
        Ok(format!("^{floor}"))
    }
}
