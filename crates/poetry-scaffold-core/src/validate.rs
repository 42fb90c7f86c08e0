//! Field validators and normalizers
//!
//! Pure functions over single fields. Only `clean_ceiling_version` has a
//! failure path; the rest are total.

use crate::error::ScaffoldError;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email regex")
});

static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+(\.[0-9]+)?$").expect("version regex"));

/// Check that an email has a standard local@domain.tld shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Strip everything but digits and dots from a version token.
///
/// Produces a value safe to pass as a tool argument (e.g. `python3.12`).
pub fn sanitize_version(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Clean and validate an upper Python version bound.
///
/// Empty input is not an error: it means no ceiling was requested. Anything
/// else is stripped down to digits and dots and must then look like `x.y`
/// or `x.y.z`, otherwise the run aborts.
pub fn clean_ceiling_version(version: &str) -> Result<String, ScaffoldError> {
    if version.is_empty() {
        return Ok(String::new());
    }
    let cleaned = sanitize_version(version);
    if VERSION_RE.is_match(&cleaned) {
        Ok(cleaned)
    } else {
        Err(ScaffoldError::InvalidCeilingVersion(version.to_string()))
    }
}

/// Convert a package name to the form Python imports allow.
///
/// Package-name grammars disallow hyphens; underscores are the conventional
/// replacement. Total and idempotent.
pub fn normalize_package_name(name: &str) -> String {
    name.replace('-', "_")
}
