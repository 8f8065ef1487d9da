//! Filesystem existence checks for local log paths.
//!
//! A path value is either a literal file path or, when it contains a `*`
//! wildcard, a pattern that must match at least one file. Missing files can
//! be tolerated during initial setup; files that exist but cannot be read
//! never are.

use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathCheck {
    Ok,
    Warning(String),
    Error(String),
}

impl PathCheck {
    pub fn is_ok(&self) -> bool {
        matches!(self, PathCheck::Ok)
    }
}

const SETUP_HINT: &str = "acceptable during initial setup; create it before ingestion starts";

/// Classify `value` as present, absent, or inaccessible.
///
/// With `allow_missing`, absence is a warning rather than an error.
/// Permission problems are always errors.
pub fn check_path(value: &str, allow_missing: bool) -> PathCheck {
    let value = value.trim();
    if value.is_empty() {
        return PathCheck::Error("path must not be empty".to_string());
    }

    if is_glob(value) {
        return if count_glob_matches(value) > 0 {
            PathCheck::Ok
        } else {
            missing(
                allow_missing,
                format!("no files match pattern {}", value),
            )
        };
    }

    match std::fs::metadata(Path::new(value)) {
        Ok(_) => PathCheck::Ok,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            missing(allow_missing, format!("log path does not exist: {}", value))
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => PathCheck::Error(format!(
            "log path is not accessible: {} (the current user lacks permission to read it)",
            value
        )),
        Err(e) => PathCheck::Error(format!("log path is not accessible: {} ({})", value, e)),
    }
}

fn missing(allow_missing: bool, message: String) -> PathCheck {
    if allow_missing {
        PathCheck::Warning(format!("{} ({})", message, SETUP_HINT))
    } else {
        PathCheck::Error(message)
    }
}

/// Only `*` marks a pattern; `?` is an ordinary file name character.
fn is_glob(value: &str) -> bool {
    value.contains('*')
}

/// A malformed pattern counts as zero matches. Unreadable entries are
/// skipped.
fn count_glob_matches(pattern: &str) -> usize {
    match glob::glob(pattern) {
        Ok(paths) => paths.filter_map(Result::ok).count(),
        Err(e) => {
            tracing::debug!(pattern, error = %e, "invalid glob pattern");
            0
        }
    }
}
