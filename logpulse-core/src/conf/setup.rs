//! Setup-mode signal.
//!
//! While an operator is still putting a deployment together, log files may
//! not exist yet. In setup mode validation reports missing local paths as
//! warnings instead of errors.

/// Environment variable that turns setup mode on.
pub const SETUP_MODE_ENV: &str = "LOGPULSE_SETUP_MODE";

pub fn is_setup_mode() -> bool {
    std::env::var(SETUP_MODE_ENV)
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

pub(crate) fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
