use crate::conf::validation::{FieldPath, PathCheck};
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Everything a validation pass found, in the order it was found.
///
/// Errors block pipeline startup. Warnings are advisory.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<FieldIssue>,
    pub warnings: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn has_violations(&self) -> bool {
        !self.errors.is_empty() || !self.warnings.is_empty()
    }

    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub(crate) fn error(&mut self, field: &FieldPath, message: impl Into<String>) {
        self.errors.push(FieldIssue {
            severity: Severity::Error,
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub(crate) fn warning(&mut self, field: &FieldPath, message: impl Into<String>) {
        self.warnings.push(FieldIssue {
            severity: Severity::Warning,
            field: field.to_string(),
            message: message.into(),
        });
    }

    /// Record the outcome of a filesystem check against `field`.
    pub(crate) fn path_check(&mut self, field: &FieldPath, check: PathCheck) {
        match check {
            PathCheck::Ok => {}
            PathCheck::Warning(message) => self.warning(field, message),
            PathCheck::Error(message) => self.error(field, message),
        }
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for issue in self.errors.iter().chain(self.warnings.iter()) {
            let severity = match issue.severity {
                Severity::Error => "error",
                Severity::Warning => "warning",
            };
            let _ = writeln!(out, "{}: {}: {}", issue.field, severity, issue.message);
        }
        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = String::new();
        let errors = self.errors.len();
        let warnings = self.warnings.len();

        if errors > 0 {
            let _ = writeln!(
                out,
                "configuration validation failed ({} errors, {} warnings)\n",
                errors, warnings
            );
        } else if warnings > 0 {
            let _ = writeln!(
                out,
                "configuration is valid with {} warnings\n",
                warnings
            );
        }

        for issue in &self.errors {
            let _ = writeln!(out, "{}", issue.field.bold());
            let _ = writeln!(out, "  {}: {}\n", "error".red().bold(), issue.message);
        }
        for issue in &self.warnings {
            let _ = writeln!(out, "{}", issue.field.bold());
            let _ = writeln!(out, "  {}: {}\n", "warning".yellow().bold(), issue.message);
        }

        out
    }
}

/// Top-level Validation
impl ValidationReport {
    pub fn config_is_missing(&mut self) {
        self.error(&FieldPath::root("config"), "configuration must not be empty")
    }

    pub fn no_websites(&mut self) {
        self.error(
            &FieldPath::root("websites"),
            "at least one website must be configured",
        )
    }
}

/// Website Validation
impl ValidationReport {
    pub fn website_name_is_empty(&mut self, field: &FieldPath) {
        self.error(field, "website name must not be empty")
    }

    pub fn log_path_is_empty(&mut self, field: &FieldPath) {
        self.error(field, "log path must not be empty")
    }
}

/// Source Validation
impl ValidationReport {
    pub fn source_id_is_empty(&mut self, field: &FieldPath) {
        self.error(field, "source.id must not be empty")
    }

    pub fn duplicate_source_id(&mut self, id: &str, field: &FieldPath) {
        self.error(field, format!("duplicate source.id: {}", id))
    }

    pub fn source_type_is_empty(&mut self, field: &FieldPath) {
        self.error(field, "source.type must not be empty")
    }

    pub fn unsupported_source_type(&mut self, kind: &str, field: &FieldPath) {
        self.error(
            field,
            format!(
                "unsupported source.type: {} (expected one of local, sftp, http, s3, agent)",
                kind
            ),
        )
    }

    pub fn source_requires_path_or_pattern(&mut self, kind: &str, field: &FieldPath) {
        self.error(field, format!("{} source requires path or pattern", kind))
    }

    pub fn source_field_is_empty(&mut self, qualified_name: &str, field: &FieldPath) {
        self.error(field, format!("{} must not be empty", qualified_name))
    }

    pub fn sftp_auth_is_missing(&mut self, field: &FieldPath) {
        self.error(field, "sftp source requires auth.keyFile or auth.password")
    }

    pub fn remote_path_check_unsupported_warning(&mut self, field: &FieldPath) {
        self.warning(
            field,
            "remote path verification is not supported yet; the path was not checked",
        )
    }

    pub fn s3_credentials_mismatch(&mut self, field: &FieldPath) {
        self.error(
            field,
            "s3.accessKey and s3.secretKey must be configured together",
        )
    }
}

/// Global Settings Validation
impl ValidationReport {
    pub fn database_driver_is_empty(&mut self) {
        self.error(
            &FieldPath::root("database.driver"),
            "database.driver must not be empty",
        )
    }

    pub fn unsupported_database_driver(&mut self, driver: &str, supported: &str) {
        self.error(
            &FieldPath::root("database.driver"),
            format!(
                "unsupported database.driver: {} (only {} is supported)",
                driver, supported
            ),
        )
    }

    pub fn database_dsn_is_empty(&mut self) {
        self.error(
            &FieldPath::root("database.dsn"),
            "database.dsn must not be empty",
        )
    }

    pub fn value_must_be_positive(&mut self, field: &FieldPath, value: i64) {
        self.error(
            field,
            format!("{} must be greater than 0 (got {})", field, value),
        )
    }

    pub fn list_is_empty(&mut self, field: &FieldPath) {
        self.error(field, format!("{} must not be empty", field))
    }
}
