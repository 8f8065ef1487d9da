use crate::conf::types::{
    HttpSource, LocalSource, S3Source, SftpSource, Source, SourceSpec, SourceTypeError,
};
use crate::conf::validation::{FieldPath, ValidateOptions, ValidationReport, check_path};
use std::collections::HashSet;

/// Validate the sources of one website.
///
/// Source ids must be unique within the website; only the second and later
/// occurrences of an id are reported.
pub fn validate_sources(
    sources: &[SourceSpec],
    prefix: &FieldPath,
    opts: &ValidateOptions,
    report: &mut ValidationReport,
) {
    let mut seen_ids = HashSet::new();

    for (j, spec) in sources.iter().enumerate() {
        let field = prefix.index(j);

        let id = spec.id.trim();
        if id.is_empty() {
            report.source_id_is_empty(&field.field("id"));
        } else if !seen_ids.insert(id) {
            report.duplicate_source_id(id, &field.field("id"));
        }

        match spec.lower() {
            Ok(source) => validate_source(&source, &field, opts, report),
            Err(SourceTypeError::Missing) => report.source_type_is_empty(&field.field("type")),
            Err(SourceTypeError::Unsupported(kind)) => {
                report.unsupported_source_type(&kind, &field.field("type"))
            }
        }
    }
}

/// Per-transport checks for a source whose type is known.
pub fn validate_source(
    source: &Source,
    field: &FieldPath,
    opts: &ValidateOptions,
    report: &mut ValidationReport,
) {
    match source {
        Source::Local(local) => validate_local(local, field, opts, report),
        Source::Sftp(sftp) => validate_sftp(sftp, field, opts, report),
        Source::Http(http) => validate_http(http, field, report),
        Source::S3(s3) => validate_s3(s3, field, report),
        Source::Agent => {}
    }
}

fn validate_local(
    local: &LocalSource,
    field: &FieldPath,
    opts: &ValidateOptions,
    report: &mut ValidationReport,
) {
    if is_blank(&local.path) && is_blank(&local.pattern) {
        report.source_requires_path_or_pattern("local", field);
        return;
    }

    if !opts.check_paths {
        return;
    }

    // Each field is checked on its own; a pattern can be valid while the
    // literal path is not.
    if let Some(path) = &local.path {
        report.path_check(&field.field("path"), check_path(path, opts.setup_mode));
    }
    if let Some(pattern) = &local.pattern {
        report.path_check(&field.field("pattern"), check_path(pattern, opts.setup_mode));
    }
}

fn validate_sftp(
    sftp: &SftpSource,
    field: &FieldPath,
    opts: &ValidateOptions,
    report: &mut ValidationReport,
) {
    if sftp.host.trim().is_empty() {
        report.source_field_is_empty("sftp.host", &field.field("host"));
    }
    if sftp.user.trim().is_empty() {
        report.source_field_is_empty("sftp.user", &field.field("user"));
    }

    let has_credentials = sftp
        .auth
        .as_ref()
        .is_some_and(|auth| !is_blank(&auth.key_file) || !is_blank(&auth.password));
    if !has_credentials {
        report.sftp_auth_is_missing(&field.field("auth"));
    }

    if is_blank(&sftp.path) && is_blank(&sftp.pattern) {
        report.source_requires_path_or_pattern("sftp", field);
    } else if opts.check_remote {
        report.remote_path_check_unsupported_warning(field);
    }
}

fn validate_http(http: &HttpSource, field: &FieldPath, report: &mut ValidationReport) {
    if http.url.trim().is_empty() {
        report.source_field_is_empty("http.url", &field.field("url"));
    }

    if let Some(index) = &http.index
        && index.url.trim().is_empty()
    {
        report.source_field_is_empty("http.index.url", &field.field("index").field("url"));
    }
}

fn validate_s3(s3: &S3Source, field: &FieldPath, report: &mut ValidationReport) {
    if s3.bucket.trim().is_empty() {
        report.source_field_is_empty("s3.bucket", &field.field("bucket"));
    }

    // Both or neither: anonymous access or a full key pair.
    if is_blank(&s3.access_key) != is_blank(&s3.secret_key) {
        report.s3_credentials_mismatch(&field.field("accessKey"));
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}
