use crate::conf::types::WebsiteSpec;
use crate::conf::validation::sections::validate_sources;
use crate::conf::validation::{FieldPath, ValidateOptions, ValidationReport, check_path};

/// Validate website definitions.
///
/// Structural errors here are aggregated, not fail-fast.
pub fn validate_websites(
    websites: &[WebsiteSpec],
    opts: &ValidateOptions,
    report: &mut ValidationReport,
) {
    if websites.is_empty() {
        report.no_websites();
    }

    let root = FieldPath::root("websites");
    for (i, site) in websites.iter().enumerate() {
        validate_website(site, &root.index(i), opts, report);
    }
}

pub fn validate_website(
    site: &WebsiteSpec,
    prefix: &FieldPath,
    opts: &ValidateOptions,
    report: &mut ValidationReport,
) {
    if site.name.trim().is_empty() {
        report.website_name_is_empty(&prefix.field("name"));
    }

    // Legacy single-log mode. `logPath` is ignored once sources are declared.
    if site.is_legacy() {
        let field = prefix.field("logPath");
        let log_path = site.log_path.as_deref().unwrap_or_default();
        if log_path.trim().is_empty() {
            report.log_path_is_empty(&field);
        } else if opts.check_paths {
            report.path_check(&field, check_path(log_path, opts.setup_mode));
        }
        return;
    }

    validate_sources(&site.sources, &prefix.field("sources"), opts, report);
}
