use crate::conf::setup::is_setup_mode;
use crate::conf::types::Config;
use crate::conf::validation::report::ValidationReport;
use crate::conf::validation::sections;

/// Knobs for a validation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ValidateOptions {
    /// Check that local log paths and patterns exist on disk.
    pub check_paths: bool,

    /// Ask for remote source paths to be verified. Only produces an advisory
    /// warning; no network calls are made.
    pub check_remote: bool,

    /// Tolerate missing local paths (warning instead of error).
    pub setup_mode: bool,
}

impl ValidateOptions {
    /// Options with `setup_mode` taken from the environment.
    pub fn from_env(check_paths: bool, check_remote: bool) -> Self {
        Self {
            check_paths,
            check_remote,
            setup_mode: is_setup_mode(),
        }
    }
}

/// Validate everything in a loaded config.
///
/// Never fails; every problem found lands in the returned report. Issues
/// appear in check order: websites and their sources first, then database,
/// system and page-view filter settings.
pub fn validate_config(cfg: Option<&Config>, opts: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::default();

    let Some(cfg) = cfg else {
        report.config_is_missing();
        return report;
    };

    sections::validate_websites(&cfg.websites, opts, &mut report);
    sections::validate_database(&cfg.database, &mut report);
    sections::validate_system(&cfg.system, &mut report);
    sections::validate_pv_filter(&cfg.pv_filter, &mut report);

    tracing::debug!(
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        check_paths = opts.check_paths,
        setup_mode = opts.setup_mode,
        "configuration validated"
    );

    report
}
