use crate::conf::types::{
    DatabaseConfig, PvFilterConfig, SUPPORTED_DATABASE_DRIVER, SystemConfig,
};
use crate::conf::validation::{FieldPath, ValidationReport};

pub fn validate_database(db: &DatabaseConfig, report: &mut ValidationReport) {
    let driver = db.driver.trim();
    if driver.is_empty() {
        report.database_driver_is_empty();
    } else if driver != SUPPORTED_DATABASE_DRIVER {
        report.unsupported_database_driver(driver, SUPPORTED_DATABASE_DRIVER);
    }

    if db.dsn.trim().is_empty() {
        report.database_dsn_is_empty();
    }
}

pub fn validate_system(system: &SystemConfig, report: &mut ValidationReport) {
    let root = FieldPath::root("system");
    let limits = [
        ("logRetentionDays", system.log_retention_days),
        ("parseBatchSize", system.parse_batch_size),
        ("ipGeoCacheLimit", system.ip_geo_cache_limit),
    ];

    for (name, value) in limits {
        if value <= 0 {
            report.value_must_be_positive(&root.field(name), value);
        }
    }
}

/// Only presence is checked here. Whether the patterns compile is decided
/// when the page-view filter is built.
pub fn validate_pv_filter(filter: &PvFilterConfig, report: &mut ValidationReport) {
    let root = FieldPath::root("pvFilter");

    if filter.status_code_include.is_empty() {
        report.list_is_empty(&root.field("statusCodeInclude"));
    }
    if filter.exclude_patterns.is_empty() {
        report.list_is_empty(&root.field("excludePatterns"));
    }
}
