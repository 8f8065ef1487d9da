mod validate_tests;

use crate::conf::types::{
    Config, DatabaseConfig, PvFilterConfig, Source, SourceSpec, SystemConfig, WebsiteSpec,
};

/// A config with no validation issues and no filesystem dependencies.
pub(crate) fn valid_config() -> Config {
    Config {
        websites: vec![site_with_sources("blog", vec![SourceSpec::new("feed", Source::Agent)])],
        database: DatabaseConfig {
            driver: "postgres".to_string(),
            dsn: "postgres://u:p@localhost/db".to_string(),
            ..Default::default()
        },
        system: SystemConfig::recommended(),
        pv_filter: PvFilterConfig::recommended(),
    }
}

pub(crate) fn site_with_sources(name: &str, sources: Vec<SourceSpec>) -> WebsiteSpec {
    WebsiteSpec {
        name: name.to_string(),
        log_path: None,
        sources,
    }
}

pub(crate) fn fields(issues: &[crate::conf::validation::FieldIssue]) -> Vec<&str> {
    issues.iter().map(|i| i.field.as_str()).collect()
}
