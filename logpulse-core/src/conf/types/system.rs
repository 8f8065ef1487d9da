use serde::{Deserialize, Serialize};

/// Processing settings.
///
/// Numeric fields are signed so that negative values written by an operator
/// reach validation instead of failing deserialization.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SystemConfig {
    pub log_retention_days: i64,
    pub parse_batch_size: i64,
    pub ip_geo_cache_limit: i64,
    pub task_interval: Option<String>,
}

impl SystemConfig {
    pub fn recommended() -> Self {
        Self {
            log_retention_days: 30,
            parse_batch_size: 100,
            ip_geo_cache_limit: 1_000_000,
            task_interval: Some("1m".to_string()),
        }
    }
}
