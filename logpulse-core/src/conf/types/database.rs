use serde::{Deserialize, Serialize};

/// The only database driver the ingestion writers support.
pub const SUPPORTED_DATABASE_DRIVER: &str = "postgres";

#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct DatabaseConfig {
    pub driver: String,
    pub dsn: String,
    pub max_open_conns: Option<u32>,
    pub max_idle_conns: Option<u32>,
}
