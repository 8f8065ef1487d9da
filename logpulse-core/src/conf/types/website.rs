use crate::conf::types::SourceSpec;
use serde::{Deserialize, Serialize};

/// A monitored website.
///
/// Either the legacy single `log_path` is used (when `sources` is empty) or
/// the list of sources; never both.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct WebsiteSpec {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceSpec>,
}

impl WebsiteSpec {
    pub fn is_legacy(&self) -> bool {
        self.sources.is_empty()
    }
}
