use serde::{Deserialize, Serialize};

/// Page-view filter rules.
#[derive(Debug, Default, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PvFilterConfig {
    /// Only records with one of these status codes can count as page views.
    pub status_code_include: Vec<u16>,

    /// Regular expressions matched against the request path.
    pub exclude_patterns: Vec<String>,

    /// Addresses whose traffic is never counted. Accepts the same token forms
    /// as raw log fields (`ip:port`, `[v6]:port`).
    #[serde(rename = "excludeIPs")]
    pub exclude_ips: Vec<String>,
}

impl PvFilterConfig {
    pub fn recommended() -> Self {
        Self {
            status_code_include: vec![200],
            exclude_patterns: [
                r"favicon\.ico$",
                r"robots\.txt$",
                r"sitemap\.xml$",
                r"\.(?:js|css|png|jpe?g|gif|svg|webp|ico|woff2?|ttf|map)$",
                r"^/(?:api|static|assets)/",
                r"^/(?:wp-admin|wp-login\.php|xmlrpc\.php)",
                r"^/health(?:z|check)?$",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            exclude_ips: vec![],
        }
    }
}
