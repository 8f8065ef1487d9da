use crate::conf::types::PvFilterConfig;
use crate::enrichment::pv_filter::PvFilterError;
use crate::enrichment::pv_filter::ip::{is_reserved_ip, normalize_ip};
use ahash::AHashSet;
use regex::Regex;
use std::net::IpAddr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    StatusCode,
    PrivateAddress,
    ExcludedIp,
    /// Index into `pvFilter.excludePatterns` of the first matching pattern.
    ExcludedPath { index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageViewDecision {
    Count,
    Reject(RejectReason),
}

impl PageViewDecision {
    pub fn is_page_view(self) -> bool {
        matches!(self, PageViewDecision::Count)
    }
}

/// Immutable page-view filter rules.
#[derive(Debug, Default)]
pub struct PvFilter {
    status_codes: AHashSet<u16>,
    patterns: Vec<Regex>,
    exclude_ips: AHashSet<String>,
}

impl PvFilter {
    /// A filter with no allowed status codes. Rejects every record.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Compile the filter rules.
    ///
    /// A pattern that does not compile is an error: a filter that silently
    /// drops a rule would count traffic that should have been excluded.
    pub fn from_config(cfg: &PvFilterConfig) -> Result<Self, PvFilterError> {
        let patterns = cfg
            .exclude_patterns
            .iter()
            .enumerate()
            .map(|(index, pattern)| {
                Regex::new(pattern).map_err(|source| PvFilterError::InvalidPattern {
                    index,
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let exclude_ips = cfg
            .exclude_ips
            .iter()
            .map(|ip| normalize_ip(ip))
            .filter(|ip| !ip.is_empty())
            .collect();

        Ok(Self {
            status_codes: cfg.status_code_include.iter().copied().collect(),
            patterns,
            exclude_ips,
        })
    }

    /// Decide whether a record counts as a page view.
    ///
    /// Matching order...
    /// 1. Status code allow-list
    /// 2. Private / reserved client address
    /// 3. Excluded client address
    /// 4. Excluded path patterns
    pub fn evaluate(&self, status: u16, path: &str, raw_ip: &str) -> PageViewDecision {
        if !self.status_codes.contains(&status) {
            return PageViewDecision::Reject(RejectReason::StatusCode);
        }

        let ip = normalize_ip(raw_ip);

        if ip.parse::<IpAddr>().is_ok_and(is_reserved_ip) {
            return PageViewDecision::Reject(RejectReason::PrivateAddress);
        }

        // Non-IP tokens fall through to plain string equality here.
        if !ip.is_empty() && self.exclude_ips.contains(&ip) {
            return PageViewDecision::Reject(RejectReason::ExcludedIp);
        }

        if let Some(index) = self.patterns.iter().position(|re| re.is_match(path)) {
            return PageViewDecision::Reject(RejectReason::ExcludedPath { index });
        }

        PageViewDecision::Count
    }

    pub fn classify(&self, status: u16, path: &str, raw_ip: &str) -> bool {
        let decision = self.evaluate(status, path, raw_ip);
        if let PageViewDecision::Reject(reason) = decision {
            tracing::trace!(status, path, raw_ip, ?reason, "record not counted as page view");
        }
        decision.is_page_view()
    }

    pub fn status_code_count(&self) -> usize {
        self.status_codes.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    pub fn exclude_ip_count(&self) -> usize {
        self.exclude_ips.len()
    }
}
