use crate::conf::Config;
use crate::enrichment::pv_filter::{PageViewDecision, PvFilter, PvFilterError};
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::sync::Arc;

/// Swappable reference to the current filter snapshot.
///
/// Readers take one snapshot per call, so a record is always judged by a
/// single, complete rule set even while a reload is in progress.
pub struct PvFilterHandle {
    current: ArcSwap<PvFilter>,
}

impl Default for PvFilterHandle {
    fn default() -> Self {
        Self::new(PvFilter::empty())
    }
}

impl PvFilterHandle {
    pub fn new(filter: PvFilter) -> Self {
        Self {
            current: ArcSwap::from_pointee(filter),
        }
    }

    pub fn from_config(cfg: &Config) -> Result<Self, PvFilterError> {
        Ok(Self::new(PvFilter::from_config(&cfg.pv_filter)?))
    }

    /// Build a new snapshot from `cfg` and publish it.
    ///
    /// The current snapshot stays in place if building fails.
    pub fn initialize(&self, cfg: &Config) -> Result<(), PvFilterError> {
        // Build OFFLINE, then swap.
        let new_filter = PvFilter::from_config(&cfg.pv_filter)?;

        let old = self.current.load();
        tracing::info!(
            old_status_codes = old.status_code_count(),
            old_patterns = old.pattern_count(),
            old_exclude_ips = old.exclude_ip_count(),
            new_status_codes = new_filter.status_code_count(),
            new_patterns = new_filter.pattern_count(),
            new_exclude_ips = new_filter.exclude_ip_count(),
            "pv filter initialized"
        );
        drop(old);

        self.replace(new_filter);
        Ok(())
    }

    /// Publish `filter` and return the snapshot it replaced.
    pub fn replace(&self, filter: PvFilter) -> Arc<PvFilter> {
        self.current.swap(Arc::new(filter))
    }

    pub fn snapshot(&self) -> Arc<PvFilter> {
        self.current.load_full()
    }

    pub fn evaluate(&self, status: u16, path: &str, raw_ip: &str) -> PageViewDecision {
        self.current.load().evaluate(status, path, raw_ip)
    }

    pub fn classify(&self, status: u16, path: &str, raw_ip: &str) -> bool {
        self.current.load().classify(status, path, raw_ip)
    }
}

static GLOBAL: Lazy<PvFilterHandle> = Lazy::new(PvFilterHandle::default);

/// The process-wide filter handle used by the ingestion pipeline.
///
/// Rejects everything until [`init_pv_filters`] has run.
pub fn global() -> &'static PvFilterHandle {
    &GLOBAL
}

pub fn init_pv_filters(cfg: &Config) -> Result<(), PvFilterError> {
    global().initialize(cfg)
}

pub fn should_count_as_page_view(status: u16, path: &str, raw_ip: &str) -> bool {
    global().classify(status, path, raw_ip)
}
