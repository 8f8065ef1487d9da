use crate::conf::load_config;
use crate::enrichment::pv_filter::{PageViewDecision, PvFilterHandle, RejectReason};
use clap::Args;
use std::path::PathBuf;

/// Run one log record through the page-view filter.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Path to config file
    #[arg(long, default_value = crate::cli::conf::DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// HTTP status code of the record
    #[arg(long)]
    pub status: u16,

    /// Request path of the record
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Client address token as it appears in the log
    #[arg(long, default_value = "")]
    pub ip: String,
}

pub fn run(args: ClassifyArgs) -> anyhow::Result<bool> {
    let cfg = load_config(&args.config)?;
    let handle = PvFilterHandle::from_config(&cfg)?;

    let decision = handle.evaluate(args.status, &args.path, &args.ip);
    println!("{}", describe(decision, &cfg.pv_filter.exclude_patterns));

    Ok(decision.is_page_view())
}

pub fn describe(decision: PageViewDecision, patterns: &[String]) -> String {
    match decision {
        PageViewDecision::Count => "counted as page view".to_string(),
        PageViewDecision::Reject(RejectReason::StatusCode) => {
            "rejected: status code is not in pvFilter.statusCodeInclude".to_string()
        }
        PageViewDecision::Reject(RejectReason::PrivateAddress) => {
            "rejected: client address is private or reserved".to_string()
        }
        PageViewDecision::Reject(RejectReason::ExcludedIp) => {
            "rejected: client address is listed in pvFilter.excludeIPs".to_string()
        }
        PageViewDecision::Reject(RejectReason::ExcludedPath { index }) => format!(
            "rejected: path matches pvFilter.excludePatterns[{}] ({})",
            index,
            patterns.get(index).map(String::as_str).unwrap_or("?")
        ),
    }
}
