mod handle_tests;

use crate::conf::types::PvFilterConfig;

pub(crate) fn filter_config(codes: &[u16], patterns: &[&str], ips: &[&str]) -> PvFilterConfig {
    PvFilterConfig {
        status_code_include: codes.to_vec(),
        exclude_patterns: patterns.iter().map(|p| p.to_string()).collect(),
        exclude_ips: ips.iter().map(|ip| ip.to_string()).collect(),
    }
}
