//! Page-view classification.
//!
//! A [`PvFilter`] is an immutable snapshot of the filter rules. It is built
//! once from configuration and published through a [`PvFilterHandle`];
//! reloads build a new snapshot and swap it in whole.

mod error;
mod filter;
mod handle;
pub mod ip;
#[cfg(test)]
mod tests;

pub use error::PvFilterError;
pub use filter::{PageViewDecision, PvFilter, RejectReason};
pub use handle::{PvFilterHandle, global, init_pv_filters, should_count_as_page_view};
pub use ip::{is_reserved_ip, normalize_ip};
