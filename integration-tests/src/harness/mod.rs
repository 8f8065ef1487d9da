pub mod config;
pub mod tracing;

pub use config::{fixture_path, load_fixture, point_local_sources_at};
pub use tracing::{CapturedEvent, capture_events};
