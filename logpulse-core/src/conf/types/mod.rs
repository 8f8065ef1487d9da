mod config;
mod database;
mod pv_filter;
mod source;
mod system;
mod website;

pub use config::*;
pub use database::*;
pub use pv_filter::*;
pub use source::*;
pub use system::*;
pub use website::*;
