mod error;
mod loader;
pub mod setup;
pub mod types;
pub mod validation;

pub use error::ConfigError;
pub use loader::{ConfigFormat, load_config, parse_config};
pub use types::Config;
pub use validation::{ValidateOptions, ValidationReport, validate_config};
