mod field;
pub mod path_check;
mod report;
mod sections;
#[cfg(test)]
mod tests;
mod validate;

pub use field::FieldPath;
pub use path_check::{PathCheck, check_path};
pub use report::*;
pub use sections::*;
pub use validate::{ValidateOptions, validate_config};
