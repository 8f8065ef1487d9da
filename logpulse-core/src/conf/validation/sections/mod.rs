mod settings;
mod source;
mod website;

pub use settings::*;
pub use source::*;
pub use website::*;
