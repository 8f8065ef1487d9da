use thiserror::Error;

#[derive(Debug, Error)]
pub enum PvFilterError {
    #[error("invalid pvFilter.excludePatterns[{index}] '{pattern}': {source}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
