pub mod cli;
pub mod conf;
pub mod enrichment;
pub mod logging;
