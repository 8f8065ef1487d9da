pub mod classify;
pub mod conf;
