mod check;
mod dump;
mod init;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
pub use init::*;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config/logpulse.json";

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate configuration and exit
    Check {
        /// Path to config file
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,

        /// Print issues one per line without colors
        #[arg(short, long, conflicts_with = "json")]
        plain: bool,

        /// Print the validation report as JSON
        #[arg(long)]
        json: bool,

        /// Check that local log paths exist
        #[arg(long)]
        check_paths: bool,

        /// Request verification of remote source paths
        #[arg(long)]
        check_remote: bool,

        /// Treat missing local paths as warnings (also enabled by LOGPULSE_SETUP_MODE)
        #[arg(long)]
        setup: bool,
    },

    /// Print parsed configuration
    Dump {
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,

        /// Output as JSON
        #[arg(long, conflicts_with = "yaml")]
        json: bool,

        /// Output as YAML
        #[arg(long)]
        yaml: bool,
    },

    /// Write a starter config file
    Init {
        /// Path to config file
        #[arg(default_value = DEFAULT_CONFIG_PATH)]
        path: PathBuf,
    },
}

pub fn run(cmd: ConfigCmd) -> anyhow::Result<bool> {
    match cmd {
        ConfigCmd::Check {
            path,
            plain,
            json,
            check_paths,
            check_remote,
            setup,
        } => {
            let format = if json {
                ReportFormat::Json
            } else if plain {
                ReportFormat::Plain
            } else {
                ReportFormat::Pretty
            };
            let mut opts = crate::conf::ValidateOptions::from_env(check_paths, check_remote);
            opts.setup_mode |= setup;
            check(&path, format, &opts)
        }
        ConfigCmd::Dump { path, json, yaml } => dump(&path, json, yaml).map(|_| true),
        ConfigCmd::Init { path } => init(&path).map(|_| true),
    }
}
