use clap::{Parser, Subcommand};
use logpulse_core::cli;
use logpulse_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "logpulse",
    version,
    about = "logpulse: configuration gate and page-view filter for web log analytics"
)]
struct Cli {
    /// Emit logs as JSON regardless of terminal detection
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },

    /// Check how the page-view filter treats a single log record.
    /// Exits with status 1 when the record is not counted.
    Classify(cli::classify::ClassifyArgs),
}

fn main() {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        default_log_format()
    };
    init_logging(format);

    let result = match cli.command {
        Command::Config { cmd } => cli::conf::run(cmd),
        Command::Classify(args) => cli::classify::run(args),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("error: {e:#}");
            std::process::exit(1);
        }
    }
}
