use crate::conf::{ConfigError, ValidateOptions, ValidationReport, load_config, validate_config};
use crate::enrichment::pv_filter::{PvFilter, PvFilterError};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pretty,
    Plain,
    Json,
}

/// Validate a config file and print the outcome.
///
/// Returns `Ok(false)` when the config must not be used to start the
/// pipeline.
pub fn check(path: &Path, format: ReportFormat, opts: &ValidateOptions) -> anyhow::Result<bool> {
    let cfg = match load_config(path) {
        Ok(cfg) => cfg,
        Err(err) => {
            print_config_error(&err);
            return Ok(false);
        }
    };

    let report = validate_config(Some(&cfg), opts);
    print_report(&report, format)?;

    for issue in &report.warnings {
        tracing::warn!(field = %issue.field, "{}", issue.message);
    }

    // Pattern compilation is not part of structural validation, but a bad
    // pattern still keeps the pipeline from starting.
    let filter = match PvFilter::from_config(&cfg.pv_filter) {
        Ok(filter) => Some(filter),
        Err(err) => {
            print_filter_error(&err);
            None
        }
    };

    let Some(filter) = filter.filter(|_| report.is_ok()) else {
        return Ok(false);
    };

    if format != ReportFormat::Json {
        println!("✔ Config loaded successfully");
        println!("✔ {} websites", cfg.websites.len());
        println!(
            "✔ {} sources",
            cfg.websites.iter().map(|w| w.sources.len()).sum::<usize>()
        );
        println!("✔ {} status codes counted", filter.status_code_count());
        println!("✔ {} exclude patterns", filter.pattern_count());
        println!("✔ {} excluded addresses", filter.exclude_ip_count());
    }

    Ok(true)
}

fn print_report(report: &ValidationReport, format: ReportFormat) -> anyhow::Result<()> {
    match format {
        ReportFormat::Json => println!("{}", report.render_json()?),
        ReportFormat::Plain => print!("{}", report.render_plain()),
        ReportFormat::Pretty => print!("{}", report.render_pretty()),
    }
    Ok(())
}

fn print_config_error(err: &ConfigError) {
    eprintln!("{}", err);
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

fn print_filter_error(err: &PvFilterError) {
    eprintln!("{}", err);
    eprintln!();
    eprintln!(
        "Exclude patterns use Rust regex syntax. Escape literal dots and\n\
         anchor patterns to the path, e.g. \"^/static/\" or \"\\\\.css$\"."
    );
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::ReadFile { .. } => Some(
            "Create a starter config with:\n\
             \n\
             logpulse config init config/logpulse.json",
        ),
        ConfigError::Parse { .. } => Some(
            "The file extension selects the format: .json, .toml, .yaml/.yml or .hcl.\n\
             Field names are camelCase, e.g. `logPath`, `statusCodeInclude`.",
        ),
    }
}
