use crate::conf::ConfigError;
use crate::conf::types::Config;
use std::fs;
use std::path::Path;

/// Serialization formats a config file may be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
    Hcl,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Unknown extensions are read as
    /// JSON.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("toml") => Self::Toml,
            Some("yaml") | Some("yml") => Self::Yaml,
            Some("hcl") => Self::Hcl,
            _ => Self::Json,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Hcl => "hcl",
        }
    }
}

/// Read and parse a config file.
///
/// Only IO and syntax problems are errors here. Semantic problems are left
/// for [`crate::conf::validate_config`], which reports all of them at once.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
    let cfg = parse_config(&contents, ConfigFormat::from_path(path), path)?;

    tracing::debug!(
        path = %path.display(),
        websites = cfg.websites.len(),
        "configuration loaded"
    );

    Ok(cfg)
}

pub fn parse_config(contents: &str, format: ConfigFormat, path: &Path) -> Result<Config, ConfigError> {
    let parsed = match format {
        ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
        ConfigFormat::Toml => toml::from_str(contents).map_err(|e| e.to_string()),
        ConfigFormat::Yaml => serde_yaml::from_str(contents).map_err(|e| e.to_string()),
        ConfigFormat::Hcl => hcl::from_str(contents).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| ConfigError::parse(path, format.as_str(), message))
}
