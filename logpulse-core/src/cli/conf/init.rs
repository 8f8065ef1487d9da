use crate::conf::Config;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

/// Write a starter config to `path`. Refuses to overwrite an existing file.
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("{} already exists", path.display());
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(&Config::starter())?;
    fs::write(path, contents + "\n")
        .with_context(|| format!("failed to write {}", path.display()))?;

    println!("✔ Wrote starter config to {}", path.display());
    println!("  Edit websites[0].sources and database.dsn, then run:");
    println!("  logpulse config check {}", path.display());
    Ok(())
}
