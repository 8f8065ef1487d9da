use logpulse_core::conf::load_config;
use logpulse_core::conf::types::Config;
use std::path::{Path, PathBuf};

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture(file: &str) -> Config {
    load_config(&fixture_path(file)).expect("failed to load fixture config")
}

/// Rewrite every `local` source and legacy `logPath` to live under `dir`.
///
/// Fixtures carry placeholder paths; tests that touch the filesystem point
/// them at a temp dir they control.
pub fn point_local_sources_at(cfg: &mut Config, dir: &Path) {
    for site in &mut cfg.websites {
        if let Some(log_path) = &mut site.log_path {
            *log_path = rebase(dir, log_path);
        }

        for source in &mut site.sources {
            if !source.kind.trim().eq_ignore_ascii_case("local") {
                continue;
            }
            if !source.path.is_empty() {
                source.path = rebase(dir, &source.path);
            }
            if !source.pattern.is_empty() {
                source.pattern = rebase(dir, &source.pattern);
            }
        }
    }
}

fn rebase(dir: &Path, value: &str) -> String {
    let name = Path::new(value)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    dir.join(name).to_string_lossy().into_owned()
}
