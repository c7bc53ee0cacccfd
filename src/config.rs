use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "almanac.toml";

/// Top-level Almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Calendar rendering settings.
    #[serde(default)]
    pub display: DisplayToml,

    /// Search output settings.
    #[serde(default)]
    pub search: SearchToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DisplayToml {
    #[serde(default = "default_true")]
    pub legend: bool,
    #[serde(default = "default_true")]
    pub mark_today: bool,
}

impl Default for DisplayToml {
    fn default() -> Self {
        Self {
            legend: true,
            mark_today: true,
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SearchToml {
    /// Maximum number of results printed; 0 means no limit.
    #[serde(default)]
    pub limit: usize,
}

impl SearchToml {
    /// Applies the configured limit to a result count.
    pub fn cap(&self, n: usize) -> usize {
        if self.limit == 0 { n } else { n.min(self.limit) }
    }
}

/// Loads the configuration.
///
/// An explicit path must exist. Without one, `almanac.toml` in the working
/// directory is used when present, and built-in defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<AlmanacConfig> {
    match path {
        Some(path) => read(path),
        None => {
            let fallback = Path::new(DEFAULT_CONFIG_FILE);
            if fallback.is_file() {
                read(fallback)
            } else {
                debug!("no config file, using defaults");
                Ok(AlmanacConfig::default())
            }
        }
    }
}

fn read(path: &Path) -> Result<AlmanacConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: AlmanacConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    debug!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}
