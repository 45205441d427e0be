use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::fetch::CurlTransport;
use crate::finder::DEFAULT_SOURCE_EXTENSION;
use crate::listing::DEFAULT_LISTING;

/// Global configuration loaded from `~/.config/urlimport/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source file extension without the dot (`py` → `__init__.py`, `mod.py`).
    pub source_extension: String,
    /// Listing documents consulted when an unknown top-level name is imported.
    pub listing_urls: Vec<String>,
    /// Base for relative listing URLs (e.g. the page the runtime was loaded from).
    pub base_url: Option<String>,
    /// Connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Total timeout per request, in seconds.
    pub timeout_secs: u64,
    /// Explicit name → base URL registrations. Empty string means namespace package.
    pub packages: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            listing_urls: vec![DEFAULT_LISTING.to_string()],
            base_url: None,
            connect_timeout_secs: 15,
            timeout_secs: 30,
            packages: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn transport(&self) -> CurlTransport {
        CurlTransport::new(
            Duration::from_secs(self.connect_timeout_secs),
            Duration::from_secs(self.timeout_secs),
        )
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlimport")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Config::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: Config =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
