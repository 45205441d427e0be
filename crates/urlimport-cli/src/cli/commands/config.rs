//! `urlimport config` – show the config file location and values.

use anyhow::Result;
use urlimport_core::config::{self, Config};

pub fn run_config(cfg: &Config) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
