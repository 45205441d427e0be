//! `urlimport resource <name> <resource>` – print a resource next to a module.

use anyhow::{Context, Result};
use std::io::Write;
use urlimport_core::config::Config;
use urlimport_core::ResourceReader;

use super::resolve_with;
use crate::cli::FinderArgs;

pub fn run_resource(cfg: &Config, name: &str, resource: &str, args: &FinderArgs) -> Result<()> {
    let spec = resolve_with(cfg, name, args)?;
    let loader = spec
        .into_loader()
        .with_context(|| format!("{name} is a namespace package and has no resources"))?;
    let bytes = loader.open_resource(resource)?;
    std::io::stdout().write_all(&bytes)?;
    Ok(())
}
