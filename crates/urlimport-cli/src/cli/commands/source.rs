//! `urlimport source <name>` – print a module's source.

use anyhow::Result;
use urlimport_core::config::Config;

use super::resolve_with;
use crate::cli::FinderArgs;

pub fn run_source(cfg: &Config, name: &str, args: &FinderArgs) -> Result<()> {
    let spec = resolve_with(cfg, name, args)?;
    match spec.loader() {
        Some(loader) => print!("{}", loader.source_text()),
        None => anyhow::bail!("{} is a namespace package and has no source", name),
    }
    Ok(())
}
