//! `urlimport resolve <name>` – show the descriptor for a module.

use anyhow::Result;
use urlimport_core::config::Config;
use urlimport_core::ModuleKind;

use super::resolve_with;
use crate::cli::FinderArgs;

pub fn run_resolve(cfg: &Config, name: &str, args: &FinderArgs) -> Result<()> {
    let spec = resolve_with(cfg, name, args)?;
    let kind = match spec.kind() {
        ModuleKind::Package => "package",
        ModuleKind::Module => "module",
        ModuleKind::Namespace => "namespace",
    };
    println!("{:<18} {}", "name:", spec.name());
    println!("{:<18} {}", "kind:", kind);
    println!("{:<18} {}", "origin:", spec.origin().unwrap_or("-"));
    if let Some(locations) = spec.submodule_search_locations() {
        let joined = if locations.is_empty() {
            "-".to_string()
        } else {
            locations.join(", ")
        };
        println!("{:<18} {}", "search locations:", joined);
    }
    Ok(())
}
