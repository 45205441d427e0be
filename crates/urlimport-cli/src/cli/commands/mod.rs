//! CLI command handlers. Each command is in its own file.

mod config;
mod listing;
mod resolve;
mod resource;
mod source;

pub use config::run_config;
pub use listing::run_listing;
pub use resolve::run_resolve;
pub use resource::run_resource;
pub use source::run_source;

use crate::cli::FinderArgs;
use anyhow::{Context, Result};
use std::rc::Rc;
use urlimport_core::config::Config;
use urlimport_core::{MetaPathFinder, ModuleSpec, UrlPathFinder};

/// Builds a finder from config plus command-line registrations and listings, then resolves `name`.
pub(crate) fn resolve_with(cfg: &Config, name: &str, args: &FinderArgs) -> Result<ModuleSpec> {
    let transport = Rc::new(cfg.transport());
    let mut finder = UrlPathFinder::from_config(cfg, transport)?;
    for (module, url) in &args.register {
        if !finder.register(module.as_str(), url.as_str()) {
            tracing::info!("{} already configured; ignoring --register", module);
        }
    }
    for url in &args.listing {
        finder.add_listing(url);
    }

    let path = (!args.path.is_empty()).then_some(args.path.as_slice());
    finder
        .find_spec(name, path)
        .with_context(|| format!("no module named {name:?}"))
}
