//! CLI for driving the urlimport finder by hand.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use urlimport_core::config;

use commands::{run_config, run_listing, run_resolve, run_resource, run_source};

/// Top-level CLI for urlimport.
#[derive(Debug, Parser)]
#[command(name = "urlimport")]
#[command(about = "Resolve and fetch modules over HTTP the way an import hook would", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options shared by every command that builds a finder.
#[derive(Debug, Clone, Args, Default)]
pub struct FinderArgs {
    /// Register a module before resolving (repeatable). Empty URL means namespace package.
    #[arg(long = "register", value_name = "NAME=URL", value_parser = parse_registration)]
    pub register: Vec<(String, String)>,

    /// Extra listing document URL (repeatable).
    #[arg(long = "listing", value_name = "URL")]
    pub listing: Vec<String>,

    /// Parent package search location; makes this a submodule lookup.
    #[arg(long = "path", value_name = "URL")]
    pub path: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a module name and show its descriptor.
    Resolve {
        /// Fully-qualified module name, e.g. `pkg.sub`.
        name: String,
        #[command(flatten)]
        finder: FinderArgs,
    },

    /// Resolve a module and print its source.
    Source {
        name: String,
        #[command(flatten)]
        finder: FinderArgs,
    },

    /// Resolve a module and print one of its resources.
    Resource {
        name: String,
        /// Resource file name relative to the module's package URL.
        resource: String,
        #[command(flatten)]
        finder: FinderArgs,
    },

    /// Fetch a listing document and print its entries.
    Listing {
        /// Listing URL.
        url: String,
    },

    /// Show the config file path and effective configuration.
    Config,
}

fn parse_registration(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, url)) if !name.trim().is_empty() => {
            Ok((name.trim().to_string(), url.trim().to_string()))
        }
        _ => Err(format!("expected NAME=URL, got {raw:?}")),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { name, finder } => run_resolve(&cfg, &name, &finder)?,
            CliCommand::Source { name, finder } => run_source(&cfg, &name, &finder)?,
            CliCommand::Resource {
                name,
                resource,
                finder,
            } => run_resource(&cfg, &name, &resource, &finder)?,
            CliCommand::Listing { url } => run_listing(&cfg, &url)?,
            CliCommand::Config => run_config(&cfg)?,
        }

        Ok(())
    }
}
