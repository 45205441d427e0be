//! `urlimport listing <url>` – fetch a listing document and print it.

use anyhow::{Context, Result};
use urlimport_core::config::Config;
use urlimport_core::listing::resolve_listing_url;
use urlimport_core::table::{parse_listing, Location};
use urlimport_core::Transport;

pub fn run_listing(cfg: &Config, url: &str) -> Result<()> {
    let base = cfg.base_url.as_deref().map(url::Url::parse).transpose()?;
    let url = resolve_listing_url(base.as_ref(), url)
        .with_context(|| format!("cannot resolve listing {url:?}; set base_url or pass an absolute URL"))?;
    let text = cfg.transport().fetch(&url).into_result()?;
    let listing = parse_listing(&text)?;
    if listing.is_empty() {
        println!("Listing {url} is empty.");
        return Ok(());
    }
    println!("{:<32} {}", "NAME", "LOCATION");
    for (name, location) in listing {
        let shown = match &location {
            Location::Url(u) => u.as_str(),
            Location::Namespace => "(namespace)",
        };
        println!("{:<32} {}", name, shown);
    }
    Ok(())
}
