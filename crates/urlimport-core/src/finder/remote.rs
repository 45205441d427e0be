//! Finder that maps module names to URLs.
//!
//! Resolution mirrors the host's filesystem order with fetches in place of
//! stat/open: for a base URL, `<base>/__init__.<ext>` (package) is tried
//! before `<base>.<ext>` (plain module). If neither exists but the name is
//! registered, the name is a namespace package. Directory existence cannot be
//! checked over plain URLs, so namespace packages are only ever asserted by
//! the table.

use super::MetaPathFinder;
use crate::config::Config;
use crate::descriptor::ModuleSpec;
use crate::fetch::Transport;
use crate::listing::ListingSources;
use crate::loader::UrlSourceLoader;
use crate::module_name::ModuleName;
use crate::table::{Location, PackageTable};
use anyhow::{Context, Result};
use std::rc::Rc;

pub const DEFAULT_SOURCE_EXTENSION: &str = "py";

pub struct UrlPathFinder {
    table: PackageTable,
    listings: ListingSources,
    transport: Rc<dyn Transport>,
    extension: String,
}

impl UrlPathFinder {
    /// Empty table, no listings, `.py` sources.
    pub fn new(transport: Rc<dyn Transport>) -> Self {
        Self::with_listings(transport, ListingSources::new())
    }

    pub fn with_listings(transport: Rc<dyn Transport>, listings: ListingSources) -> Self {
        Self {
            table: PackageTable::new(),
            listings,
            transport,
            extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }

    /// Builds a finder from config: extension, listing URLs (resolved against
    /// `base_url`) and explicit package registrations.
    pub fn from_config(cfg: &Config, transport: Rc<dyn Transport>) -> Result<Self> {
        let base = cfg
            .base_url
            .as_deref()
            .map(url::Url::parse)
            .transpose()
            .context("invalid base_url in config")?;

        let mut listings = ListingSources::with_base(base);
        for url in &cfg.listing_urls {
            listings.add(url);
        }

        let mut finder = Self::with_listings(transport, listings)
            .with_extension(&cfg.source_extension);
        finder.register_many(cfg.packages.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        Ok(finder)
    }

    pub fn with_extension(mut self, ext: &str) -> Self {
        let ext = ext.trim().trim_start_matches('.');
        if !ext.is_empty() {
            self.extension = ext.to_string();
        }
        self
    }

    /// First registration for a name wins; returns whether `name` was new.
    pub fn register(&mut self, name: impl Into<String>, location: impl Into<Location>) -> bool {
        self.table.register(name, location)
    }

    pub fn register_many<I, K, L>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<Location>,
    {
        self.table.register_many(entries)
    }

    /// Adds a listing URL; it is fetched the next time an unknown top-level name is looked up.
    pub fn add_listing(&mut self, url: &str) -> bool {
        self.listings.add(url)
    }

    pub fn table(&self) -> &PackageTable {
        &self.table
    }

    pub fn listings(&self) -> &ListingSources {
        &self.listings
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    fn find_by_table(&mut self, name: ModuleName) -> Option<ModuleSpec> {
        if !self.table.contains(name.as_str()) {
            self.listings.refresh(&*self.transport, &mut self.table);
        }
        let location = self.table.get(name.as_str())?.clone();
        self.load_spec(name, location.url(), None)
    }

    fn find_in_parent(&self, name: ModuleName, parent_path: &str) -> Option<ModuleSpec> {
        let parent_path = parent_path.trim_end_matches('/');
        let base = format!("{}/{}", parent_path, name.tail());
        self.load_spec(name, Some(&base), Some(parent_path))
    }

    /// Package form, then plain-module form, then namespace if the table knows the name.
    fn load_spec(
        &self,
        name: ModuleName,
        base: Option<&str>,
        parent_path: Option<&str>,
    ) -> Option<ModuleSpec> {
        if let Some(base) = base {
            let init_url = format!("{}/__init__.{}", base, self.extension);
            match UrlSourceLoader::new(self.transport.clone(), &init_url, Some(base.to_string())) {
                Ok(loader) => {
                    tracing::debug!("{} resolved as package at {}", name, init_url);
                    return Some(ModuleSpec::package(name, loader, base));
                }
                Err(e) => tracing::debug!("{} is not a package at {}: {}", name, init_url, e),
            }

            let file_url = format!("{}.{}", base, self.extension);
            match UrlSourceLoader::new(
                self.transport.clone(),
                &file_url,
                parent_path.map(str::to_string),
            ) {
                Ok(loader) => {
                    tracing::debug!("{} resolved as module at {}", name, file_url);
                    return Some(ModuleSpec::module(name, loader));
                }
                Err(e) => tracing::warn!("unable to load module \"{}\": {}", name, e),
            }
        }

        if self.table.contains(name.as_str()) {
            tracing::debug!("{} resolved as namespace package", name);
            return Some(ModuleSpec::namespace(name, base));
        }
        None
    }
}

impl MetaPathFinder for UrlPathFinder {
    fn find_spec(&mut self, fullname: &str, path: Option<&[String]>) -> Option<ModuleSpec> {
        let name = match ModuleName::from_dotted(fullname) {
            Ok(name) => name,
            Err(e) => {
                tracing::debug!("ignoring {}", e);
                return None;
            }
        };

        match path {
            None => self.find_by_table(name),
            Some([parent_path, ..]) => self.find_in_parent(name, parent_path),
            // Parent has no search locations (URL-less namespace package).
            Some([]) => None,
        }
    }
}
