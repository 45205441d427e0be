//! Module finder and loader that resolve dotted module names to network
//! resources instead of files.
//!
//! The host runtime asks a [`finder::UrlPathFinder`] for a module by name; it
//! consults its name → URL table (optionally seeded from remote listing
//! documents), tries the package and plain-module forms over a blocking
//! [`fetch::Transport`], and returns a [`descriptor::ModuleSpec`] carrying a
//! [`loader::UrlSourceLoader`] with the source already fetched.

pub mod config;
pub mod descriptor;
pub mod fetch;
pub mod finder;
pub mod listing;
pub mod loader;
pub mod logging;
pub mod module_name;
pub mod table;

pub use descriptor::{ModuleKind, ModuleSpec};
pub use fetch::{CurlTransport, FetchError, Fetched, Transport};
pub use finder::{FinderChain, MetaPathFinder, UrlPathFinder};
pub use loader::{ResourceError, ResourceReader, SourceLoader, UrlSourceLoader};
pub use module_name::ModuleName;
pub use table::{Location, PackageTable};

#[cfg(test)]
mod test_utils;
