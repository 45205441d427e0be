//! Module finders: the resolver plugin and the ordered chain it is registered in.
//!
//! A finder answers "can you load `fullname`?" with a [`ModuleSpec`] or `None`
//! ("no opinion"). `None` is never an error: it tells the chain to ask the
//! next finder.

mod chain;
mod remote;

pub use chain::FinderChain;
pub use remote::{UrlPathFinder, DEFAULT_SOURCE_EXTENSION};

use crate::descriptor::ModuleSpec;

/// Host-side finder contract.
///
/// `path` is `None` for top-level imports and the parent package's
/// `submodule_search_locations` for submodules.
pub trait MetaPathFinder {
    fn find_spec(&mut self, fullname: &str, path: Option<&[String]>) -> Option<ModuleSpec>;
}
