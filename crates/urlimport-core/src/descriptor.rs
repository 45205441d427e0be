//! Module descriptors returned by the finder.

use crate::loader::UrlSourceLoader;
use crate::module_name::ModuleName;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleKind {
    /// `<base>/__init__.<ext>`
    Package,
    /// `<base>.<ext>`
    Module,
    /// No source; existence asserted by the table.
    Namespace,
}

/// Result of a successful resolution: name, loader, package flag and the
/// locations submodules are searched in. Immutable once built.
#[derive(Debug)]
pub struct ModuleSpec {
    name: ModuleName,
    loader: Option<UrlSourceLoader>,
    is_package: bool,
    origin: Option<String>,
    submodule_search_locations: Option<Vec<String>>,
}

impl ModuleSpec {
    pub fn package(name: ModuleName, loader: UrlSourceLoader, base_url: &str) -> Self {
        Self {
            name,
            origin: Some(loader.url().to_string()),
            loader: Some(loader),
            is_package: true,
            submodule_search_locations: Some(vec![base_url.to_string()]),
        }
    }

    pub fn module(name: ModuleName, loader: UrlSourceLoader) -> Self {
        Self {
            name,
            origin: Some(loader.url().to_string()),
            loader: Some(loader),
            is_package: false,
            submodule_search_locations: None,
        }
    }

    /// `base_url` is `None` for a table entry that carries no URL at all.
    pub fn namespace(name: ModuleName, base_url: Option<&str>) -> Self {
        Self {
            name,
            loader: None,
            is_package: true,
            origin: None,
            submodule_search_locations: Some(base_url.map(str::to_string).into_iter().collect()),
        }
    }

    pub fn name(&self) -> &ModuleName {
        &self.name
    }

    pub fn loader(&self) -> Option<&UrlSourceLoader> {
        self.loader.as_ref()
    }

    pub fn into_loader(self) -> Option<UrlSourceLoader> {
        self.loader
    }

    pub fn is_package(&self) -> bool {
        self.is_package
    }

    pub fn origin(&self) -> Option<&str> {
        self.origin.as_deref()
    }

    pub fn submodule_search_locations(&self) -> Option<&[String]> {
        self.submodule_search_locations.as_deref()
    }

    pub fn kind(&self) -> ModuleKind {
        match (&self.loader, self.is_package) {
            (None, _) => ModuleKind::Namespace,
            (Some(_), true) => ModuleKind::Package,
            (Some(_), false) => ModuleKind::Module,
        }
    }
}
