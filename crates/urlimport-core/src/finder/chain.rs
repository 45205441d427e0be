use super::MetaPathFinder;
use crate::descriptor::ModuleSpec;

/// Ordered finder list; the first finder with an opinion wins.
#[derive(Default)]
pub struct FinderChain {
    finders: Vec<Box<dyn MetaPathFinder>>,
}

impl FinderChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a finder at the end of the chain.
    pub fn push(&mut self, finder: Box<dyn MetaPathFinder>) {
        self.finders.push(finder);
    }

    pub fn len(&self) -> usize {
        self.finders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finders.is_empty()
    }

    pub fn find_spec(&mut self, fullname: &str, path: Option<&[String]>) -> Option<ModuleSpec> {
        self.finders
            .iter_mut()
            .find_map(|finder| finder.find_spec(fullname, path))
    }
}
