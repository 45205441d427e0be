//! Loader for network-resident modules: source text plus sibling resources.

use crate::fetch::{FetchError, Transport};
use std::fmt;
use std::rc::Rc;

/// Source-loading capability handed to the host runtime.
pub trait SourceLoader {
    /// Source bytes, UTF-8 encoded, ready for execution.
    fn get_data(&self) -> Vec<u8>;
    /// Display name used in diagnostics and tracebacks.
    fn filename(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("resource {resource:?} not found: {reason}")]
    NotFound { resource: String, reason: String },
    #[error("paths are not available for internet modules")]
    NoPath,
}

/// Resource-reading capability for files that sit next to a module.
pub trait ResourceReader {
    fn open_resource(&self, resource: &str) -> Result<Vec<u8>, ResourceError>;
    /// Always fails: there is no local path for a network resource.
    fn resource_path(&self, resource: &str) -> Result<std::path::PathBuf, ResourceError>;
    fn is_resource(&self, name: &str) -> bool;
    /// Always empty; a bare URL cannot be listed.
    fn contents(&self) -> Vec<String>;
}

/// One resolved module. The source is fetched when the loader is built, so a
/// loader that exists always has source.
pub struct UrlSourceLoader {
    transport: Rc<dyn Transport>,
    url: String,
    source: String,
    resource_prefix: Option<String>,
}

impl UrlSourceLoader {
    /// Fetches `url` eagerly. An error here means the candidate does not exist.
    pub fn new(
        transport: Rc<dyn Transport>,
        url: impl Into<String>,
        resource_prefix: Option<String>,
    ) -> Result<Self, FetchError> {
        let url = url.into();
        let source = transport.fetch(&url).into_result()?;
        Ok(Self {
            transport,
            url,
            source,
            resource_prefix,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn source_text(&self) -> &str {
        &self.source
    }

    pub fn resource_prefix(&self) -> Option<&str> {
        self.resource_prefix.as_deref()
    }

    pub fn resource_url(&self, resource: &str) -> Option<String> {
        self.resource_prefix
            .as_deref()
            .map(|prefix| format!("{}/{}", prefix, resource.trim_start_matches('/')))
    }
}

impl fmt::Debug for UrlSourceLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlSourceLoader")
            .field("url", &self.url)
            .field("source_len", &self.source.len())
            .field("resource_prefix", &self.resource_prefix)
            .finish()
    }
}

impl SourceLoader for UrlSourceLoader {
    fn get_data(&self) -> Vec<u8> {
        self.source.as_bytes().to_vec()
    }

    fn filename(&self) -> &str {
        &self.url
    }
}

impl ResourceReader for UrlSourceLoader {
    fn open_resource(&self, resource: &str) -> Result<Vec<u8>, ResourceError> {
        let Some(url) = self.resource_url(resource) else {
            return Err(ResourceError::NotFound {
                resource: resource.to_string(),
                reason: format!("{} has no resource location", self.url),
            });
        };
        match self.transport.fetch(&url).into_result() {
            // Text transport: binary resources do not survive this.
            Ok(text) => Ok(text.into_bytes()),
            Err(e) => Err(ResourceError::NotFound {
                resource: resource.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn resource_path(&self, _resource: &str) -> Result<std::path::PathBuf, ResourceError> {
        Err(ResourceError::NoPath)
    }

    fn is_resource(&self, name: &str) -> bool {
        self.open_resource(name).is_ok()
    }

    fn contents(&self) -> Vec<String> {
        Vec::new()
    }
}
