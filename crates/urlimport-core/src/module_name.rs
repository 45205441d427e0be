//! Dotted module names (`pkg.sub.mod`).

use std::fmt;

/// Error returned when a dotted name has an empty segment (`""`, `"a..b"`, `".a"`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid module name: {0:?}")]
pub struct InvalidModuleName(pub String);

/// A fully-qualified, absolute module name. Always has at least one segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleName {
    segments: Vec<String>,
    dotted: String,
}

impl ModuleName {
    pub fn from_dotted(s: &str) -> Result<Self, InvalidModuleName> {
        let segments: Vec<String> = s.split('.').map(str::to_string).collect();
        if segments.iter().any(|seg| seg.is_empty()) {
            return Err(InvalidModuleName(s.to_string()));
        }
        Ok(Self::from_segments(segments))
    }

    fn from_segments(segments: Vec<String>) -> Self {
        let dotted = segments.join(".");
        Self { segments, dotted }
    }

    pub fn as_str(&self) -> &str {
        &self.dotted
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Final component: the simple name a submodule is looked up by inside its parent.
    pub fn tail(&self) -> &str {
        // from_dotted guarantees at least one segment
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    pub fn parent(&self) -> Option<ModuleName> {
        let (_, rest) = self.segments.split_last()?;
        if rest.is_empty() {
            return None;
        }
        Some(Self::from_segments(rest.to_vec()))
    }

    pub fn is_top_level(&self) -> bool {
        self.segments.len() == 1
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted)
    }
}
