//! Name → URL table and the listing document format that seeds it.

use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Marker some listing documents use instead of a JSON falsy value.
pub const NAMESPACE_MARKER: &str = "__namespace__";

/// Where a registered name lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// Base URL; the entry source is `<url>/__init__.<ext>` or `<url>.<ext>`.
    Url(String),
    /// Namespace package with no source of its own.
    Namespace,
}

impl Location {
    /// Builds a location from a raw string; empty and the namespace marker mean `Namespace`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == NAMESPACE_MARKER {
            Location::Namespace
        } else {
            Location::Url(raw.trim_end_matches('/').to_string())
        }
    }

    pub fn url(&self) -> Option<&str> {
        match self {
            Location::Url(u) => Some(u),
            Location::Namespace => None,
        }
    }
}

impl From<&str> for Location {
    fn from(raw: &str) -> Self {
        Location::parse(raw)
    }
}

impl From<String> for Location {
    fn from(raw: String) -> Self {
        Location::parse(&raw)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("listing is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("listing must be a JSON object mapping module names to URLs")]
    NotAnObject,
    #[error("listing entry {name:?} must be a URL string or a falsy value")]
    BadValue { name: String },
}

/// Parses a flat JSON object of `name → url`. `null`, `false`, `""` and
/// [`NAMESPACE_MARKER`] all become [`Location::Namespace`].
pub fn parse_listing(text: &str) -> Result<BTreeMap<String, Location>, ListingError> {
    let value: Value = serde_json::from_str(text)?;
    let Value::Object(map) = value else {
        return Err(ListingError::NotAnObject);
    };

    let mut out = BTreeMap::new();
    for (name, v) in map {
        let location = match v {
            Value::String(s) => Location::parse(&s),
            Value::Null | Value::Bool(false) => Location::Namespace,
            _ => return Err(ListingError::BadValue { name }),
        };
        out.insert(name, location);
    }
    Ok(out)
}

/// Additive registry of module names. The first location recorded for a name wins.
#[derive(Debug, Clone, Default)]
pub struct PackageTable {
    entries: BTreeMap<String, Location>,
}

impl PackageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the name was new. An existing entry is never replaced.
    pub fn register(&mut self, name: impl Into<String>, location: impl Into<Location>) -> bool {
        match self.entries.entry(name.into()) {
            Entry::Vacant(slot) => {
                slot.insert(location.into());
                true
            }
            Entry::Occupied(existing) => {
                tracing::debug!("{} already registered; keeping {:?}", existing.key(), existing.get());
                false
            }
        }
    }

    /// Bulk [`register`](Self::register); returns how many names were new.
    pub fn register_many<I, K, L>(&mut self, entries: I) -> usize
    where
        I: IntoIterator<Item = (K, L)>,
        K: Into<String>,
        L: Into<Location>,
    {
        entries
            .into_iter()
            .map(|(k, l)| self.register(k, l))
            .filter(|inserted| *inserted)
            .count()
    }

    /// Merges a fetched listing; entries already present win over the listing.
    pub fn merge_listing(&mut self, listing: BTreeMap<String, Location>) -> usize {
        let mut added = 0;
        for (name, location) in listing {
            if let Entry::Vacant(slot) = self.entries.entry(name) {
                slot.insert(location);
                added += 1;
            }
        }
        added
    }

    pub fn get(&self, name: &str) -> Option<&Location> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Location)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
