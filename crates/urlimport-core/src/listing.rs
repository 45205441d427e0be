//! Remote listing documents: fetched lazily, at most once per URL, to seed the table.

use crate::fetch::Transport;
use crate::table::{parse_listing, PackageTable};
use std::collections::HashSet;

/// Listing fetched when nothing else is configured.
pub const DEFAULT_LISTING: &str = "pymodules.json";

/// Ordered, deduplicated listing URLs and the subset already fetched.
#[derive(Debug, Clone, Default)]
pub struct ListingSources {
    urls: Vec<String>,
    fetched: HashSet<String>,
    base: Option<url::Url>,
}

impl ListingSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relative listing URLs are joined onto `base` before fetching.
    pub fn with_base(base: Option<url::Url>) -> Self {
        Self {
            base,
            ..Self::default()
        }
    }

    /// Appends a listing URL unless it is already known (compared after resolution).
    /// A relative URL with no base to resolve it against is skipped.
    pub fn add(&mut self, raw: &str) -> bool {
        let Some(resolved) = resolve_listing_url(self.base.as_ref(), raw) else {
            tracing::warn!("skipping relative listing {}: no base_url configured", raw.trim());
            return false;
        };
        if self.urls.iter().any(|u| *u == resolved) {
            return false;
        }
        self.urls.push(resolved);
        true
    }

    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn is_fetched(&self, url: &str) -> bool {
        self.fetched.contains(url)
    }

    /// True if some configured listing has not been fetched yet.
    pub fn has_pending(&self) -> bool {
        self.urls.iter().any(|u| !self.fetched.contains(u))
    }

    /// Fetches every listing not fetched before and merges it into `table`.
    ///
    /// Failures are logged and swallowed; a failed URL is still marked fetched
    /// and is not retried. Returns the number of names added to the table.
    pub fn refresh(&mut self, transport: &dyn Transport, table: &mut PackageTable) -> usize {
        let mut added = 0;
        for url in &self.urls {
            if !self.fetched.insert(url.clone()) {
                continue;
            }
            let text = match transport.fetch(url).into_result() {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("cannot load listing {}: {}", url, e);
                    continue;
                }
            };
            match parse_listing(&text) {
                Ok(listing) => {
                    let n = table.merge_listing(listing);
                    tracing::debug!("listing {} added {} entries", url, n);
                    added += n;
                }
                Err(e) => tracing::warn!("cannot parse listing {}: {}", url, e),
            }
        }
        added
    }
}

/// Joins a relative listing URL onto `base`. Absolute URLs pass through
/// unchanged; a relative URL without a base cannot be fetched and yields `None`.
pub fn resolve_listing_url(base: Option<&url::Url>, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if url::Url::parse(raw).is_ok() {
        return Some(raw.to_string());
    }
    match base?.join(raw) {
        Ok(joined) => Some(joined.to_string()),
        Err(e) => {
            tracing::warn!("cannot resolve listing {} against base: {}", raw, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Location;
    use crate::test_utils::MapTransport;

    #[test]
    fn add_deduplicates() {
        let mut s = ListingSources::new();
        assert!(s.add("https://host/a.json"));
        assert!(!s.add("https://host/a.json"));
        assert!(s.add("https://host/b.json"));
        assert_eq!(s.urls(), ["https://host/a.json", "https://host/b.json"]);
    }

    #[test]
    fn relative_listing_joined_onto_base() {
        let base = url::Url::parse("https://host/app/index.html").unwrap();
        assert_eq!(
            resolve_listing_url(Some(&base), "pymodules.json").as_deref(),
            Some("https://host/app/pymodules.json")
        );
        assert_eq!(
            resolve_listing_url(Some(&base), "https://cdn/x.json").as_deref(),
            Some("https://cdn/x.json")
        );
        assert_eq!(
            resolve_listing_url(None, "https://cdn/x.json").as_deref(),
            Some("https://cdn/x.json")
        );
        assert_eq!(resolve_listing_url(None, "pymodules.json"), None);
    }

    #[test]
    fn relative_listing_without_base_is_never_fetched() {
        let transport = MapTransport::new();
        let mut table = PackageTable::new();
        let mut s = ListingSources::new();
        assert!(!s.add("pymodules.json"));
        assert!(s.urls().is_empty());
        assert_eq!(s.refresh(&transport, &mut table), 0);
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn refresh_fetches_each_listing_once() {
        let transport = MapTransport::new().with("https://host/l.json", r#"{"pkgB": "https://host/pkgB"}"#);
        let mut table = PackageTable::new();
        let mut s = ListingSources::new();
        s.add("https://host/l.json");

        assert_eq!(s.refresh(&transport, &mut table), 1);
        assert_eq!(s.refresh(&transport, &mut table), 0);
        assert_eq!(transport.request_count("https://host/l.json"), 1);
        assert!(!s.has_pending());
        assert_eq!(table.get("pkgB").and_then(Location::url), Some("https://host/pkgB"));
    }

    #[test]
    fn failed_listing_is_swallowed_and_not_retried() {
        let transport = MapTransport::new()
            .with_transport_failure("https://down/l.json")
            .with("https://host/bad.json", "[]")
            .with("https://host/ok.json", r#"{"ok": "https://host/ok"}"#);
        let mut table = PackageTable::new();
        let mut s = ListingSources::new();
        s.add("https://down/l.json");
        s.add("https://host/bad.json");
        s.add("https://host/ok.json");

        assert_eq!(s.refresh(&transport, &mut table), 1);
        assert!(s.is_fetched("https://down/l.json"));
        s.refresh(&transport, &mut table);
        assert_eq!(transport.request_count("https://down/l.json"), 1);
        assert!(table.contains("ok"));
    }

    #[test]
    fn listing_added_later_is_fetched_on_next_refresh() {
        let transport = MapTransport::new()
            .with("https://h/1.json", r#"{"one": "https://h/one"}"#)
            .with("https://h/2.json", r#"{"two": "https://h/two"}"#);
        let mut table = PackageTable::new();
        let mut s = ListingSources::new();
        s.add("https://h/1.json");
        s.refresh(&transport, &mut table);
        s.add("https://h/2.json");
        assert!(s.has_pending());
        assert_eq!(s.refresh(&transport, &mut table), 1);
        assert_eq!(transport.requests(), ["https://h/1.json", "https://h/2.json"]);
    }
}
