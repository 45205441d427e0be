//! Remote-fetch error: a failed HTTP response or an underlying transport failure.

/// Why a fetch did not produce a body.
///
/// The resolver treats both variants as "this candidate does not exist"; the
/// distinction is kept for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Server answered with something other than 200.
    #[error("HTTP error {status}")]
    Http { url: String, status: u32 },
    /// The request never produced a response (bad URL, connection, timeout).
    #[error("transport error fetching {url}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl FetchError {
    pub fn http(url: impl Into<String>, status: u32) -> Self {
        FetchError::Http {
            url: url.into(),
            status,
        }
    }

    pub fn transport<E>(url: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        FetchError::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn url(&self) -> &str {
        match self {
            FetchError::Http { url, .. } | FetchError::Transport { url, .. } => url,
        }
    }

    /// HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::Transport { .. } => None,
        }
    }
}
