//! Blocking fetch primitive.
//!
//! The resolver never talks to the network directly: it asks a [`Transport`]
//! for a URL and branches on the [`Fetched`] variant. [`CurlTransport`] is the
//! production implementation; embedders with their own synchronous bridge
//! (e.g. a browser XHR shim) implement the trait themselves.
//!
//! Bodies are handled as text. Binary resources do not survive the UTF-8
//! round-trip; this is a limitation of the text transport and is not worked
//! around here.

mod easy;
mod error;

pub use easy::CurlTransport;
pub use error::FetchError;

/// Outcome of a single fetch.
#[derive(Debug)]
pub enum Fetched {
    /// 200 response with its body decoded as text.
    Found(String),
    /// Anything else. Carries the reason for diagnostics.
    NotFound(FetchError),
}

impl Fetched {
    pub fn is_found(&self) -> bool {
        matches!(self, Fetched::Found(_))
    }

    pub fn into_result(self) -> Result<String, FetchError> {
        match self {
            Fetched::Found(body) => Ok(body),
            Fetched::NotFound(e) => Err(e),
        }
    }
}

/// Synchronous "fetch URL, return response-or-error" operation.
pub trait Transport {
    fn fetch(&self, url: &str) -> Fetched;
}

/// Maps a finished response to a [`Fetched`]: only status 200 counts as found.
pub fn classify_response(url: &str, status: u32, body: String) -> Fetched {
    if status == 200 {
        Fetched::Found(body)
    } else {
        Fetched::NotFound(FetchError::http(url, status))
    }
}
