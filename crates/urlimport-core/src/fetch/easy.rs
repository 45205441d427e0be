//! `Transport` backed by libcurl's easy interface.

use super::{classify_response, FetchError, Fetched, Transport};
use std::time::Duration;

/// Blocking GET transport. One `Easy` handle per request; no connection reuse.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }
}

impl CurlTransport {
    pub fn new(connect_timeout: Duration, timeout: Duration) -> Self {
        Self {
            connect_timeout,
            timeout,
        }
    }

    fn get(&self, url: &str) -> Result<(u32, Vec<u8>), curl::Error> {
        let mut body = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let code = easy.response_code()?;
        Ok((code, body))
    }
}

impl Transport for CurlTransport {
    fn fetch(&self, url: &str) -> Fetched {
        match self.get(url) {
            Ok((status, body)) => {
                tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
                let text = String::from_utf8_lossy(&body).into_owned();
                classify_response(url, status, text)
            }
            Err(e) => {
                tracing::debug!("GET {} failed: {}", url, e);
                Fetched::NotFound(FetchError::transport(url, e))
            }
        }
    }
}
