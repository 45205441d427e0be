//! In-memory transport for unit tests.

use crate::fetch::{FetchError, Fetched, Transport};
use std::cell::RefCell;
use std::collections::HashMap;

/// Serves a fixed URL → body map; everything else is a 404. Records every request.
#[derive(Debug, Default)]
pub struct MapTransport {
    bodies: HashMap<String, String>,
    failing: Vec<String>,
    requests: RefCell<Vec<String>>,
}

impl MapTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }

    /// Requests to `url` fail at the transport level instead of with an HTTP status.
    pub fn with_transport_failure(mut self, url: &str) -> Self {
        self.failing.push(url.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn request_count(&self, url: &str) -> usize {
        self.requests.borrow().iter().filter(|u| *u == url).count()
    }
}

impl Transport for MapTransport {
    fn fetch(&self, url: &str) -> Fetched {
        self.requests.borrow_mut().push(url.to_string());
        if self.failing.iter().any(|u| u == url) {
            return Fetched::NotFound(FetchError::transport(url, "network unreachable"));
        }
        match self.bodies.get(url) {
            Some(body) => Fetched::Found(body.clone()),
            None => Fetched::NotFound(FetchError::http(url, 404)),
        }
    }
}
