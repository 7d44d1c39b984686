//! Mock transport for testing.
//!
//! Provides [`MockTransport`] for exercising [`WpClient`](crate::WpClient)
//! without a WordPress server.

use std::collections::HashMap;
use std::io;
use std::sync::{Mutex, RwLock};

use serde_json::Value;

use crate::error::WpError;
use crate::transport::{HttpResponse, Transport};

/// Canned outcome for one URL.
#[derive(Debug, Clone)]
enum MockOutcome {
    Response(HttpResponse),
    ConnectionError(String),
}

/// In-memory transport keyed by full request URL.
///
/// URLs without a canned response answer `404` with an empty body.
/// Every requested URL is recorded in order.
///
/// # Example
///
/// ```ignore
/// use std::sync::Arc;
/// use serde_json::json;
/// use wpfront_client::{MockTransport, WpClient};
///
/// let transport = Arc::new(MockTransport::new().with_json(
///     "http://localhost:8080/wp-json/wp/v2/products",
///     200,
///     &json!([]),
/// ));
/// let client = WpClient::with_transport(&Default::default(), Arc::clone(&transport));
/// ```
#[derive(Debug, Default)]
pub struct MockTransport {
    outcomes: RwLock<HashMap<String, MockOutcome>>,
    requests: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Create a mock with no canned responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with `status` and a raw body.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_body(self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        let response = HttpResponse {
            status,
            body: body.into(),
        };
        self.outcomes
            .write()
            .unwrap()
            .insert(url.into(), MockOutcome::Response(response));
        self
    }

    /// Answer `url` with `status` and a JSON body.
    #[must_use]
    pub fn with_json(self, url: impl Into<String>, status: u16, json: &Value) -> Self {
        self.with_body(url, status, json.to_string())
    }

    /// Fail requests to `url` as if the connection was refused.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_connection_error(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.outcomes
            .write()
            .unwrap()
            .insert(url.into(), MockOutcome::ConnectionError(message.into()));
        self
    }

    /// URLs requested so far, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, WpError> {
        self.requests.lock().unwrap().push(url.to_owned());

        match self.outcomes.read().unwrap().get(url) {
            Some(MockOutcome::Response(response)) => Ok(response.clone()),
            Some(MockOutcome::ConnectionError(message)) => Err(WpError::Request(
                ureq::Error::Io(io::Error::new(io::ErrorKind::ConnectionRefused, message.clone())),
            )),
            None => Ok(HttpResponse {
                status: 404,
                body: Vec::new(),
            }),
        }
    }
}
