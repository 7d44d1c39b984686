//! WordPress REST API client.
//!
//! Provides a sync content client: one GET per call, validated and
//! flattened into the records templates consume.

mod categories;
mod fetch;
mod pages;
mod posts;
mod products;

use wpfront_config::ApiConfig;

use crate::transport::{Transport, UreqTransport};

/// WordPress content client.
///
/// Holds no per-request state, so one client can serve concurrent calls
/// from several threads.
pub struct WpClient {
    transport: Box<dyn Transport>,
    base_url: String,
}

impl WpClient {
    /// Create a client talking to `config.base_url` over HTTP.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        Self::with_transport(config, UreqTransport::new())
    }

    /// Create a client with a custom transport.
    #[must_use]
    pub fn with_transport(config: &ApiConfig, transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Get the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use wpfront_config::ApiConfig;

    use super::WpClient;
    use crate::mock::MockTransport;

    /// API root used by client tests.
    pub(crate) const BASE: &str = "http://localhost:8080/wp-json/wp/v2";

    /// Client wired to `transport` with the default base URL.
    pub(crate) fn client_with(transport: &Arc<MockTransport>) -> WpClient {
        WpClient::with_transport(&ApiConfig::default(), Arc::clone(transport))
    }

    /// Full URL for an endpoint under [`BASE`].
    pub(crate) fn url(endpoint: &str) -> String {
        format!("{BASE}{endpoint}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = WpClient::new(&ApiConfig::new("https://cms.example.com/wp-json/wp/v2/"));
        assert_eq!(client.base_url(), "https://cms.example.com/wp-json/wp/v2");
    }

    #[test]
    fn test_default_base_url() {
        let client = WpClient::new(&ApiConfig::default());
        assert_eq!(client.base_url(), "http://localhost:8080/wp-json/wp/v2");
    }

    #[test]
    fn test_client_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WpClient>();
    }
}
