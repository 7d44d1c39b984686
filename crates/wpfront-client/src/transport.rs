//! HTTP transport seam.
//!
//! [`WpClient`](crate::WpClient) talks to WordPress through [`Transport`] so
//! the fetch pipeline can be exercised without a network.

use std::sync::Arc;

use ureq::Agent;

use crate::error::WpError;

/// Status and body of a completed GET.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body. Decoding is left to the caller.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs a single HTTP GET.
///
/// Implementations must not retry. A non-2xx status is a successful
/// transport result; the caller decides what it means.
pub trait Transport: Send + Sync {
    /// Fetch `url`.
    ///
    /// # Errors
    ///
    /// Returns [`WpError::Request`] if no response could be obtained.
    fn get(&self, url: &str) -> Result<HttpResponse, WpError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, WpError> {
        (**self).get(url)
    }
}

/// Body read limit. `_embed` listings can exceed ureq's 10 MiB default.
const MAX_BODY_BYTES: u64 = u64::MAX;

/// Blocking transport backed by a shared [`ureq::Agent`].
///
/// No timeout is configured; connection reuse is left to the agent.
/// Bodies are read in full as bytes.
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Create a transport with its own agent.
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, WpError> {
        let response = self
            .agent
            .get(url)
            .header("Accept", "application/json")
            .call()?;

        let status = response.status().as_u16();
        let body = match response
            .into_body()
            .with_config()
            .limit(MAX_BODY_BYTES)
            .read_to_vec()
        {
            Ok(body) => body,
            Err(_) if !(200..300).contains(&status) => b"(unable to read error body)".to_vec(),
            Err(err) => return Err(err.into()),
        };

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Serve one HTTP/1.1 response on a local port and return its URL.
    fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            loop {
                line.clear();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
            }
            write!(
                stream,
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            )
            .unwrap();
            stream.write_all(&body).unwrap();
        });

        format!("http://{addr}/wp-json/wp/v2/posts")
    }

    #[test]
    fn test_is_success_range() {
        let response = |status| HttpResponse {
            status,
            body: Vec::new(),
        };
        assert!(response(200).is_success());
        assert!(response(204).is_success());
        assert!(!response(199).is_success());
        assert!(!response(301).is_success());
        assert!(!response(404).is_success());
        assert!(!response(500).is_success());
    }

    #[test]
    fn test_get_returns_success_body() {
        let url = serve_once("200 OK", br#"[{"slug":"hello"}]"#.to_vec());

        let response = UreqTransport::new().get(&url).unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, br#"[{"slug":"hello"}]"#.to_vec());
    }

    #[test]
    fn test_get_returns_error_status_as_response() {
        let url = serve_once("404 Not Found", br#"{"code":"rest_no_route"}"#.to_vec());

        let response = UreqTransport::new().get(&url).unwrap();

        assert_eq!(response.status, 404);
        assert!(!response.is_success());
        assert_eq!(response.body, br#"{"code":"rest_no_route"}"#.to_vec());
    }

    #[test]
    fn test_get_reads_body_past_default_limit() {
        let size = 11 * 1024 * 1024;
        let url = serve_once("200 OK", vec![b' '; size]);

        let response = UreqTransport::new().get(&url).unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body.len(), size);
    }

    #[test]
    fn test_get_keeps_invalid_utf8_bytes() {
        let url = serve_once("200 OK", b"[\"caf\xff\"]".to_vec());

        let response = UreqTransport::new().get(&url).unwrap();

        assert_eq!(response.body, b"[\"caf\xff\"]".to_vec());
    }

    #[test]
    fn test_invalid_utf8_body_fails_as_json_error() {
        let url = serve_once("200 OK", b"[\"caf\xff\"]".to_vec());
        let base = url.trim_end_matches("/posts");
        let client = crate::WpClient::with_transport(
            &wpfront_config::ApiConfig::new(base),
            UreqTransport::new(),
        );

        let err = client
            .fetch_blogs("/posts", &crate::FetchOptions::default())
            .unwrap_err();

        assert!(matches!(err, WpError::Json(_)));
    }
}
