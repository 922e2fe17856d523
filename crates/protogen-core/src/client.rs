//! HTTP client for v2.protogen.fr
//!
//! One outbound request per call: no timeout, no retry and no rate limiting.
//! A request that never completes leaves its caller pending.

use reqwest::header::{ACCEPT, CONTENT_TYPE, REFERER, USER_AGENT};
use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::error::{ProtogenError, Result};

/// Origin of the upstream site
pub const UPSTREAM_ORIGIN: &str = "https://v2.protogen.fr";

/// User-Agent sent when fetching HTML pages
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// User-Agent sent to the XHR API
const API_USER_AGENT: &str = "ProtoMusic/1.0";

/// Path prefix of the XHR API on the upstream
const XHR_PREFIX: &str = "/sys/XHR";

/// Configuration for the upstream HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Upstream base URL without trailing slash (default: `https://v2.protogen.fr`)
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: UPSTREAM_ORIGIN.to_string(),
        }
    }
}

/// HTTP client for the upstream site
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ProtogenClient {
    /// Underlying HTTP client
    client: reqwest::Client,
    /// Upstream base URL without trailing slash
    base_url: String,
}

impl ProtogenClient {
    /// Create a new client pointing at the real upstream
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    ///
    /// # Errors
    /// - `ProtogenError::InvalidUrl` - base URL is not http(s)
    /// - `ProtogenError::HttpError` - the HTTP client cannot be created
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ProtogenError::InvalidUrl(config.base_url));
        }

        let client = reqwest::Client::builder().build()?;

        Ok(Self { client, base_url })
    }

    /// Upstream base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join the base URL and a path (with optional query string)
    ///
    /// # Errors
    /// Returns `ProtogenError::InvalidUrl` unless `path` is empty or starts
    /// with `/` or `?`
    ///
    /// # Example
    /// ```
    /// use protogen_core::ProtogenClient;
    ///
    /// let client = ProtogenClient::new().unwrap();
    /// assert_eq!(
    ///     client.url("/assets/logo.png?v=2").unwrap(),
    ///     "https://v2.protogen.fr/assets/logo.png?v=2"
    /// );
    /// ```
    pub fn url(&self, path: &str) -> Result<String> {
        if !path.is_empty() && !path.starts_with('/') && !path.starts_with('?') {
            return Err(ProtogenError::InvalidUrl(path.to_string()));
        }
        Ok(format!("{}{}", self.base_url, path))
    }

    /// Fetch an HTML page the way a browser coming from the site would
    ///
    /// # Errors
    /// - `ProtogenError::HttpError` - network error or unreadable body
    /// - `ProtogenError::UpstreamStatus` - upstream answered non-2xx
    pub async fn fetch_html(&self, url: &str) -> Result<String> {
        debug!(url, "fetching html");

        let response = self
            .client
            .get(url)
            .header(USER_AGENT, BROWSER_USER_AGENT)
            .header(ACCEPT, "text/html")
            .header(REFERER, format!("{}/", self.base_url))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtogenError::UpstreamStatus {
                status,
                url: url.to_string(),
            });
        }

        Ok(response.text().await?)
    }

    /// Forward a call to the XHR API and return its status and JSON body
    ///
    /// The upstream status is returned as-is, non-2xx included. `body` is
    /// sent as JSON for every method except GET and HEAD (`{}` when absent).
    ///
    /// # Arguments
    /// * `method` - Inbound request method
    /// * `path` - Path and query below `/sys/XHR` (e.g. `/music/list?page=2`)
    /// * `body` - Inbound JSON body
    ///
    /// # Errors
    /// - `ProtogenError::InvalidUrl` - `path` is not a path
    /// - `ProtogenError::HttpError` - network error
    /// - `ProtogenError::InvalidBody` - upstream body is not JSON
    pub async fn forward_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<(StatusCode, Value)> {
        let url = self.url(&format!("{}{}", XHR_PREFIX, path))?;
        debug!(%method, %url, "forwarding api call");

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, API_USER_AGENT);

        if method != Method::GET && method != Method::HEAD {
            let body = body.unwrap_or_else(|| Value::Object(Default::default()));
            request = request.body(body.to_string());
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        let json = serde_json::from_str(&text)
            .map_err(|e| ProtogenError::InvalidBody(format!("{} ({})", e, url)))?;

        Ok((status, json))
    }

    /// Start a plain GET for a media or asset file
    ///
    /// The body is left unread so the caller can stream it.
    ///
    /// # Errors
    /// - `ProtogenError::InvalidUrl` - `path` is not a path
    /// - `ProtogenError::HttpError` - network error
    /// - `ProtogenError::UpstreamStatus` - upstream answered non-2xx
    pub async fn fetch_raw(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path)?;
        debug!(%url, "fetching raw");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtogenError::UpstreamStatus { status, url });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ProtogenClient {
        ProtogenClient::with_config(ClientConfig {
            base_url: server.uri(),
        })
        .unwrap()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://v2.protogen.fr");
    }

    #[test]
    fn test_client_creation() {
        let client = ProtogenClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_non_http_base() {
        let result = ProtogenClient::with_config(ClientConfig {
            base_url: "ftp://v2.protogen.fr".to_string(),
        });
        assert!(matches!(result, Err(ProtogenError::InvalidUrl(_))));
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = ProtogenClient::with_config(ClientConfig {
            base_url: "https://v2.protogen.fr/".to_string(),
        })
        .unwrap();
        assert_eq!(client.base_url(), "https://v2.protogen.fr");
    }

    #[test]
    fn test_url_join() {
        let client = ProtogenClient::new().unwrap();
        assert_eq!(client.url("").unwrap(), "https://v2.protogen.fr");
        assert_eq!(
            client.url("?season=1").unwrap(),
            "https://v2.protogen.fr?season=1"
        );
        assert!(matches!(
            client.url("evil.example.org/x"),
            Err(ProtogenError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_html_sends_browser_headers() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/kikiskothek"))
            .and(header("accept", "text/html"))
            .and(header("user-agent", BROWSER_USER_AGENT))
            .and(header("referer", format!("{}/", server.uri()).as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let html = client
            .fetch_html(&format!("{}/kikiskothek", server.uri()))
            .await
            .unwrap();
        assert_eq!(html, "<html></html>");
    }

    #[tokio::test]
    async fn test_fetch_html_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.fetch_html(&format!("{}/down", server.uri())).await;

        match result {
            Err(ProtogenError::UpstreamStatus { status, .. }) => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            }
            other => panic!("Expected UpstreamStatus error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_forward_json_get_mirrors_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/sys/XHR/music/list"))
            .and(query_param("page", "2"))
            .and(header("user-agent", API_USER_AGENT))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "ok": false })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let (status, body) = client
            .forward_json(Method::GET, "/music/list?page=2", None)
            .await
            .unwrap();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "ok": false }));
    }

    #[tokio::test]
    async fn test_forward_json_post_sends_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sys/XHR/playlist"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "name": "Mix" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 9 })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let (status, body) = client
            .forward_json(Method::POST, "/playlist", Some(json!({ "name": "Mix" })))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], 9);
    }

    #[tokio::test]
    async fn test_forward_json_post_without_body_sends_empty_object() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sys/XHR/ping"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "pong": true })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let (status, _) = client
            .forward_json(Method::POST, "/ping", None)
            .await
            .unwrap();
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_forward_json_rejects_non_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.forward_json(Method::GET, "/x", None).await;
        assert!(matches!(result, Err(ProtogenError::InvalidBody(_))));
    }

    #[tokio::test]
    async fn test_fetch_raw_returns_unread_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/assets/logo.png"))
            .respond_with(
                ResponseTemplate::new(200).set_body_raw(vec![0x89, b'P', b'N', b'G'], "image/png"),
            )
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.fetch_raw("/assets/logo.png").await.unwrap();
        assert_eq!(response.headers()["content-type"], "image/png");
        assert_eq!(response.bytes().await.unwrap().as_ref(), b"\x89PNG");
    }

    #[tokio::test]
    async fn test_fetch_raw_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let result = client.fetch_raw("/webapi/missing.mp4").await;
        match result {
            Err(ProtogenError::UpstreamStatus { status, url }) => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(url, format!("{}/webapi/missing.mp4", server.uri()));
            }
            other => panic!("Expected UpstreamStatus error, got {:?}", other),
        }
    }
}
