//! Gist API client implementation
//!
//! This module provides the main `GistClient` struct which owns the
//! credentials, proxy settings and transport used by every operation. The
//! operations themselves live in `gists.rs` as an `impl` block extending the
//! client.
//!
//! Every request goes through [`GistClient::do_request`], which resolves the
//! proxies, attaches the headers, performs a single attempt and classifies the
//! outcome:
//!
//! 1. no response at all -> [`GistError::Network`]
//! 2. 404 -> [`GistError::NotFound`]
//! 3. 401/403 -> [`GistError::Authentication`]
//! 4. 422 -> [`GistError::UnprocessableData`]
//! 5. any other status >= 300 -> [`GistError::Unexpected`]
//! 6. anything else is a success

use super::auth::GistAuth;
use super::error::{GistError, GistResult};
use super::logger::{DiagnosticLogger, NoopLogger};
use super::proxy::ProxyConfig;
use super::transport::{
    HttpMethod, ReqwestTransport, Transport, TransportRequest, TransportResponse,
};
use crate::constants::github::{ACCEPT_HEADER, GISTS_API_BASE};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Client for the GitHub Gist REST API
///
/// The client holds no per-call state; configuration is fixed at construction
/// and a single instance can be shared across tasks.
///
/// ## Example
///
/// ```rust,no_run
/// use sync_settings::gist::GistClient;
/// use serde_json::json;
///
/// # async fn example() -> anyhow::Result<()> {
/// let client = GistClient::new(Some("your_token".to_string()), None, None);
///
/// let gist = client
///     .create(&json!({"files": {"Preferences.sublime-settings": {"content": "{}"}}}))
///     .await?;
/// println!("Created gist {}", gist["id"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GistClient {
    pub(crate) auth: Option<GistAuth>,
    pub(crate) proxy: ProxyConfig,
    pub(crate) api_base: String,
    pub(crate) transport: Arc<dyn Transport>,
    pub(crate) logger: Arc<dyn DiagnosticLogger>,
}

impl GistClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `token` - Personal access token; `None` or an empty string means anonymous
    /// * `http_proxy` - Proxy for `http` traffic, validated lazily on each request
    /// * `https_proxy` - Proxy for `https` traffic, validated lazily on each request
    pub fn new(
        token: Option<String>,
        http_proxy: Option<String>,
        https_proxy: Option<String>,
    ) -> Self {
        Self {
            auth: GistAuth::from_optional(token),
            proxy: ProxyConfig::new(http_proxy, https_proxy),
            api_base: GISTS_API_BASE.to_string(),
            transport: Arc::new(ReqwestTransport::new()),
            logger: Arc::new(NoopLogger),
        }
    }

    /// Replace the transport used to perform requests
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = transport;
        self
    }

    /// Replace the diagnostic logger (defaults to [`NoopLogger`])
    pub fn with_logger(mut self, logger: Arc<dyn DiagnosticLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Point the client at a different API root, e.g. a local mock server
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Build the URI for an endpoint relative to the gists root
    ///
    /// An empty endpoint yields the root itself; otherwise the endpoint is
    /// appended after a separating slash.
    pub fn make_uri(&self, endpoint: &str) -> String {
        if endpoint.is_empty() {
            self.api_base.clone()
        } else {
            format!("{}/{}", self.api_base, endpoint)
        }
    }

    /// Headers attached to every request
    ///
    /// Anonymous clients send no headers at all.
    pub fn headers(&self) -> BTreeMap<String, String> {
        let mut headers = BTreeMap::new();
        if let Some(auth) = &self.auth {
            headers.insert("accept".to_string(), ACCEPT_HEADER.to_string());
            headers.insert("content-type".to_string(), "application/json".to_string());
            headers.insert("authorization".to_string(), auth.get_auth_header());
        }
        headers
    }

    /// Proxies that pass validation, keyed by scheme
    pub fn proxies(&self) -> BTreeMap<String, String> {
        self.proxy.resolve()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }

    pub(crate) fn require_auth(&self) -> GistResult<&GistAuth> {
        self.auth.as_ref().ok_or_else(GistError::credentials_required)
    }

    pub(crate) fn require_id(gist_id: &str) -> GistResult<()> {
        if gist_id.is_empty() {
            return Err(GistError::Validation(format!(
                "The given id `{}` is not valid",
                gist_id
            )));
        }
        Ok(())
    }

    /// Serialize a write payload, which must be a non-empty JSON object
    pub(crate) fn require_payload(data: &Value, action: &str) -> GistResult<String> {
        match data.as_object() {
            Some(map) if !map.is_empty() => serde_json::to_string(data)
                .map_err(|e| GistError::Validation(e.to_string())),
            _ => Err(GistError::Validation(format!(
                "Gist can't be {} without data",
                action
            ))),
        }
    }

    /// Perform one request and classify the response
    pub(crate) async fn do_request(
        &self,
        method: HttpMethod,
        url: String,
        body: Option<String>,
    ) -> GistResult<TransportResponse> {
        let request = TransportRequest {
            method,
            url,
            headers: self.headers(),
            body,
            proxies: self.proxies(),
        };

        tracing::debug!(method = method.as_str(), url = %request.url, "sending gist request");

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|e| GistError::Network(e.to_string()))?;

        tracing::debug!(status = response.status, "gist response received");

        self.classify(response)
    }

    fn classify(&self, response: TransportResponse) -> GistResult<TransportResponse> {
        let status = response.status;
        if status < 300 {
            return Ok(response);
        }

        let body = decode_error_body(&response.body);
        self.logger.warn(&body);

        let error = match status {
            404 => GistError::NotFound,
            401 | 403 => GistError::credentials_rejected(),
            422 => GistError::UnprocessableData,
            _ => GistError::Unexpected {
                status,
                message: error_message(&body),
            },
        };
        Err(error)
    }

    /// Decode a success body as JSON
    pub(crate) fn decode(response: &TransportResponse) -> GistResult<Value> {
        serde_json::from_str(&response.body).map_err(|e| GistError::InvalidResponse(e.to_string()))
    }
}

impl fmt::Debug for GistClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GistClient")
            .field("authenticated", &self.is_authenticated())
            .field("proxy", &self.proxy)
            .field("api_base", &self.api_base)
            .finish()
    }
}

fn decode_error_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

fn error_message(body: &Value) -> String {
    match body {
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error")
            .to_string(),
        Value::String(text) if !text.is_empty() => text.clone(),
        _ => "Unknown error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_make_uri() {
        let client = GistClient::new(None, None, None);
        assert_eq!(client.make_uri(""), "https://api.github.com/gists");
        assert_eq!(client.make_uri("abc"), "https://api.github.com/gists/abc");
        assert_eq!(
            client.make_uri("abc/commits"),
            "https://api.github.com/gists/abc/commits"
        );
    }

    #[test]
    fn test_with_api_base_trims_trailing_slash() {
        let client =
            GistClient::new(None, None, None).with_api_base("http://127.0.0.1:1234/gists/");
        assert_eq!(client.make_uri("abc"), "http://127.0.0.1:1234/gists/abc");
    }

    #[test]
    fn test_headers_with_token() {
        let client = GistClient::new(Some("secret".to_string()), None, None);
        let headers = client.headers();
        assert_eq!(headers.get("accept").unwrap(), ACCEPT_HEADER);
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert!(headers.get("authorization").unwrap().contains("secret"));
    }

    #[test]
    fn test_headers_without_token() {
        let client = GistClient::new(None, None, None);
        assert!(client.headers().is_empty());

        let client = GistClient::new(Some(String::new()), None, None);
        assert!(!client.headers().contains_key("authorization"));
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_require_payload() {
        assert!(GistClient::require_payload(&json!({"files": {}}), "created").is_ok());
        assert!(GistClient::require_payload(&json!({}), "created").is_err());
        assert!(GistClient::require_payload(&json!([1, 2]), "created").is_err());
        assert!(GistClient::require_payload(&json!("text"), "created").is_err());
        assert!(GistClient::require_payload(&Value::Null, "updated").is_err());
    }

    #[test]
    fn test_require_id() {
        assert!(GistClient::require_id("abc").is_ok());
        assert!(GistClient::require_id("").is_err());
        // Only the empty id is rejected up front; anything else goes to the API
        assert!(GistClient::require_id(" ").is_ok());
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(error_message(&json!({"message": "boom"})), "boom");
        assert_eq!(error_message(&json!({"other": 1})), "Unknown error");
        assert_eq!(error_message(&json!("plain text")), "plain text");
        assert_eq!(error_message(&Value::Null), "Unknown error");
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = GistClient::new(Some("super-secret".to_string()), None, None);
        let debug = format!("{:?}", client);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("authenticated: true"));
    }
}
