//! HTTP transport used by the Gist client
//!
//! The client builds a complete [`TransportRequest`] and hands it to a
//! [`Transport`]. [`ReqwestTransport`] is the production implementation; tests
//! substitute their own to observe requests without touching the network.

use crate::constants::github::DEFAULT_USER_AGENT;
use async_trait::async_trait;
use reqwest::{Client, Method, Proxy};
use std::collections::BTreeMap;
use thiserror::Error;

/// HTTP methods used by the Gist API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }
}

/// A fully built outbound request
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    /// Serialized JSON body, if any
    pub body: Option<String>,
    /// Validated proxies keyed by scheme (`http`, `https`)
    pub proxies: BTreeMap<String, String>,
}

/// Raw HTTP response: status code and undecoded body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Failure to obtain any HTTP response (DNS, refused connection, timeout, TLS)
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform exactly one HTTP round trip
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

/// [`Transport`] backed by `reqwest`
///
/// A client is built per request so the proxy configuration of each call is
/// applied exactly as resolved.
#[derive(Debug, Default, Clone)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    pub fn new() -> Self {
        Self
    }

    fn build_client(proxies: &BTreeMap<String, String>) -> Result<Client, TransportError> {
        let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);

        if let Some(url) = proxies.get("http") {
            let proxy = Proxy::http(url).map_err(|e| TransportError(e.to_string()))?;
            builder = builder.proxy(proxy);
        }
        if let Some(url) = proxies.get("https") {
            let proxy = Proxy::https(url).map_err(|e| TransportError(e.to_string()))?;
            builder = builder.proxy(proxy);
        }

        builder.build().map_err(|e| TransportError(e.to_string()))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let client = Self::build_client(&request.proxies)?;

        let mut builder = client.request(request.method.into(), &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_mapping() {
        assert_eq!(Method::from(HttpMethod::Get), Method::GET);
        assert_eq!(Method::from(HttpMethod::Post), Method::POST);
        assert_eq!(Method::from(HttpMethod::Patch), Method::PATCH);
        assert_eq!(Method::from(HttpMethod::Delete), Method::DELETE);
        assert_eq!(HttpMethod::Patch.as_str(), "PATCH");
    }

    #[test]
    fn test_build_client_with_valid_proxies() {
        let mut proxies = BTreeMap::new();
        proxies.insert("http".to_string(), "http://proxy.local:8080".to_string());
        proxies.insert("https".to_string(), "http://proxy.local:8443".to_string());
        assert!(ReqwestTransport::build_client(&proxies).is_ok());
    }
}
