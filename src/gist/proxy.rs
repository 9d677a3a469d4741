//! Proxy configuration and URL validation
//!
//! Invalid proxy URLs are dropped rather than reported: a malformed
//! `http_proxy` setting behaves exactly like an unset one.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

static PROXY_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)^https?://",
        r"(?:(?:[A-Z0-9](?:[A-Z0-9-]{0,61}[A-Z0-9])?\.)+(?:[A-Z]{2,6}\.?|[A-Z0-9-]{2,}\.?)",
        r"|localhost",
        r"|\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})",
        r"(?::\d+)?",
        r"(?:/?|[/?]\S+)$",
    ))
    .expect("proxy URL pattern is valid")
});

/// Check whether `url` is usable as a proxy address
///
/// Accepts `http`/`https` (any case), followed by a domain name, `localhost`
/// or a dotted-quad IPv4 address, an optional port and an optional path.
pub fn is_valid_proxy_url(url: &str) -> bool {
    !url.is_empty() && PROXY_URL.is_match(url)
}

/// User-supplied proxy URLs, stored unvalidated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyConfig {
    pub http_proxy: Option<String>,
    pub https_proxy: Option<String>,
}

impl ProxyConfig {
    pub fn new(http_proxy: Option<String>, https_proxy: Option<String>) -> Self {
        Self {
            http_proxy,
            https_proxy,
        }
    }

    /// Resolve the outbound proxy map, keyed by scheme (`http`, `https`)
    ///
    /// Only entries passing [`is_valid_proxy_url`] are included.
    pub fn resolve(&self) -> BTreeMap<String, String> {
        let mut proxies = BTreeMap::new();
        for (scheme, url) in [("http", &self.http_proxy), ("https", &self.https_proxy)] {
            match url.as_deref() {
                Some(url) if is_valid_proxy_url(url) => {
                    proxies.insert(scheme.to_string(), url.to_string());
                }
                Some(url) if !url.is_empty() => {
                    tracing::debug!(scheme, url, "ignoring invalid proxy URL");
                }
                _ => {}
            }
        }
        proxies
    }
}
