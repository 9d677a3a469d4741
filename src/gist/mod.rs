//! Gist API integration module
//!
//! A small client that normalizes the GitHub Gist REST API into typed
//! outcomes.
//!
//! ## Architecture
//!
//! - [`client`]: Core client, URI/header/proxy construction and status classification
//! - [`gists`]: Create, update, delete, get and commit-history operations
//! - [`auth`]: Token handling
//! - [`proxy`]: Proxy URL validation
//! - [`transport`]: The HTTP seam and its `reqwest` implementation
//! - [`logger`]: Injected diagnostic logging
//! - [`error`]: Error taxonomy
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use sync_settings::gist::{GistClient, GistError};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GistClient::new(None, None, None);
//!
//! match client.get("aa5a315d61ae9438b18d").await {
//!     Ok(gist) => println!("{} files", gist["files"].as_object().map_or(0, |f| f.len())),
//!     Err(GistError::NotFound) => println!("no such gist"),
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod gists;
pub mod logger;
pub mod proxy;
pub mod transport;

pub use auth::GistAuth;
pub use client::GistClient;
pub use error::{GistError, GistErrorKind, GistResult};
pub use logger::{DiagnosticLogger, NoopLogger, TracingLogger};
pub use proxy::{ProxyConfig, is_valid_proxy_url};
pub use transport::{
    HttpMethod, ReqwestTransport, Transport, TransportError, TransportRequest, TransportResponse,
};
