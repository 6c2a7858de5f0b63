//! JSON request helper with session cookie forwarding.
//!
//! [`send`] merges fixed defaults into the caller's options (credentials
//! always included, `Content-Type: application/json` unless overridden),
//! performs one request through a [`Transport`], and either decodes the JSON
//! body or fails with a typed [`Error`].
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use credfetch::{ApiClient, ReqwestTransport};
//!
//! let client = ApiClient::new(ReqwestTransport::with_base_url("http://localhost:8000")?);
//! let health: serde_json::Value = client.get("/api/health").await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod merge;
pub mod options;
pub mod transport;

pub use client::{send, ApiClient};
pub use config::ClientConfig;
pub use error::{BoxError, Error, Result, StatusError};
pub use http::ReqwestTransport;
pub use merge::{merge_options, RequestDefaults, DEFAULTS};
pub use options::{CredentialMode, EffectiveOptions, RequestOptions};
pub use transport::{Transport, TransportResponse};
