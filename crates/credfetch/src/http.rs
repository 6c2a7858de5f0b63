//! [`Transport`] backed by `reqwest` with a shared cookie jar.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::cookie::Jar;
use reqwest::{Client, ClientBuilder, Url};

use crate::config::ClientConfig;
use crate::error::BoxError;
use crate::options::{CredentialMode, EffectiveOptions};
use crate::transport::{Transport, TransportResponse};

/// HTTP transport that keeps session cookies between requests.
///
/// Cookies set by responses land in the jar and are sent back on later
/// requests whose credential mode allows it.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    /// Client with the cookie jar attached
    client: Client,
    /// Client with no cookie store, used when credentials are withheld
    anonymous: Client,
    jar: Arc<Jar>,
    base_url: Option<Url>,
}

impl ReqwestTransport {
    /// Create a transport without a base URL; request paths must be absolute URLs.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    /// Create a transport that resolves relative paths against `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid URL or the HTTP client cannot be created
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Self::from_config(&ClientConfig {
            base_url: Some(base_url.to_string()),
            ..ClientConfig::default()
        })
    }

    /// Create a transport from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot be created
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let base_url = config
            .base_url
            .as_deref()
            .map(parse_base_url)
            .transpose()?;

        let jar = Arc::new(Jar::default());
        let client = configure(Client::builder(), config)
            .cookie_provider(Arc::clone(&jar))
            .build()
            .context("Failed to create HTTP client")?;
        let anonymous = configure(Client::builder(), config)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            anonymous,
            jar,
            base_url,
        })
    }

    /// Shared cookie jar; seed it to resume a session or inspect what the server set.
    #[must_use]
    pub fn cookie_jar(&self) -> &Arc<Jar> {
        &self.jar
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Resolve `path` the way a browser resolves a fetch target.
    fn resolve(&self, path: &str) -> std::result::Result<Url, BoxError> {
        let url = match &self.base_url {
            Some(base) => base.join(path)?,
            None => Url::parse(path)?,
        };
        Ok(url)
    }

    fn client_for(&self, url: &Url, mode: CredentialMode) -> &Client {
        let send_cookies = match mode {
            CredentialMode::Include => true,
            CredentialMode::Omit => false,
            CredentialMode::SameOrigin => self
                .base_url
                .as_ref()
                .is_some_and(|base| base.origin() == url.origin()),
        };
        if send_cookies {
            &self.client
        } else {
            &self.anonymous
        }
    }
}

fn configure(builder: ClientBuilder, config: &ClientConfig) -> ClientBuilder {
    let builder = match config.timeout_secs {
        Some(secs) => builder.timeout(Duration::from_secs(secs)),
        None => builder,
    };
    match config.user_agent.as_deref() {
        Some(agent) => builder.user_agent(agent),
        None => builder,
    }
}

/// Parse a base URL, making sure it ends in `/` so joins keep its last segment.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut normalized = raw.trim_end_matches('/').to_string();
    normalized.push('/');
    Url::parse(&normalized).with_context(|| format!("Invalid base URL: {raw}"))
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn request(
        &self,
        path: &str,
        options: EffectiveOptions,
    ) -> std::result::Result<TransportResponse, BoxError> {
        let url = self.resolve(path)?;
        log::debug!("{} {url}", options.method);

        let mut request = self
            .client_for(&url, options.credentials)
            .request(options.method, url)
            .headers(options.headers);
        if !options.query.is_empty() {
            request = request.query(&options.query);
        }
        if let Some(body) = options.body {
            request = request.body(body);
        }
        if let Some(timeout) = options.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        log::debug!("-> {status} ({} bytes)", body.len());

        Ok(TransportResponse::new(status, headers, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_normalized() {
        let transport = ReqwestTransport::with_base_url("http://localhost:8000/app").unwrap();
        assert_eq!(
            transport.base_url().map(Url::as_str),
            Some("http://localhost:8000/app/")
        );

        let transport = ReqwestTransport::with_base_url("http://localhost:8000///").unwrap();
        assert_eq!(
            transport.base_url().map(Url::as_str),
            Some("http://localhost:8000/")
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(ReqwestTransport::with_base_url("not a url").is_err());
    }

    #[test]
    fn test_resolve_paths() {
        let transport = ReqwestTransport::with_base_url("http://localhost:8000/app").unwrap();

        assert_eq!(
            transport.resolve("/api/items").unwrap().as_str(),
            "http://localhost:8000/api/items"
        );
        assert_eq!(
            transport.resolve("items").unwrap().as_str(),
            "http://localhost:8000/app/items"
        );
        assert_eq!(
            transport.resolve("https://example.com/x").unwrap().as_str(),
            "https://example.com/x"
        );
    }

    #[test]
    fn test_relative_path_without_base_fails() {
        let transport = ReqwestTransport::new().unwrap();
        assert!(transport.resolve("/api/items").is_err());
        assert!(transport.resolve("http://localhost/api").is_ok());
    }

    #[test]
    fn test_client_selection_by_credential_mode() {
        let transport = ReqwestTransport::with_base_url("http://localhost:8000").unwrap();
        let same = Url::parse("http://localhost:8000/api").unwrap();
        let other = Url::parse("http://example.com/api").unwrap();

        let with_jar = std::ptr::from_ref(&transport.client);
        let without_jar = std::ptr::from_ref(&transport.anonymous);
        let picked = |url: &Url, mode| std::ptr::from_ref(transport.client_for(url, mode));

        assert_eq!(picked(&other, CredentialMode::Include), with_jar);
        assert_eq!(picked(&same, CredentialMode::Omit), without_jar);
        assert_eq!(picked(&same, CredentialMode::SameOrigin), with_jar);
        assert_eq!(picked(&other, CredentialMode::SameOrigin), without_jar);
    }
}
