//! Request configuration supplied by callers and the merged form handed to transports.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use serde::Serialize;

/// Whether session credentials (cookies) travel with a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CredentialMode {
    /// Never attach or store cookies.
    Omit,
    /// Attach cookies only when the target shares the transport's origin.
    #[default]
    SameOrigin,
    /// Always attach cookies and accept `Set-Cookie` from the response.
    Include,
}

/// Caller-side request configuration.
///
/// Every field is optional. Credentials are not configurable here: the helper
/// always sends them.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// HTTP verb, GET when omitted
    pub method: Option<Method>,
    /// Merged over the default `Content-Type`; entries here win on collision
    pub headers: HeaderMap,
    /// Passed to the transport unmodified
    pub body: Option<Vec<u8>>,
    pub timeout: Option<Duration>,
    pub query: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Append a header value. Repeated names keep every value.
    #[must_use]
    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.append(name, value);
        self
    }

    /// Append a header from string parts.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` or `value` is not a valid HTTP header component.
    pub fn try_with_header(self, name: &str, value: &str) -> Result<Self> {
        let name = HeaderName::from_bytes(name.as_bytes())
            .with_context(|| format!("Invalid header name: {name}"))?;
        let value = HeaderValue::from_str(value)
            .with_context(|| format!("Invalid value for header {name}"))?;
        Ok(self.with_header(name, value))
    }

    #[must_use]
    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `value` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` cannot be serialized.
    pub fn with_json<B: Serialize + ?Sized>(self, value: &B) -> serde_json::Result<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(self.with_body(body))
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }
}

/// Request configuration after defaults are applied; what a transport receives.
#[derive(Debug, Clone)]
pub struct EffectiveOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Vec<u8>>,
    pub credentials: CredentialMode,
    pub timeout: Option<Duration>,
    pub query: Vec<(String, String)>,
}
