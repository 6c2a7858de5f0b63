//! The outbound HTTP capability the helper sits on top of.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::error::{BoxError, StatusError};
use crate::options::EffectiveOptions;

/// Something that can perform one HTTP exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request to `path` and return the complete response.
    ///
    /// # Errors
    ///
    /// Returns an error if no response could be obtained. HTTP error
    /// statuses are not errors at this level.
    async fn request(
        &self,
        path: &str,
        options: EffectiveOptions,
    ) -> Result<TransportResponse, BoxError>;
}

/// A fully received response.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    body: Vec<u8>,
}

impl TransportResponse {
    #[must_use]
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    #[must_use]
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text; invalid UTF-8 is replaced.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }

    /// Ensure the status is in 200..=299.
    ///
    /// # Errors
    ///
    /// Returns a [`StatusError`] with the status and raw body text otherwise.
    pub fn ensure_success(self) -> Result<Self, StatusError> {
        if !self.status.is_success() {
            return Err(StatusError::new(self.status, self.text()));
        }
        Ok(self)
    }
}
