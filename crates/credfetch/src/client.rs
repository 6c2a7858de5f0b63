//! The JSON request helper.

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::http::ReqwestTransport;
use crate::merge::{merge_options, DEFAULTS};
use crate::options::RequestOptions;
use crate::transport::Transport;

/// Send one request through `transport` and decode the JSON response.
///
/// Credentials are always included and `Content-Type: application/json` is
/// added unless `options` already sets a content type.
///
/// # Errors
///
/// - [`Error::Transport`] if no response was obtained
/// - [`Error::Status`] for a status outside 200..=299, carrying the raw body text
/// - [`Error::Decode`] if a successful body is not valid JSON for `R`
pub async fn send<R, T>(transport: &T, path: &str, options: Option<RequestOptions>) -> Result<R>
where
    R: DeserializeOwned,
    T: Transport + ?Sized,
{
    let effective = merge_options(&DEFAULTS, options.unwrap_or_default());

    let response = transport
        .request(path, effective)
        .await
        .map_err(Error::Transport)?
        .ensure_success()?;

    Ok(response.json()?)
}

/// Holds a transport and exposes [`send`] on it.
#[derive(Debug, Clone)]
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
}

impl<T: Transport> ApiClient<T> {
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// See [`send`].
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure of the call.
    pub async fn send<R: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<R> {
        send(&self.transport, path, options).await
    }

    /// `send(path, None)`.
    ///
    /// # Errors
    ///
    /// Returns the transport, status, or decode failure of the call.
    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R> {
        self.send(path, None).await
    }
}
