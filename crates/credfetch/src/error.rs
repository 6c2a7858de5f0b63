//! Error types returned by [`send`](crate::send).

use reqwest::StatusCode;
use thiserror::Error;

/// Boxed error produced by a [`Transport`](crate::Transport) implementation.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Result alias for helper calls.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure outcome of a single request.
#[derive(Debug, Error)]
pub enum Error {
    /// The transport could not produce a response (connect, DNS, timeout, bad URL).
    #[error(transparent)]
    Transport(BoxError),

    /// A response arrived with a status outside 200..=299.
    #[error(transparent)]
    Status(#[from] StatusError),

    /// A successful response whose body is not the expected JSON.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Status code of the failed response, if the failure was a status error.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(err) => Some(err.status()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

/// Non-success HTTP response.
///
/// Displays as `"<status> <body>"`, e.g. `400 bad request`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} {}", .status.as_u16(), .body)]
pub struct StatusError {
    status: StatusCode,
    body: String,
}

impl StatusError {
    #[must_use]
    pub fn new(status: StatusCode, body: String) -> Self {
        Self { status, body }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Raw response text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
