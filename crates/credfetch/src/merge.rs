//! Applies the fixed request defaults over caller options.

use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Method;

use crate::options::{CredentialMode, EffectiveOptions, RequestOptions};

/// Defaults applied to every request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestDefaults {
    credentials: CredentialMode,
    content_type: &'static str,
}

/// Cookies always included, JSON content type unless the caller sets one.
pub const DEFAULTS: RequestDefaults = RequestDefaults {
    credentials: CredentialMode::Include,
    content_type: "application/json",
};

impl RequestDefaults {
    #[must_use]
    pub fn credentials(&self) -> CredentialMode {
        self.credentials
    }

    #[must_use]
    pub fn content_type(&self) -> &'static str {
        self.content_type
    }
}

/// Merge `options` with `defaults`.
///
/// Caller headers are kept as given (every value per name); `Content-Type`
/// is added only when the caller did not supply one. Credentials always
/// come from `defaults`.
#[must_use]
pub fn merge_options(defaults: &RequestDefaults, options: RequestOptions) -> EffectiveOptions {
    let RequestOptions {
        method,
        mut headers,
        body,
        timeout,
        query,
    } = options;

    headers
        .entry(CONTENT_TYPE)
        .or_insert_with(|| HeaderValue::from_static(defaults.content_type));

    EffectiveOptions {
        method: method.unwrap_or(Method::GET),
        headers,
        body,
        credentials: defaults.credentials,
        timeout,
        query,
    }
}
