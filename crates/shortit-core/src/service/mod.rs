//! The two shortening services, tried in order.
//!
//! Each tier builds its request URL from a configured endpoint and turns the
//! raw response into either a short URL or a [`TierError`].

pub mod fallback;
pub mod primary;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::transport::TransportError;

/// Bytes left unescaped in a query value: alphanumerics and `-_.!~*'()`.
/// `url` itself still escapes `'` in http(s) queries.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Appends `pairs` to the endpoint's query. Spaces become `%20`, not `+`.
pub(crate) fn with_query(endpoint: &Url, pairs: &[(&str, &str)]) -> Url {
    let mut query = endpoint.query().unwrap_or_default().to_string();
    for (key, value) in pairs {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(key);
        query.push('=');
        query.extend(utf8_percent_encode(value, URI_COMPONENT));
    }
    let mut url = endpoint.clone();
    url.set_query(Some(&query));
    url
}

/// Which service produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Primary,
    Fallback,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Primary => f.write_str("primary"),
            Tier::Fallback => f.write_str("fallback"),
        }
    }
}

/// Failure of a single tier. Never shown to the user directly.
#[derive(Debug, Error)]
pub enum TierError {
    #[error("transport: {0}")]
    Transport(#[from] TransportError),
    #[error("HTTP {0}")]
    Status(u32),
    /// The service answered but flagged an error in its body.
    #[error("service error {code}: {message}")]
    Rejected { code: String, message: String },
    #[error("malformed response: {0}")]
    Malformed(String),
}
