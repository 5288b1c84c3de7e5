//! Primary tier: is.gd-style JSON API.
//!
//! Request: `GET <endpoint>?format=json&url=<encoded>`.
//! Success body: `{"shorturl": "..."}`. Failure body: `{"errorcode": N, "errormessage": "..."}`.

use serde::Deserialize;
use url::Url;

use super::{with_query, TierError};
use crate::transport::HttpResponse;

const DEFAULT_ERROR_MESSAGE: &str = "Failed to shorten URL";

#[derive(Debug, Deserialize)]
struct JsonReply {
    #[serde(default)]
    shorturl: Option<String>,
    /// Provider-specific; only its presence matters.
    #[serde(default)]
    errorcode: Option<serde_json::Value>,
    #[serde(default)]
    errormessage: Option<String>,
}

/// Builds the request URL, percent-encoding `long_url` into the query.
pub fn request_url(endpoint: &Url, long_url: &str) -> Url {
    with_query(endpoint, &[("format", "json"), ("url", long_url)])
}

/// Interprets a primary response. Any non-2xx status or `errorcode` field is a failure.
pub fn parse_response(resp: &HttpResponse) -> Result<String, TierError> {
    if !resp.is_success() {
        return Err(TierError::Status(resp.status));
    }

    let reply: JsonReply = serde_json::from_slice(&resp.body)
        .map_err(|e| TierError::Malformed(format!("invalid JSON: {e}")))?;

    if let Some(code) = reply.errorcode {
        let code = match code {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        return Err(TierError::Rejected {
            code,
            message: reply
                .errormessage
                .unwrap_or_else(|| DEFAULT_ERROR_MESSAGE.to_string()),
        });
    }

    match reply.shorturl.map(|s| s.trim().to_string()) {
        Some(short) if !short.is_empty() => Ok(short),
        _ => Err(TierError::Malformed("missing shorturl field".to_string())),
    }
}
