//! Classify tier failures for diagnostics.
//!
//! There is no retry: the kind only ends up in log fields so a failed
//! fallback chain can be told apart from, say, a provider rejecting the URL.

use std::fmt;

use crate::service::TierError;
use crate::transport::TransportError;

/// High-level classification of a tier failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Operation timed out (connect/read).
    Timeout,
    /// Network-level failure (connection refused, DNS, reset).
    Connection,
    /// Server asked us to slow down (429, 503).
    Throttled,
    /// Any other non-2xx status.
    HttpStatus(u16),
    /// Service answered with an explicit error field.
    ServiceRejected,
    /// Body could not be interpreted.
    BadResponse,
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Timeout => f.write_str("timeout"),
            ErrorKind::Connection => f.write_str("connection"),
            ErrorKind::Throttled => f.write_str("throttled"),
            ErrorKind::HttpStatus(code) => write!(f, "http_{code}"),
            ErrorKind::ServiceRejected => f.write_str("service_rejected"),
            ErrorKind::BadResponse => f.write_str("bad_response"),
            ErrorKind::Other => f.write_str("other"),
        }
    }
}

/// Classify an HTTP status code.
pub fn classify_http_status(code: u32) -> ErrorKind {
    match code {
        429 | 503 => ErrorKind::Throttled,
        _ => ErrorKind::HttpStatus(u16::try_from(code).unwrap_or(u16::MAX)),
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout() {
        return ErrorKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
        || e.is_ssl_connect_error()
    {
        return ErrorKind::Connection;
    }
    ErrorKind::Other
}

pub fn classify(e: &TierError) -> ErrorKind {
    match e {
        TierError::Transport(TransportError::Curl(ce)) => classify_curl_error(ce),
        TierError::Transport(TransportError::Other(_)) => ErrorKind::Other,
        TierError::Status(code) => classify_http_status(*code),
        TierError::Rejected { .. } => ErrorKind::ServiceRejected,
        TierError::Malformed(_) => ErrorKind::BadResponse,
    }
}
