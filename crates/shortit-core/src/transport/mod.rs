//! HTTP GET transport used by both shortening services.
//!
//! The services only depend on the [`Transport`] trait; [`CurlTransport`] is
//! the libcurl-backed implementation used by the CLI.

mod curl_impl;

pub use curl_impl::CurlTransport;

use thiserror::Error;
use url::Url;

/// Status and buffered body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u32,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u32, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// The request never produced an HTTP status.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Failure from a non-curl transport.
    #[error("{0}")]
    Other(String),
}

/// Performs a blocking GET and buffers the whole response.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }
}
