//! libcurl-backed transport (via the `curl` crate).

use std::time::Duration;
use url::Url;

use super::{HttpResponse, Transport, TransportError};
use crate::config::ShortitConfig;

/// Blocking GET over libcurl. A fresh easy handle is used per request.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
    user_agent: Option<String>,
}

impl CurlTransport {
    pub fn from_config(cfg: &ShortitConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
            user_agent: cfg.user_agent.clone(),
        }
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &Url) -> Result<HttpResponse, TransportError> {
        let mut body: Vec<u8> = Vec::new();

        let mut easy = curl::easy::Easy::new();
        easy.url(url.as_str())?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }

        {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()?;
        }

        let status = easy.response_code()?;
        tracing::debug!(url = %url, status, bytes = body.len(), "GET completed");
        Ok(HttpResponse { status, body })
    }
}
