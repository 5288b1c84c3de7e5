//! CLI command handlers, one per file.

mod completions;
mod config;
mod interactive;
mod shorten;

pub use completions::run_completions;
pub use config::run_config;
pub use interactive::run_interactive;
pub use shorten::run_shorten;

use anyhow::Result;
use shortit_core::config::ShortitConfig;
use shortit_core::transport::CurlTransport;
use shortit_core::{Session, Shortener};

/// Builds a curl-backed session from config.
pub(crate) fn build_session(cfg: &ShortitConfig) -> Result<Session<CurlTransport>> {
    let endpoints = cfg.endpoints()?;
    let transport = CurlTransport::from_config(cfg);
    Ok(Session::new(Shortener::new(transport, endpoints)))
}
