//! `shortit config` – show config location and values.

use anyhow::Result;
use shortit_core::config::{self, ShortitConfig};

pub fn run_config(cfg: &ShortitConfig) -> Result<i32> {
    println!("Config file: {}", config::config_path()?.display());
    print!("{}", settings_preview(cfg)?);
    Ok(0)
}

fn settings_preview(cfg: &ShortitConfig) -> Result<String> {
    let endpoints = cfg.endpoints()?;
    let mut out = String::new();
    out.push_str(&format!("primary_endpoint     = {}\n", endpoints.primary));
    out.push_str(&format!("fallback_endpoint    = {}\n", endpoints.fallback));
    out.push_str(&format!("connect_timeout_secs = {}\n", cfg.connect_timeout_secs));
    out.push_str(&format!("timeout_secs         = {}\n", cfg.timeout_secs));
    out.push_str(&format!(
        "user_agent           = {}\n",
        cfg.user_agent.as_deref().unwrap_or("-")
    ));
    Ok(out)
}
