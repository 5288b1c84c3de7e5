//! `shortit shorten <url>` – shorten one URL.

use anyhow::{Context, Result};
use shortit_core::config::ShortitConfig;
use shortit_core::{Phase, ShortenOutcome};

use super::build_session;

pub async fn run_shorten(cfg: &ShortitConfig, url: String, json: bool) -> Result<i32> {
    let session = build_session(cfg)?.with_phase_hook(move |phase| {
        if !json && phase == Phase::Requesting {
            eprintln!("Shortening...");
        }
    });

    let outcome = tokio::task::spawn_blocking(move || session.submit(&url))
        .await
        .context("shorten task join")??;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        match &outcome {
            ShortenOutcome::Success { short_url, .. } => println!("{short_url}"),
            ShortenOutcome::Failure { message, .. } => eprintln!("{message}"),
        }
    }

    Ok(if outcome.is_success() { 0 } else { 1 })
}
