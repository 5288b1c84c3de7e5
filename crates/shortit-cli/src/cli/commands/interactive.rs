//! `shortit interactive` – one submission per stdin line.

use anyhow::{Context, Result};
use shortit_core::config::ShortitConfig;
use shortit_core::transport::Transport;
use shortit_core::{Session, ShortenOutcome};
use std::io::{self, BufRead, Write};

use super::build_session;

pub async fn run_interactive(cfg: &ShortitConfig) -> Result<i32> {
    let session = build_session(cfg)?;
    tokio::task::spawn_blocking(move || {
        let stdin = io::stdin();
        let stdout = io::stdout();
        repl(&session, stdin.lock(), stdout.lock())
    })
    .await
    .context("interactive task join")??;
    Ok(0)
}

/// Reads lines until EOF or `quit`, writing one result line per submission.
pub(crate) fn repl<T: Transport>(
    session: &Session<T>,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    writeln!(out, "Enter a URL to shorten (`reset` to clear, `quit` to exit).")?;
    for line in input.lines() {
        let line = line?;
        match line.as_str() {
            "quit" | "exit" => break,
            "reset" => {
                session.reset()?;
                writeln!(out, "Cleared.")?;
            }
            raw => match session.submit(raw)? {
                ShortenOutcome::Success { short_url, tier } => {
                    writeln!(out, "Your shortened URL is ready: {short_url} (via {tier})")?;
                }
                ShortenOutcome::Failure { message, .. } => {
                    writeln!(out, "Error: {message}")?;
                }
            },
        }
        out.flush()?;
    }
    Ok(())
}
