//! CLI for the ShortIt URL shortener client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use shortit_core::config;

use commands::{run_completions, run_config, run_interactive, run_shorten};

/// Top-level CLI for ShortIt.
#[derive(Debug, Parser)]
#[command(name = "shortit")]
#[command(about = "ShortIt: shorten URLs via is.gd with a TinyURL fallback", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Shorten a single URL and print the result.
    Shorten {
        /// Long URL starting with http:// or https://.
        url: String,
        /// Print the outcome as JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },

    /// Read URLs from stdin, one per line. `reset` clears the result, `quit` exits.
    Interactive,

    /// Show the config file location and effective settings.
    Config,

    /// Generate shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    /// Returns the process exit code.
    pub async fn run_from_args() -> Result<i32> {
        let cli = Cli::parse();

        if let CliCommand::Completions { shell } = cli.command {
            run_completions(shell);
            return Ok(0);
        }

        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Shorten { url, json } => run_shorten(&cfg, url, json).await,
            CliCommand::Interactive => run_interactive(&cfg).await,
            CliCommand::Config => run_config(&cfg),
            CliCommand::Completions { .. } => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests;
