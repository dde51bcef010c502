use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gomoku::api::{ErrorResponse, GameService, Request};
use gomoku::config::AppConfig;

/// Serve a Gomoku game over newline-delimited JSON on stdin/stdout.
#[derive(Parser)]
#[command(name = "gomoku", about = "Gomoku rules engine, JSON over stdio")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    env_logger::Builder::new()
        .parse_filters(&config.service.log_filter)
        .parse_default_env()
        .init();

    let service = GameService::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("reading request")?;
        if line.trim().is_empty() {
            continue;
        }

        let value = match serde_json::from_str::<Request>(&line) {
            Ok(request) => service.handle(request).context("encoding response")?,
            Err(err) => {
                log::warn!("malformed request: {err}");
                serde_json::to_value(ErrorResponse::new(err.to_string()))
                    .context("encoding response")?
            }
        };

        let rendered = if config.service.pretty_responses {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        }
        .context("encoding response")?;

        writeln!(stdout, "{rendered}").context("writing response")?;
        stdout.flush().context("writing response")?;
    }

    Ok(())
}
