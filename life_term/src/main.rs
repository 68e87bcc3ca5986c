// main.rs - Terminal front end: continuous play until Ctrl-C

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use life::runner::{self, CancellationToken};
use life::{LifeConfig, Session};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Clear screen and move the cursor home.
const CLEAR: &str = "\x1b[2J\x1b[H";

/// Conway's Game of Life in the terminal.
#[derive(Parser)]
#[command(name = "life_term", about = "Run Conway's Game of Life in the terminal")]
struct Args {
    #[command(flatten)]
    config: LifeConfig,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with the board
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.config;

    let mut session = Session::new(config.height, config.width)
        .context("failed to create the starting grid")?;
    session.start();

    let token = CancellationToken::new();
    let ctrl_c = token.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => ctrl_c.cancel(),
            Err(e) => warn!(error = %e, "cannot listen for Ctrl-C"),
        }
    });

    let mut stdout = io::stdout().lock();
    let mut write_error = None;
    let summary = runner::run(&mut session, config.delay(), &token, |s| {
        let frame = format!("{CLEAR}{}generation {}\n", s.grid(), s.generation());
        if let Err(e) = stdout.write_all(frame.as_bytes()).and_then(|()| stdout.flush()) {
            write_error.get_or_insert(e);
            token.cancel();
        }
    })
    .await;

    if let Some(e) = write_error {
        return Err(e).context("failed to draw the board");
    }
    info!(generations = summary.generations, reason = ?summary.reason, "done");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn default_filter_reports_the_run_summary() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
