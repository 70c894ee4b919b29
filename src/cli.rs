//! Command-line surface: `serve` and `play`.

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::config::AppConfig;
use crate::player::{HttpSource, LocalSource, Plan, RunSource, SourceError, TerminalRenderer, session};
use crate::routes;
use crate::sort::Algorithm;
use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
    #[error(transparent)]
    Source(#[from] SourceError),
}

#[derive(Parser, Debug)]
#[command(name = "sortviz", about = "Sorting algorithm visualizer: HTTP server and terminal player")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API and the interactive page.
    Serve(ServeArgs),
    /// Animate sorting runs in the terminal.
    Play(PlayArgs),
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Overrides `PORT`.
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    #[arg(long, conflicts_with = "all")]
    pub algorithm: Option<Algorithm>,

    /// One pane per algorithm.
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Fetch runs from a running server instead of sorting in-process.
    #[arg(long, env = "SORTVIZ_SERVER")]
    pub server: Option<String>,

    /// Overrides `PLAYBACK_TICK_MS`.
    #[arg(long)]
    pub tick_ms: Option<u64>,

    /// Comma-separated input; a random array is generated when omitted.
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub array: Option<Vec<i64>>,
}

impl PlayArgs {
    #[must_use]
    pub fn plan(&self) -> Plan {
        if self.all { Plan::All } else { Plan::Single(self.algorithm.unwrap_or(Algorithm::Bubble)) }
    }
}

/// Bind `0.0.0.0` on the configured port and serve until the process exits.
///
/// # Errors
///
/// `Bind` if the port is unavailable, `Serve` if the server stops on an
/// I/O error.
pub async fn run_serve(config: AppConfig, args: ServeArgs) -> Result<(), CliError> {
    let port = args.port.unwrap_or(config.port);
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| CliError::Bind { addr: addr.clone(), source })?;

    let app = routes::app(AppState::new(config));
    info!(%port, "sortviz listening");
    axum::serve(listener, app).await.map_err(CliError::Serve)
}

/// # Errors
///
/// `Source` if a random input was needed and could not be generated.
pub async fn run_play(config: &AppConfig, args: PlayArgs) -> Result<(), CliError> {
    let plan = args.plan();
    let tick = args.tick_ms.map_or(config.playback_tick, Duration::from_millis);
    let source: Arc<dyn RunSource> = match &args.server {
        Some(url) => Arc::new(HttpSource::new(url)),
        None => Arc::new(LocalSource::new(config.generate)),
    };

    let renderer = TerminalRenderer::new(std::io::stdout());
    session::play(source, plan, args.array, tick, renderer).await?;
    Ok(())
}
