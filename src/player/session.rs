//! One player session: fetch runs from a source and animate them.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::pane::PaneId;
use super::render::Renderer;
use super::scheduler::{Player, PlayerCommand};
use super::source::{RunSource, SourceError};
use crate::services::dispatch::Run;
use crate::sort::Algorithm;

/// Which panes a session animates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    Single(Algorithm),
    All,
}

/// Animate `plan` over `input`, or over a freshly generated array.
///
/// Runs are fetched off the player loop and each pane starts playing as soon
/// as its run arrives. A failed fetch shows its error in the pane.
///
/// # Errors
///
/// Returns `SourceError` only if no input was given and generation fails.
pub async fn play<R>(
    source: Arc<dyn RunSource>,
    plan: Plan,
    input: Option<Vec<i64>>,
    tick: Duration,
    renderer: R,
) -> Result<R, SourceError>
where
    R: Renderer,
{
    let input = match input {
        Some(input) => input,
        None => source.generate().await?,
    };
    info!(?plan, len = input.len(), "player session starting");

    let mut player = Player::new(tick, renderer);
    player.generate(input.clone());

    let (tx, rx) = mpsc::channel(Algorithm::ALL.len());

    match plan {
        Plan::Single(algorithm) => {
            tokio::spawn(async move {
                let result = source.sort(algorithm, &input).await;
                if tx.send(command_for(PaneId::Single, algorithm, result)).await.is_err() {
                    debug!(%algorithm, "player gone; dropping run");
                }
            });
        }
        Plan::All => {
            tokio::spawn(async move {
                for (algorithm, result) in source.sort_all(&input).await {
                    if tx.send(command_for(PaneId::Grid(algorithm), algorithm, result)).await.is_err() {
                        debug!(%algorithm, "player gone; dropping remaining runs");
                        break;
                    }
                }
            });
        }
    }

    Ok(player.run(rx).await)
}

fn command_for(pane: PaneId, algorithm: Algorithm, result: Result<Run, SourceError>) -> PlayerCommand {
    match result {
        Ok(run) => PlayerCommand::Play { pane, run: Arc::new(run) },
        Err(e) => {
            warn!(error = %e, %algorithm, "run fetch failed");
            PlayerCommand::Error { pane, message: e.to_string() }
        }
    }
}
