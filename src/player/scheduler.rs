//! Cooperative playback scheduler.
//!
//! DESIGN
//! ======
//! One loop owns every pane and every playback. Each tick advances every
//! active `PlaybackTask` by one step, so panes run side by side and a long
//! trace never holds up a short one. Commands arrive over an `mpsc` channel
//! and are applied between ticks.
//!
//! CANCELLATION
//! ============
//! Generation tokens come from one counter shared by all panes. `generate`
//! and `fail` mark panes cancelled, `play` starts a fresh generation on its
//! pane. A task whose token no longer matches its pane is dropped before it
//! renders anything.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod tests;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use super::pane::{PaneId, PaneState};
use super::render::Renderer;
use crate::services::dispatch::Run;

/// Messages accepted by `Player::run`.
#[derive(Debug, Clone)]
pub enum PlayerCommand {
    /// New input; clears every pane.
    Generate(Vec<i64>),
    Play { pane: PaneId, run: Arc<Run> },
    Error { pane: PaneId, message: String },
    Shutdown,
}

/// Outcome of advancing a playback by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Running,
    Finished,
    Superseded,
}

/// A cursor into the run its pane was given under `generation`.
#[derive(Debug)]
pub struct PlaybackTask {
    pane: PaneId,
    generation: u64,
    cursor: usize,
}

impl PlaybackTask {
    /// Render the next step, or the statistics once the steps run out.
    pub fn advance<R: Renderer>(&mut self, panes: &mut HashMap<PaneId, PaneState>, renderer: &mut R) -> Advance {
        let Some(state) = panes.get_mut(&self.pane) else {
            return Advance::Superseded;
        };
        let Some(run) = state.run.clone().filter(|_| state.is_current(self.generation)) else {
            return Advance::Superseded;
        };

        if let Some(step) = run.steps.get(self.cursor) {
            renderer.draw_step(self.pane, step, self.cursor, run.steps.len());
            state.sequence.clear();
            state.sequence.extend_from_slice(step.sequence());
            self.cursor += 1;
            Advance::Running
        } else {
            renderer.draw_stats(self.pane, &run);
            Advance::Finished
        }
    }
}

pub struct Player<R> {
    period: Duration,
    renderer: R,
    input: Vec<i64>,
    panes: HashMap<PaneId, PaneState>,
    tasks: Vec<PlaybackTask>,
    last_generation: u64,
}

impl<R: Renderer> Player<R> {
    /// `tick` is clamped to at least one millisecond.
    pub fn new(tick: Duration, renderer: R) -> Self {
        Self {
            period: tick.max(Duration::from_millis(1)),
            renderer,
            input: Vec::new(),
            panes: HashMap::new(),
            tasks: Vec::new(),
            last_generation: 0,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.last_generation += 1;
        self.last_generation
    }

    /// Replace the input: every playback stops, grid panes go away, and the
    /// single pane shows the new sequence.
    pub fn generate(&mut self, sequence: Vec<i64>) {
        let generation = self.next_generation();
        self.panes.retain(|id, _| *id == PaneId::Single);
        self.panes
            .insert(PaneId::Single, PaneState::idle(sequence.clone(), generation));
        self.drop_stale_tasks();

        self.renderer.clear();
        self.renderer.draw_sequence(PaneId::Single, &sequence);
        self.input = sequence;
    }

    /// Start animating `run` in `pane`, superseding whatever played there.
    pub fn play(&mut self, pane: PaneId, run: Arc<Run>) {
        let generation = self.next_generation();
        let input = self.input.clone();
        let state = self
            .panes
            .entry(pane)
            .or_insert_with(|| PaneState::idle(Vec::new(), generation));
        state.sequence = input;
        state.run = Some(Arc::clone(&run));
        state.generation = generation;
        state.cancelled = false;
        self.renderer.draw_sequence(pane, &state.sequence);
        self.drop_stale_tasks();

        debug!(%pane, generation, steps = run.steps.len(), "playback started");
        self.tasks.push(PlaybackTask { pane, generation, cursor: 0 });
    }

    /// Show `message` in `pane` in place of an animation.
    pub fn fail(&mut self, pane: PaneId, message: &str) {
        let generation = self.next_generation();
        let input = self.input.clone();
        let state = self
            .panes
            .entry(pane)
            .or_insert_with(|| PaneState::idle(input, generation));
        state.run = None;
        state.generation = generation;
        state.cancelled = true;
        self.drop_stale_tasks();
        self.renderer.draw_error(pane, message);
    }

    fn drop_stale_tasks(&mut self) {
        let panes = &self.panes;
        self.tasks.retain(|task| {
            let live = panes.get(&task.pane).is_some_and(|p| p.is_current(task.generation));
            if !live {
                debug!(pane = %task.pane, generation = task.generation, "playback superseded");
            }
            live
        });
    }

    /// Advance every playback by one step. Returns how many are still
    /// running.
    pub fn tick(&mut self) -> usize {
        let Self { panes, tasks, renderer, .. } = self;
        tasks.retain_mut(|task| match task.advance(panes, renderer) {
            Advance::Running => true,
            Advance::Finished => {
                debug!(pane = %task.pane, steps = task.cursor, "playback finished");
                false
            }
            Advance::Superseded => {
                debug!(pane = %task.pane, generation = task.generation, "playback superseded");
                false
            }
        });
        tasks.len()
    }

    /// Apply one command. Returns `false` on `Shutdown`.
    pub fn apply(&mut self, command: PlayerCommand) -> bool {
        match command {
            PlayerCommand::Generate(sequence) => self.generate(sequence),
            PlayerCommand::Play { pane, run } => self.play(pane, run),
            PlayerCommand::Error { pane, message } => self.fail(pane, &message),
            PlayerCommand::Shutdown => return false,
        }
        true
    }

    #[cfg(test)]
    pub fn pane(&self, id: PaneId) -> Option<&PaneState> {
        self.panes.get(&id)
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.tasks.len()
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Drive playback until `Shutdown`, or until the channel closes and
    /// nothing is left to animate. Hands the renderer back.
    pub async fn run(mut self, mut commands: mpsc::Receiver<PlayerCommand>) -> R {
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut open = true;

        loop {
            tokio::select! {
                maybe_command = commands.recv(), if open => {
                    match maybe_command {
                        Some(command) => {
                            if !self.apply(command) {
                                break;
                            }
                        }
                        None => open = false,
                    }
                }
                _ = ticker.tick() => {
                    self.tick();
                }
            }
            if !open && self.active() == 0 {
                break;
            }
        }

        self.renderer
    }
}
