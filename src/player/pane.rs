//! Pane identity and state.

#[cfg(test)]
#[path = "pane_test.rs"]
mod tests;

use std::fmt;
use std::sync::Arc;

use crate::services::dispatch::Run;
use crate::sort::Algorithm;

/// A visualization surface: the single view, or one grid cell per
/// algorithm in "run all" mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaneId {
    Single,
    Grid(Algorithm),
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => f.write_str("single"),
            Self::Grid(algorithm) => f.write_str(algorithm.label()),
        }
    }
}

/// What a pane currently shows and which playback may draw into it.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneState {
    pub sequence: Vec<i64>,
    pub run: Option<Arc<Run>>,
    /// Bumped whenever the pane's content is replaced.
    pub generation: u64,
    /// Set when the pane was cleared or errored; no playback owns it.
    pub cancelled: bool,
}

impl PaneState {
    #[must_use]
    pub fn idle(sequence: Vec<i64>, generation: u64) -> Self {
        Self { sequence, run: None, generation, cancelled: true }
    }

    /// True if a playback started under `generation` may still render here.
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        !self.cancelled && self.generation == generation
    }
}
