//! Rendering seam for the player.
//!
//! The scheduler only talks to `Renderer`; the terminal implementation
//! writes one line per event so interleaved panes stay readable.

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

use std::fmt::Write as _;
use std::io::Write;

use tracing::warn;

use super::pane::PaneId;
use crate::services::dispatch::Run;
use crate::sort::Step;

pub trait Renderer {
    /// Wipe every pane.
    fn clear(&mut self);
    /// Show a sequence with nothing highlighted.
    fn draw_sequence(&mut self, pane: PaneId, sequence: &[i64]);
    /// Show step `index` of `total`.
    fn draw_step(&mut self, pane: PaneId, step: &Step, index: usize, total: usize);
    /// Show elapsed time and complexity once a playback ends.
    fn draw_stats(&mut self, pane: PaneId, run: &Run);
    fn draw_error(&mut self, pane: PaneId, message: &str);
}

/// Line-oriented renderer over any writer. Highlighted values are wrapped
/// in brackets and steps that changed the sequence end with `*`.
pub struct TerminalRenderer<W: Write> {
    out: W,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, pane: PaneId, body: &str) {
        if let Err(e) = writeln!(self.out, "[{pane}] {body}").and_then(|()| self.out.flush()) {
            warn!(error = %e, %pane, "render write failed");
        }
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn clear(&mut self) {
        if let Err(e) = writeln!(self.out, "----") {
            warn!(error = %e, "render write failed");
        }
    }

    fn draw_sequence(&mut self, pane: PaneId, sequence: &[i64]) {
        self.line(pane, &format_sequence(sequence, &[]));
    }

    fn draw_step(&mut self, pane: PaneId, step: &Step, index: usize, total: usize) {
        let mut body = format!("{}/{total} {}", index + 1, format_sequence(step.sequence(), step.highlighted()));
        if step.mutated() {
            body.push_str(" *");
        }
        self.line(pane, &body);
    }

    fn draw_stats(&mut self, pane: PaneId, run: &Run) {
        self.line(pane, &format_stats(run));
    }

    fn draw_error(&mut self, pane: PaneId, message: &str) {
        self.line(pane, &format!("error: {message}"));
    }
}

/// `5 [3] [8] 1` for `[5, 3, 8, 1]` with positions 1 and 2 highlighted.
#[must_use]
pub fn format_sequence(sequence: &[i64], highlighted: &[usize]) -> String {
    let mut out = String::new();
    for (i, value) in sequence.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        if highlighted.contains(&i) {
            let _ = write!(out, "[{value}]");
        } else {
            let _ = write!(out, "{value}");
        }
    }
    out
}

#[must_use]
pub fn format_stats(run: &Run) -> String {
    format!(
        "done in {:.3} ms | time {} | space {}",
        run.execution_time * 1000.0,
        run.complexity.time,
        run.complexity.space
    )
}
