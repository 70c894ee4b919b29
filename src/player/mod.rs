//! Animation player: per-pane step playback driven by a fixed tick.
//!
//! ARCHITECTURE
//! ============
//! - `pane`: pane identity and per-pane state (sequence, run, generation).
//! - `render`: the `Renderer` seam and a plain-text terminal renderer.
//! - `scheduler`: the cooperative tick loop that advances every playback.
//! - `source`: where runs come from, in-process or over HTTP.
//! - `session`: wires a source to a player for one CLI invocation.
//!
//! Playbacks never share mutable state. Each one carries the generation it
//! was started under and stops the moment its pane moves on.

pub mod pane;
pub mod render;
pub mod scheduler;
pub mod session;
pub mod source;

pub use render::TerminalRenderer;
pub use session::Plan;
pub use source::{HttpSource, LocalSource, RunSource, SourceError};
