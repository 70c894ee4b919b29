//! Domain services used by the HTTP routes and the player.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the sorting and generation logic so route handlers
//! stay focused on protocol translation.

pub mod dispatch;
pub mod generate;
