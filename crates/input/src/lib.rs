//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] commands and
//! the two host-level keys (quit, restart). There is no auto-repeat handling:
//! each key press is one command, matching the engine's one-command-at-a-time
//! contract.

pub mod map;

pub use tektris_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
