//! Terminal presentation for Tektris.
//!
//! The engine state is mapped into a small character [`Frame`] by [`GameView`]
//! (pure, unit-tested) and flushed to the terminal by [`TerminalRenderer`].
//! Each board cell is two characters wide to compensate for glyph aspect ratio.

pub mod frame;
pub mod game_view;
pub mod renderer;

pub use tektris_core as core;
pub use tektris_types as types;

pub use frame::{Frame, FrameCell};
pub use game_view::{render_lines, GameView};
pub use renderer::{block_color, encode_frame_into, TerminalRenderer};
