//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management of Tektris.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same sequence of shapes
//! - **Testable**: every rule is covered by unit tests next to the code
//! - **Host driven**: no clocks, threads, or callbacks; the host calls commands
//!   and drains events
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size 2D container of optional cells
//! - [`block`]: a single block with identity, position and color
//! - [`shape`]: tetromino layouts, translation and rotation
//! - [`rng`]: seeded LCG used by the random shape factory
//! - [`config`]: board size, spawn positions and scoring constants
//! - [`tektris`]: the engine state machine
//!
//! # Game Rules
//!
//! - **Uniform randomizer**: every shape kind is equally likely on every spawn
//! - **No wall kicks**: a rotation that does not fit is rejected
//! - **Two-step landing**: a hard drop only positions the shape; the next fall settles it
//! - **Scoring**: `lines * 10 * level`; level `n` ends at `n * 500` points
//!
//! # Example
//!
//! ```
//! use tektris_core::{EngineConfig, Tektris};
//! use tektris_core::types::{GameAction, GameEvent};
//!
//! let mut game = Tektris::new(EngineConfig::default(), 12345);
//! game.begin_game();
//! assert_eq!(game.drain_events(), vec![GameEvent::DidBegin]);
//!
//! game.new_shape();
//! game.apply_action(GameAction::Drop);
//! game.apply_action(GameAction::Fall);
//!
//! let events = game.drain_events();
//! assert_eq!(events, vec![GameEvent::ShapeDidDrop, GameEvent::ShapeDidLand]);
//! assert!(game.remove_completed_lines().is_empty());
//! ```

pub mod block;
pub mod config;
pub mod grid;
pub mod rng;
pub mod shape;
pub mod tektris;

pub use tektris_types as types;

// Re-export commonly used types for convenience
pub use block::{Block, BlockId};
pub use config::EngineConfig;
pub use grid::Grid;
pub use rng::SimpleRng;
pub use shape::{get_layout, Shape};
pub use tektris::{LineClear, Tektris};
