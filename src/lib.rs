//! Tektris (workspace facade crate).
//!
//! Re-exports the workspace crates as `tektris::{core,input,term,types}` and
//! hosts the pieces of the terminal binary that can be tested without a
//! terminal: argument parsing ([`cli`]) and the event-driven game controller
//! ([`session`]).

pub mod cli;
pub mod session;

pub use tektris_core as core;
pub use tektris_input as input;
pub use tektris_term as term;
pub use tektris_types as types;
