//! Falling-block board engine with a reward signal (workspace facade crate).
//!
//! Re-exports the workspace crates under short paths:
//! `rl_tetris::{core, engine, types}`.

pub use rl_tetris_core as core;
pub use rl_tetris_engine as engine;
pub use rl_tetris_types as types;
