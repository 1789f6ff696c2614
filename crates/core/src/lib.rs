//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the board/game-state engine: the grid, the active
//! piece, collision detection, rotation legality, line clearing, scoring and
//! the reward accumulator read by learning agents. It has **no** dependency on
//! rendering, input, timers or I/O:
//!
//! - **Deterministic**: the same seed replays the same piece sequence
//! - **Synchronous**: every command runs to completion; nothing suspends
//! - **Self-contained**: a [`GameState`] is an ordinary value, so any number of
//!   independent sessions can exist side by side
//!
//! # Module Structure
//!
//! - [`board`]: boolean grid, piece placement and full-row removal
//! - [`pieces`]: the seven shape matrices, rotation, the active piece
//! - [`collision`]: pure collision predicates and rotation legality
//! - [`game_state`]: the session state machine and its commands
//! - [`config`]: board size, seed and reward magnitudes
//! - [`rng`]: seeded piece selection
//! - [`snapshot`]: immutable copies handed to drivers
//!
//! # Example
//!
//! ```
//! use rl_tetris_core::GameState;
//! use rl_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.new_game();
//!
//! game.reset_reward();
//! game.apply_action(GameAction::MoveLeft);
//! assert_eq!(game.reward(), -0.5);
//!
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::SoftDrop);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, 0);
//! assert!(!snap.game_over);
//! ```
//!
//! # Timing
//!
//! There is none. Gravity is whoever calls
//! [`GameState::soft_drop`](game_state::GameState::soft_drop) on a schedule.

pub mod board;
pub mod collision;
pub mod config;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use rl_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::try_rotate;
pub use config::{ConfigError, GameConfig, RewardTable};
pub use game_state::GameState;
pub use pieces::{get_shape, Piece, Shape};
pub use rng::{Randomizer, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
