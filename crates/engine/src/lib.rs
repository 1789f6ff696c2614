//! Agent-facing harness around the core engine
//!
//! The core exposes commands and a reward accumulator; this crate packages
//! them the way a learning loop consumes them:
//!
//! - [`observation`]: fixed-length feature vector extracted from a snapshot
//! - [`env`]: `reset`/`step` environment that applies the read-and-zero
//!   reward contract, plus an external gravity schedule
//! - [`agent`]: the [`Agent`] trait, a random baseline and the episode loop
//!
//! ```
//! use rl_tetris_core::GameState;
//! use rl_tetris_engine::{run_episode, Environment, RandomAgent};
//!
//! let mut env = Environment::new(GameState::new(7));
//! let mut agent = RandomAgent::new(7);
//! let summary = run_episode(&mut env, &mut agent, 200);
//! assert!(summary.steps <= 200);
//! ```

pub mod agent;
pub mod env;
pub mod observation;

pub use rl_tetris_core as core;
pub use rl_tetris_types as types;

pub use agent::{run_episode, run_episode_with, Agent, EpisodeSummary, RandomAgent};
pub use env::{DropSchedule, Environment, StepResult};
pub use observation::Observation;
