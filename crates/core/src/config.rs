//! Game configuration - board size, seed and reward magnitudes
//!
//! Everything here is plain data with `serde` support so drivers can load it
//! from a file. Defaults reproduce the reference game (10x20, seed 1, the
//! reward constants from `rl_tetris_types`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, FLOOR_REWARD, GAME_OVER_PENALTY, ILLEGAL_MOVE_PENALTY,
    LINE_CLEAR_REWARD, MAX_BOARD_HEIGHT, MAX_BOARD_WIDTH, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH,
    MOVE_COST,
};

/// Reward magnitudes; the engine applies the sign.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewardTable {
    /// Subtracted when a left/right move is blocked
    pub illegal_move: f64,
    /// Subtracted for each successful left/right move
    pub move_cost: f64,
    /// Added when a soft drop reaches the floor or the stack
    pub floor: f64,
    /// Added per cleared row
    pub line_clear: f64,
    /// Subtracted when a spawn collides immediately
    pub game_over: f64,
}

impl Default for RewardTable {
    fn default() -> Self {
        Self {
            illegal_move: ILLEGAL_MOVE_PENALTY,
            move_cost: MOVE_COST,
            floor: FLOOR_REWARD,
            line_clear: LINE_CLEAR_REWARD,
            game_over: GAME_OVER_PENALTY,
        }
    }
}

impl RewardTable {
    fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("illegal_move", self.illegal_move),
            ("move_cost", self.move_cost),
            ("floor", self.floor),
            ("line_clear", self.line_clear),
            ("game_over", self.game_over),
        ]
    }
}

/// Startup parameters of a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Seed for the piece randomizer
    pub seed: u32,
    pub rewards: RewardTable,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: 1,
            rewards: RewardTable::default(),
        }
    }
}

/// Rejected configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("board width {width} is below the minimum of {min}")]
    WidthTooSmall { width: usize, min: usize },
    #[error("board height {height} is below the minimum of {min}")]
    HeightTooSmall { height: usize, min: usize },
    #[error("board width {width} exceeds the maximum of {max}")]
    WidthTooLarge { width: usize, max: usize },
    #[error("board height {height} exceeds the maximum of {max}")]
    HeightTooLarge { height: usize, max: usize },
    #[error("reward `{name}` must be finite, got {value}")]
    NonFiniteReward { name: &'static str, value: f64 },
}

impl GameConfig {
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_rewards(mut self, rewards: RewardTable) -> Self {
        self.rewards = rewards;
        self
    }

    /// Check that every catalogue piece can spawn and rotate, that the grid
    /// stays addressable, and that rewards are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_BOARD_WIDTH {
            return Err(ConfigError::WidthTooSmall {
                width: self.width,
                min: MIN_BOARD_WIDTH,
            });
        }
        if self.height < MIN_BOARD_HEIGHT {
            return Err(ConfigError::HeightTooSmall {
                height: self.height,
                min: MIN_BOARD_HEIGHT,
            });
        }
        if self.width > MAX_BOARD_WIDTH {
            return Err(ConfigError::WidthTooLarge {
                width: self.width,
                max: MAX_BOARD_WIDTH,
            });
        }
        if self.height > MAX_BOARD_HEIGHT {
            return Err(ConfigError::HeightTooLarge {
                height: self.height,
                max: MAX_BOARD_HEIGHT,
            });
        }
        if let Some((name, value)) = self
            .rewards
            .entries()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(ConfigError::NonFiniteReward { name, value });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_rejects_small_board() {
        assert_eq!(
            GameConfig::default().with_size(3, 20).validate(),
            Err(ConfigError::WidthTooSmall { width: 3, min: 4 })
        );
        assert_eq!(
            GameConfig::default().with_size(10, 2).validate(),
            Err(ConfigError::HeightTooSmall { height: 2, min: 4 })
        );
    }

    #[test]
    fn test_rejects_oversized_board() {
        assert_eq!(
            GameConfig::default().with_size(usize::MAX, 20).validate(),
            Err(ConfigError::WidthTooLarge {
                width: usize::MAX,
                max: MAX_BOARD_WIDTH
            })
        );
        assert_eq!(
            GameConfig::default()
                .with_size(10, MAX_BOARD_HEIGHT + 1)
                .validate(),
            Err(ConfigError::HeightTooLarge {
                height: MAX_BOARD_HEIGHT + 1,
                max: MAX_BOARD_HEIGHT
            })
        );
        assert_eq!(
            GameConfig::default()
                .with_size(MAX_BOARD_WIDTH, MAX_BOARD_HEIGHT)
                .validate(),
            Ok(())
        );
    }

    #[test]
    fn test_rejects_non_finite_reward() {
        let rewards = RewardTable {
            line_clear: f64::INFINITY,
            ..RewardTable::default()
        };
        let err = GameConfig::default()
            .with_rewards(rewards)
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("line_clear"));
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"width": 8, "rewards": {"floor": 2.0}}"#).unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.height, 20);
        assert_eq!(config.rewards.floor, 2.0);
        assert_eq!(config.rewards.line_clear, 100.0);
    }
}
