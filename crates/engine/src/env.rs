//! Step/reset environment over one session
//!
//! Implements the reward contract on behalf of agents: the accumulator is
//! zeroed immediately before each command, so the reward returned by
//! [`Environment::step`] is exactly what that command (plus any scheduled
//! gravity drop) earned.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameConfig, GameSnapshot, GameState};
use crate::observation::Observation;
use crate::types::GameAction;

/// External gravity: one extra soft drop after every `every` agent steps.
///
/// `every == 0` disables it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropSchedule {
    every: u32,
    elapsed: u32,
}

impl DropSchedule {
    pub fn every(steps: u32) -> Self {
        Self {
            every: steps,
            elapsed: 0,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    /// Advance by one step; true when a drop is due
    pub fn tick(&mut self) -> bool {
        if self.every == 0 {
            return false;
        }
        self.elapsed += 1;
        if self.elapsed >= self.every {
            self.elapsed = 0;
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed = 0;
    }
}

/// Result of one environment step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub observation: Observation,
    /// Reward earned by this step alone
    pub reward: f64,
    /// The game ended during this step
    pub done: bool,
    pub lines_cleared: u32,
}

#[derive(Debug, Clone)]
pub struct Environment {
    state: GameState,
    schedule: DropSchedule,
    snapshot: GameSnapshot,
}

impl Environment {
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            schedule: DropSchedule::disabled(),
            snapshot: GameSnapshot::default(),
        }
    }

    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(GameState::with_config(config)?))
    }

    pub fn with_schedule(mut self, schedule: DropSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Latest snapshot taken by `reset`/`step`
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Start a new game and return the first observation
    pub fn reset(&mut self) -> Observation {
        self.state.new_game();
        self.state.reset_reward();
        self.state.take_last_event();
        self.schedule.reset();
        self.observe()
    }

    /// Apply one command and report what it earned
    pub fn step(&mut self, action: GameAction) -> StepResult {
        self.state.reset_reward();
        self.state.apply_action(action);
        let mut lines_cleared = self.lines_from_last_lock();

        if self.schedule.tick() && !self.state.game_over() {
            self.state.soft_drop();
            lines_cleared += self.lines_from_last_lock();
        }

        StepResult {
            observation: self.observe(),
            reward: self.state.reward(),
            done: self.state.game_over(),
            lines_cleared,
        }
    }

    fn lines_from_last_lock(&mut self) -> u32 {
        self.state
            .take_last_event()
            .map_or(0, |event| event.lines_cleared)
    }

    fn observe(&mut self) -> Observation {
        self.state.snapshot_into(&mut self.snapshot);
        Observation::from_snapshot(&self.snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schedule_fires_every_n() {
        let mut schedule = DropSchedule::every(3);
        let fired: Vec<bool> = (0..6).map(|_| schedule.tick()).collect();
        assert_eq!(fired, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn test_disabled_schedule_never_fires() {
        let mut schedule = DropSchedule::disabled();
        assert!((0..10).all(|_| !schedule.tick()));
    }

    #[test]
    fn test_step_reports_only_its_own_reward() {
        let mut env = Environment::new(GameState::new(3));
        env.reset();
        let first = env.step(GameAction::MoveLeft);
        let second = env.step(GameAction::MoveLeft);
        assert_eq!(first.reward, -0.5);
        assert_eq!(second.reward, -0.5);
        assert!(!second.done);
    }
}
