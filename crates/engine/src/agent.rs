//! Agent boundary - who picks the next command, and the loop that asks them
//!
//! The engine never chooses actions itself. An [`Agent`] reads an
//! observation and returns one of the movement commands; [`run_episode`]
//! feeds it until the game ends or a step cap is hit.

use serde::{Deserialize, Serialize};

use crate::core::SimpleRng;
use crate::env::{Environment, StepResult};
use crate::observation::Observation;
use crate::types::GameAction;

pub trait Agent {
    /// Choose the next command
    fn act(&mut self, observation: &Observation) -> GameAction;

    /// Called with the outcome of every step (learning agents train here)
    fn observe(&mut self, _step: &StepResult) {}
}

/// Uniform choice among the four movement commands
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: SimpleRng,
}

impl RandomAgent {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn act(&mut self, _observation: &Observation) -> GameAction {
        let index = self.rng.next_range(GameAction::MOVEMENT.len() as u32) as usize;
        GameAction::MOVEMENT[index]
    }
}

/// Totals for one episode
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub steps: u32,
    pub total_reward: f64,
    pub lines_cleared: u32,
    pub pieces: u32,
    /// Ended by game over rather than the step cap
    pub game_over: bool,
    pub highscore: u32,
}

/// Reset `env` and let `agent` play until game over or `max_steps` (0 = no cap)
pub fn run_episode<A: Agent + ?Sized>(
    env: &mut Environment,
    agent: &mut A,
    max_steps: u32,
) -> EpisodeSummary {
    run_episode_with(env, agent, max_steps, |_, _| {})
}

/// Like [`run_episode`], calling `on_step` after every step
pub fn run_episode_with<A, F>(
    env: &mut Environment,
    agent: &mut A,
    max_steps: u32,
    mut on_step: F,
) -> EpisodeSummary
where
    A: Agent + ?Sized,
    F: FnMut(&StepResult, &Environment),
{
    let pieces_before = env.state().pieces_spawned();
    let mut observation = env.reset();
    let mut summary = EpisodeSummary {
        game_over: env.state().game_over(),
        ..EpisodeSummary::default()
    };

    while !summary.game_over && (max_steps == 0 || summary.steps < max_steps) {
        let action = agent.act(&observation);
        let step = env.step(action);

        summary.steps += 1;
        summary.total_reward += step.reward;
        summary.lines_cleared += step.lines_cleared;
        summary.game_over = step.done;

        agent.observe(&step);
        on_step(&step, env);
        observation = step.observation;
    }

    summary.pieces = env.state().pieces_spawned().wrapping_sub(pieces_before);
    summary.highscore = env.state().highscore();
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    struct Scripted(Vec<GameAction>);

    impl Agent for Scripted {
        fn act(&mut self, _observation: &Observation) -> GameAction {
            self.0.pop().unwrap_or(GameAction::SoftDrop)
        }
    }

    #[test]
    fn test_random_agent_only_issues_movement() {
        let mut agent = RandomAgent::new(5);
        let obs = Observation {
            column_heights: vec![0; 10],
            piece_x: 3,
            piece_y: 0,
        };
        for _ in 0..200 {
            assert_ne!(agent.act(&obs), GameAction::NewGame);
        }
    }

    #[test]
    fn test_step_cap_ends_episode() {
        let mut env = Environment::new(GameState::new(9));
        let mut agent = Scripted(Vec::new());
        let summary = run_episode(&mut env, &mut agent, 5);
        assert_eq!(summary.steps, 5);
        assert!(!summary.game_over);
        assert_eq!(summary.pieces, 1);
    }

    #[test]
    fn test_dropping_forever_ends_in_game_over() {
        let mut env = Environment::new(GameState::new(9));
        let mut agent = Scripted(Vec::new());
        let summary = run_episode(&mut env, &mut agent, 0);
        assert!(summary.game_over);
        assert!(summary.pieces > 1);
        assert!(summary.total_reward < 0.0);
    }
}
