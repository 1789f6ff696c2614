//! Game state module - one complete session
//!
//! Ties the board, the active piece, the randomizer and the reward
//! accumulator together behind five commands (`new_game`, `move_left`,
//! `move_right`, `soft_drop`, `rotate`) and one query (`snapshot`).
//!
//! Every command follows the same pattern: evaluate the collision predicates
//! against the current grid, and only then lift the piece out, move it, and
//! put it back. Commands are synchronous; nothing here owns a timer.

use crate::collision::{
    collides_down, collides_left, collides_right, hits_bottom, hits_left_boundary,
    hits_right_boundary, overlaps, try_rotate,
};
use crate::config::{ConfigError, GameConfig};
use crate::pieces::Piece;
use crate::rng::Randomizer;
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{GameAction, LockEvent, Phase};
use crate::Board;

/// Complete game session
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Piece>,
    randomizer: Randomizer,
    phase: Phase,
    /// Lines cleared in the current game.
    score: u32,
    /// Best `score` of any finished game in this session.
    highscore: u32,
    /// Reward accumulator; only drivers reset it.
    reward: f64,
    /// Last lock event (consumed by drivers).
    last_event: Option<LockEvent>,
    pieces_spawned: u32,
    games_played: u32,
}

impl GameState {
    /// Create an idle session on the default 10x20 board with the given seed
    pub fn new(seed: u32) -> Self {
        let config = GameConfig::default().with_seed(seed);
        Self::build(config, Randomizer::uniform(seed))
    }

    /// Create an idle session from a configuration
    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        Self::with_randomizer(config, Randomizer::uniform(config.seed))
    }

    /// Create an idle session with an explicit piece source (`config.seed` is ignored)
    pub fn with_randomizer(
        config: GameConfig,
        randomizer: Randomizer,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, randomizer))
    }

    fn build(config: GameConfig, randomizer: Randomizer) -> Self {
        Self {
            config,
            board: Board::new(config.width, config.height),
            active: None,
            randomizer,
            phase: Phase::Idle,
            score: 0,
            highscore: 0,
            reward: 0.0,
            last_event: None,
            pieces_spawned: 0,
            games_played: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable grid access for setting up scenarios.
    ///
    /// The active piece's cells are part of the grid; editing them desyncs
    /// the piece from its footprint.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Current value of the reward accumulator
    pub fn reward(&self) -> f64 {
        self.reward
    }

    /// Zero the reward accumulator
    pub fn reset_reward(&mut self) {
        self.reward = 0.0;
    }

    /// Read and zero the reward accumulator
    pub fn take_reward(&mut self) -> f64 {
        std::mem::take(&mut self.reward)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_rows_into(&mut out.board);

        out.width = self.board.width();
        out.height = self.board.height();
        out.active = self.active.map(ActiveSnapshot::from);
        out.phase = self.phase;
        out.game_over = self.game_over();
        out.score = self.score;
        out.highscore = self.highscore;
        out.reward = self.reward;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Reset the grid and score, then spawn the first piece.
    ///
    /// `highscore` keeps the best score seen so far, including the game this
    /// call abandons. Returns false if the first spawn already ends the game.
    pub fn new_game(&mut self) -> bool {
        self.highscore = self.highscore.max(self.score);
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.last_event = None;
        self.games_played = self.games_played.wrapping_add(1);
        self.spawn_piece()
    }

    /// Spawn a new piece, or end the game if it cannot enter the grid.
    ///
    /// The piece is probed one row above the grid; if it would collide moving
    /// down to row 0, or any of its cells at row 0 is already taken, the game
    /// is over and nothing is placed.
    fn spawn_piece(&mut self) -> bool {
        let kind = self.randomizer.draw();
        let probe = Piece::spawn(kind, self.board.width());
        let piece = Piece { y: 0, ..probe };

        if collides_down(&probe, &self.board) || overlaps(&piece, &self.board) {
            self.enter_game_over();
            return false;
        }

        self.board.place_piece(&piece);
        self.active = Some(piece);
        self.phase = Phase::Falling;
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        true
    }

    fn enter_game_over(&mut self) {
        self.active = None;
        self.phase = Phase::GameOver;
        self.reward -= self.config.rewards.game_over;
        self.highscore = self.highscore.max(self.score);
        self.score = 0;
    }

    /// Active piece, if commands are currently accepted
    fn playable_piece(&self) -> Option<Piece> {
        match self.phase {
            Phase::Falling => self.active,
            Phase::Idle | Phase::GameOver => None,
        }
    }

    /// Lift `from` off the grid and put `to` down in its place
    fn relocate(&mut self, from: Piece, to: Piece) {
        self.board.clear_piece(&from);
        self.board.place_piece(&to);
        self.active = Some(to);
    }

    /// Move one column left; a blocked move costs the illegal-move penalty
    pub fn move_left(&mut self) -> bool {
        self.shift(-1)
    }

    /// Move one column right; a blocked move costs the illegal-move penalty
    pub fn move_right(&mut self) -> bool {
        self.shift(1)
    }

    fn shift(&mut self, dx: i32) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        // Boundaries are judged on the destination, block contact on the current cells.
        let moved = active.shifted(dx, 0);
        let blocked = if dx < 0 {
            hits_left_boundary(&moved) || collides_left(&active, &self.board)
        } else {
            hits_right_boundary(&moved, &self.board) || collides_right(&active, &self.board)
        };

        if blocked {
            self.reward -= self.config.rewards.illegal_move;
            return false;
        }

        self.relocate(active, moved);
        self.reward -= self.config.rewards.move_cost;
        true
    }

    /// Move one row down, or lock the piece if it rests on the floor or the stack.
    ///
    /// Returns true only when the piece moved; a lock is reported through
    /// [`GameState::take_last_event`].
    pub fn soft_drop(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        if hits_bottom(&active, &self.board) || collides_down(&active, &self.board) {
            self.reward += self.config.rewards.floor;
            self.lock_piece();
            return false;
        }

        self.relocate(active, active.shifted(0, 1));
        true
    }

    /// Rotate clockwise if legal. Illegal rotations change nothing and cost nothing.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.playable_piece() else {
            return false;
        };

        match try_rotate(&active, &self.board) {
            Some(rotated) => {
                self.relocate(active, rotated);
                true
            }
            None => false,
        }
    }

    /// Make the active piece permanent, clear full rows, and spawn the next piece
    fn lock_piece(&mut self) {
        // The piece's cells are already on the grid; dropping the handle locks it.
        if self.active.take().is_none() {
            return;
        }

        let lines_cleared = self.board.clear_full_rows().len() as u32;
        self.score += lines_cleared;
        self.reward += self.config.rewards.line_clear * f64::from(lines_cleared);

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            lines_cleared,
            game_over: !spawned,
        });
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::NewGame => self.new_game(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
