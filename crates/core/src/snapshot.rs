use serde::{Deserialize, Serialize};

use crate::pieces::Piece;
use crate::types::{Cell, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Vec<Vec<bool>>,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape.to_rows(),
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Whether the board cell (x, y) is covered by this piece
    pub fn covers(&self, x: usize, y: usize) -> bool {
        let col = x as i32 - self.x;
        let row = y as i32 - self.y;
        if col < 0 || row < 0 {
            return false;
        }
        self.shape
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
            .unwrap_or(false)
    }
}

/// Immutable copy of everything a driver may read
///
/// `board` includes the active piece's cells, exactly as the grid holds them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub board: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    pub phase: Phase,
    pub game_over: bool,
    pub score: u32,
    pub highscore: u32,
    pub reward: f64,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = BOARD_WIDTH;
        self.height = BOARD_HEIGHT;
        self.board.clear();
        self.board
            .resize_with(BOARD_HEIGHT, || vec![false; BOARD_WIDTH]);
        self.active = None;
        self.phase = Phase::Idle;
        self.game_over = false;
        self.score = 0;
        self.highscore = 0;
        self.reward = 0.0;
    }

    /// Board cells that belong to the locked stack (active piece excluded)
    pub fn locked_cell(&self, x: usize, y: usize) -> bool {
        let occupied = self
            .board
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false);
        occupied && !self.active.as_ref().is_some_and(|a| a.covers(x, y))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            board: Vec::new(),
            active: None,
            phase: Phase::Idle,
            game_over: false,
            score: 0,
            highscore: 0,
            reward: 0.0,
        };
        s.clear();
        s
    }
}
