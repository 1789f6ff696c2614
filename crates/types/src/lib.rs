//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behaviour beyond parsing and naming, so
//! they can be used by the engine, the agent harness and the CLI alike.
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (overridable through the game configuration):
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Reward Signal
//!
//! Every command adds to (or subtracts from) a single reward accumulator.
//! The reference magnitudes:
//!
//! | Constant | Value | Emitted when |
//! |----------|-------|--------------|
//! | `ILLEGAL_MOVE_PENALTY` | 10 | a left/right move is blocked (subtracted) |
//! | `MOVE_COST` | 0.5 | a left/right move succeeds (subtracted) |
//! | `FLOOR_REWARD` | 0.5 | a soft drop reaches the floor or the stack |
//! | `LINE_CLEAR_REWARD` | 100 | per cleared row |
//! | `GAME_OVER_PENALTY` | 100 | a spawn collides immediately (subtracted) |
//!
//! Rotation never touches the accumulator, legal or not.
//!
//! # Examples
//!
//! ```
//! use rl_tetris_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Catalogue index round trip
//! assert_eq!(PieceKind::from_index(PieceKind::L.index()), Some(PieceKind::L));
//!
//! // Parse game action
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Smallest accepted board width; the I piece is four cells wide.
pub const MIN_BOARD_WIDTH: usize = 4;

/// Smallest accepted board height; a vertical I piece is four cells tall.
pub const MIN_BOARD_HEIGHT: usize = 4;

/// Largest accepted board width; coordinates are `i32` and the grid is one flat buffer.
pub const MAX_BOARD_WIDTH: usize = 1024;

/// Largest accepted board height.
pub const MAX_BOARD_HEIGHT: usize = 1024;

/// Row a freshly spawned piece is probed at before it is placed at row 0.
pub const SPAWN_PROBE_Y: i32 = -1;

/// Penalty for a blocked left/right move.
pub const ILLEGAL_MOVE_PENALTY: f64 = 10.0;

/// Cost of a successful left/right move.
pub const MOVE_COST: f64 = 0.5;

/// Reward for a soft drop that reaches the floor (and locks the piece).
pub const FLOOR_REWARD: f64 = 0.5;

/// Reward per cleared row.
pub const LINE_CLEAR_REWARD: f64 = 100.0;

/// Penalty applied when a spawn collides immediately.
pub const GAME_OVER_PENALTY: f64 = 100.0;

/// The seven tetromino piece kinds, in catalogue order
///
/// - **I**: four in a row
/// - **O**: 2x2 square
/// - **J**: corner on the left
/// - **T**: T-shaped
/// - **L**: corner on the right
/// - **Z**: Z-shaped (mirror of S)
/// - **S**: S-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    J,
    T,
    L,
    Z,
    S,
}

impl PieceKind {
    /// All kinds in catalogue order (the order the randomizer indexes into).
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::J,
        PieceKind::T,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Position in the catalogue
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::J => 2,
            PieceKind::T => 3,
            PieceKind::L => 4,
            PieceKind::Z => 5,
            PieceKind::S => 6,
        }
    }

    /// Kind at a catalogue position, `None` past the end
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use rl_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "j" => Some(PieceKind::J),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "z" => Some(PieceKind::Z),
            "s" => Some(PieceKind::S),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::J => "j",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::Z => "z",
            PieceKind::S => "s",
        }
    }
}

/// Commands a driver (keyboard handler or agent) can issue
///
/// The first four are the movement commands an agent chooses from;
/// `NewGame` restarts the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one row down, locking it if it cannot move
    SoftDrop,
    /// Rotate piece 90° clockwise (if legal)
    Rotate,
    /// Reset the board and spawn a fresh piece
    NewGame,
}

impl GameAction {
    /// The movement commands, in the order agents index them.
    pub const MOVEMENT: [GameAction; 4] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::Rotate,
    ];

    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use rl_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("up"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" | "left" => Some(GameAction::MoveLeft),
            "moveright" | "right" => Some(GameAction::MoveRight),
            "softdrop" | "down" => Some(GameAction::SoftDrop),
            "rotate" | "up" => Some(GameAction::Rotate),
            "newgame" => Some(GameAction::NewGame),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::NewGame => "newGame",
        }
    }
}

/// Stable states of a session between commands
///
/// Spawning, locking and row clearing happen inside a single command and are
/// never observable from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    /// No game started yet
    Idle,
    /// A piece is falling and accepts commands
    Falling,
    /// Terminal until the next `NewGame`
    GameOver,
}

/// Event recorded when the active piece locks
///
/// Engine-internal; drivers take it after a soft drop to learn what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// The respawn after this lock collided immediately.
    pub game_over: bool,
}

/// A cell on the game board: `true` when occupied.
pub type Cell = bool;
