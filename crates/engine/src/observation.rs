//! Feature extraction for agents
//!
//! An observation is `width + 2` numbers: the stack height of every column
//! (locked cells only, the falling piece is left out) followed by the active
//! piece's `x` and `y`. It is computed from a snapshot, never from the live
//! grid, so extracting it cannot disturb the session.

use serde::{Deserialize, Serialize};

use crate::core::GameSnapshot;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observation {
    /// Rows from the floor up to the highest locked cell, per column.
    pub column_heights: Vec<u32>,
    /// Active piece position; `(0, 0)` when no piece is falling.
    pub piece_x: i32,
    pub piece_y: i32,
}

impl Observation {
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        let column_heights = (0..snapshot.width)
            .map(|x| {
                (0..snapshot.height)
                    .find(|&y| snapshot.locked_cell(x, y))
                    .map_or(0, |top| (snapshot.height - top) as u32)
            })
            .collect();

        let (piece_x, piece_y) = snapshot
            .active
            .as_ref()
            .map_or((0, 0), |active| (active.x, active.y));

        Self {
            column_heights,
            piece_x,
            piece_y,
        }
    }

    /// Number of features
    pub fn feature_count(&self) -> usize {
        self.column_heights.len() + 2
    }

    /// Flatten into `out` (cleared first), heights then x then y
    pub fn write_features(&self, out: &mut Vec<f32>) {
        out.clear();
        out.extend(self.column_heights.iter().map(|&h| h as f32));
        out.push(self.piece_x as f32);
        out.push(self.piece_y as f32);
    }

    pub fn to_features(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(self.feature_count());
        self.write_features(&mut out);
        out
    }
}
