//! Pieces module - tetromino shape matrices and the active piece
//!
//! A shape is a small boolean matrix (at most 4x4) where `true` marks an
//! occupied cell of the piece's local bounding box. The seven catalogue
//! templates are immutable; rotating produces a new matrix.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, SPAWN_PROBE_Y};

/// Largest side of any shape bounding box
pub const MAX_SHAPE_SIDE: usize = 4;

/// Local (row, col) offsets of the occupied cells of a shape
pub type ShapeCells = ArrayVec<(usize, usize), { MAX_SHAPE_SIDE * MAX_SHAPE_SIDE }>;

const X: bool = true;
const E: bool = false;

/// Boolean shape matrix with its bounding-box size
///
/// Cells outside `height x width` are always `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
    width: u8,
    height: u8,
}

const I_SHAPE: Shape = Shape::template([[X, X, X, X], [E; 4], [E; 4], [E; 4]], 4, 1);
const O_SHAPE: Shape = Shape::template([[X, X, E, E], [X, X, E, E], [E; 4], [E; 4]], 2, 2);
const J_SHAPE: Shape = Shape::template([[X, E, E, E], [X, X, X, E], [E; 4], [E; 4]], 3, 2);
const T_SHAPE: Shape = Shape::template([[E, X, E, E], [X, X, X, E], [E; 4], [E; 4]], 3, 2);
const L_SHAPE: Shape = Shape::template([[E, E, X, E], [X, X, X, E], [E; 4], [E; 4]], 3, 2);
const Z_SHAPE: Shape = Shape::template([[X, X, E, E], [E, X, X, E], [E; 4], [E; 4]], 3, 2);
const S_SHAPE: Shape = Shape::template([[E, X, X, E], [X, X, E, E], [E; 4], [E; 4]], 3, 2);

/// Get the catalogue template for a piece kind
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::S => S_SHAPE,
    }
}

impl Shape {
    const fn template(
        rows: [[bool; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE],
        width: u8,
        height: u8,
    ) -> Self {
        Self {
            rows,
            width,
            height,
        }
    }

    /// Build a shape from explicit rows.
    ///
    /// Returns `None` for empty, ragged, or oversized input.
    pub fn from_rows(rows: &[Vec<bool>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height > MAX_SHAPE_SIDE || width == 0 || width > MAX_SHAPE_SIDE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut out = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in rows.iter().enumerate() {
            out[r][..width].copy_from_slice(row);
        }
        Some(Self {
            rows: out,
            width: width as u8,
            height: height as u8,
        })
    }

    /// Bounding-box width in cells
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Bounding-box height in cells
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Whether the local cell is occupied (`false` outside the box)
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height() && col < self.width() && self.rows[row][col]
    }

    /// Occupied cells as local (row, col) offsets, row-major
    pub fn cells(&self) -> ShapeCells {
        let mut cells = ShapeCells::new();
        for row in 0..self.height() {
            for col in 0..self.width() {
                if self.rows[row][col] {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    /// Lowest occupied row in a column
    pub fn lowest_in_column(&self, col: usize) -> Option<usize> {
        (0..self.height()).rev().find(|&row| self.get(row, col))
    }

    /// Leftmost occupied column in a row
    pub fn leftmost_in_row(&self, row: usize) -> Option<usize> {
        (0..self.width()).find(|&col| self.get(row, col))
    }

    /// Rightmost occupied column in a row
    pub fn rightmost_in_row(&self, row: usize) -> Option<usize> {
        (0..self.width()).rev().find(|&col| self.get(row, col))
    }

    /// Rotate 90° clockwise: transpose, then reverse each row.
    ///
    /// Width and height swap for non-square shapes.
    pub fn rotated(&self) -> Self {
        let (h, w) = (self.height(), self.width());
        let mut rows = [[false; MAX_SHAPE_SIDE]; MAX_SHAPE_SIDE];
        for (r, row) in self.rows.iter().enumerate().take(h) {
            for (c, &cell) in row.iter().enumerate().take(w) {
                rows[c][h - 1 - r] = cell;
            }
        }
        Self {
            rows,
            width: self.height,
            height: self.width,
        }
    }

    /// Rows of the bounding box as owned vectors
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows[..self.height()]
            .iter()
            .map(|row| row[..self.width()].to_vec())
            .collect()
    }
}

/// The active falling piece
///
/// `(x, y)` is the top-left corner of the shape's bounding box in board
/// coordinates. `y` is `-1` only while a spawn is being probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece of `kind` at the spawn probe position for a board of `board_width`
    ///
    /// Horizontally centred: `x = floor((board_width - shape width) / 2)`.
    pub fn spawn(kind: PieceKind, board_width: usize) -> Self {
        let shape = get_shape(kind);
        let x = (board_width as i32 - shape.width() as i32).div_euclid(2);
        Self {
            kind,
            shape,
            x,
            y: SPAWN_PROBE_Y,
        }
    }

    /// Absolute board coordinates (x, y) of every occupied cell
    pub fn board_cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (px, py) = (self.x, self.y);
        self.shape
            .cells()
            .into_iter()
            .map(move |(row, col)| (px + col as i32, py + row as i32))
    }

    /// Same piece, shifted
    pub fn shifted(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same position, shape rotated clockwise
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated(),
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(get_shape(kind).cells().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn test_rotate_t_clockwise() {
        let rotated = get_shape(PieceKind::T).rotated();
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert_eq!(
            rotated.to_rows(),
            vec![vec![true, false], vec![true, true], vec![true, false]]
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[vec![true; 5]]).is_none());
        assert!(Shape::from_rows(&[vec![true, true], vec![true]]).is_none());
        assert_eq!(
            Shape::from_rows(&[vec![true, true], vec![true, true]]),
            Some(get_shape(PieceKind::O))
        );
    }

    #[test]
    fn test_spawn_is_centred() {
        assert_eq!(Piece::spawn(PieceKind::I, 10).x, 3);
        assert_eq!(Piece::spawn(PieceKind::O, 10).x, 4);
        assert_eq!(Piece::spawn(PieceKind::T, 10).x, 3);
        assert_eq!(Piece::spawn(PieceKind::I, 10).y, SPAWN_PROBE_Y);
    }

    #[test]
    fn test_column_and_row_extremes() {
        let s = get_shape(PieceKind::S);
        assert_eq!(s.lowest_in_column(0), Some(1));
        assert_eq!(s.lowest_in_column(2), Some(0));
        assert_eq!(s.leftmost_in_row(0), Some(1));
        assert_eq!(s.rightmost_in_row(1), Some(1));
        assert_eq!(s.lowest_in_column(3), None);
    }
}
