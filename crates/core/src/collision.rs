//! Collision predicates and rotation legality
//!
//! Every function here is pure: it reads a piece and a board and returns a
//! verdict. Commands evaluate these before mutating anything, which is what
//! keeps pieces on the grid.
//!
//! The horizontal boundary checks keep a one-column margin (`x < 1` on the
//! left, `x + width > board_width - 1` on the right). Moves test them against
//! the destination, so sliding never reaches the outermost columns. Existing
//! play traces were recorded with these bounds, so they are reproduced as-is.

use crate::board::Board;
use crate::pieces::Piece;

/// Piece is at (or past) the left margin: `x < 1`.
pub fn hits_left_boundary(piece: &Piece) -> bool {
    piece.x < 1
}

/// Piece is at (or past) the right margin: `x + width > board_width - 1`.
pub fn hits_right_boundary(piece: &Piece, board: &Board) -> bool {
    piece.x + piece.shape.width() as i32 > board.width() as i32 - 1
}

/// Piece's bounding box rests on the floor: `y + height == board_height`.
pub fn hits_bottom(piece: &Piece, board: &Board) -> bool {
    piece.y + piece.shape.height() as i32 == board.height() as i32
}

/// Some column's lowest cell has an occupied cell directly below it.
pub fn collides_down(piece: &Piece, board: &Board) -> bool {
    (0..piece.shape.width()).any(|col| {
        piece.shape.lowest_in_column(col).is_some_and(|row| {
            board.is_occupied(piece.x + col as i32, piece.y + row as i32 + 1)
        })
    })
}

/// Some row's leftmost cell has an occupied cell directly left of it.
pub fn collides_left(piece: &Piece, board: &Board) -> bool {
    (0..piece.shape.height()).any(|row| {
        piece.shape.leftmost_in_row(row).is_some_and(|col| {
            board.is_occupied(piece.x + col as i32 - 1, piece.y + row as i32)
        })
    })
}

/// Some row's rightmost cell has an occupied cell directly right of it.
pub fn collides_right(piece: &Piece, board: &Board) -> bool {
    (0..piece.shape.height()).any(|row| {
        piece.shape.rightmost_in_row(row).is_some_and(|col| {
            board.is_occupied(piece.x + col as i32 + 1, piece.y + row as i32)
        })
    })
}

/// Any occupied cell of the piece coincides with an occupied board cell.
pub fn overlaps(piece: &Piece, board: &Board) -> bool {
    piece.board_cells().any(|(x, y)| board.is_occupied(x, y))
}

/// Every occupied cell of the piece lies inside the board.
pub fn fits_inside(piece: &Piece, board: &Board) -> bool {
    piece.board_cells().all(|(x, y)| board.get(x, y).is_some())
}

/// Evaluate a clockwise rotation of `piece`, which is currently placed on `board`.
///
/// Works on a structural copy of the board with the piece lifted out; the
/// real board is untouched. The rotated shape is probed one column to the
/// left for the right-side checks (the shape may have grown wider), then
/// checked against the stack at the unmoved position.
///
/// Returns the rotated piece when legal, `None` otherwise.
pub fn try_rotate(piece: &Piece, board: &Board) -> Option<Piece> {
    let mut scratch = board.clone();
    scratch.clear_piece(piece);

    let rotated = piece.rotated();
    let probe = rotated.shifted(-1, 0);

    if hits_right_boundary(&probe, &scratch) || collides_right(&probe, &scratch) {
        return None;
    }
    if !fits_inside(&rotated, &scratch) || overlaps(&rotated, &scratch) {
        return None;
    }

    Some(rotated)
}
