//! Board tests - grid primitives, placement round trips and row clearing

use rl_tetris::core::{get_shape, Board, Piece};
use rl_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn piece_at(kind: PieceKind, x: i32, y: i32) -> Piece {
    Piece {
        x,
        y,
        ..Piece::spawn(kind, BOARD_WIDTH)
    }
}

/// A board with a scattered, deterministic pattern of occupied cells
fn cluttered_board() -> Board {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            if (x * 7 + y * 3) % 5 == 0 {
                board.set(x, y, true);
            }
        }
    }
    board
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i32 {
        for x in 0..BOARD_WIDTH as i32 {
            assert_eq!(board.get(x, y), Some(false), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i32, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i32), None);
    assert!(!board.is_occupied(-1, 0));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);

    assert!(!board.set(-1, 0, true));
    assert!(!board.set(0, -1, true));
    assert!(!board.set(BOARD_WIDTH as i32, 0, true));
    assert!(!board.set(0, BOARD_HEIGHT as i32, true));
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_clear_undoes_place_everywhere() {
    // Every kind, every orientation, every in-bounds position, on an empty
    // board: clear(place(grid)) == grid.
    let empty = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    for kind in PieceKind::ALL {
        let mut shape = get_shape(kind);
        for _ in 0..4 {
            for y in 0..=(BOARD_HEIGHT - shape.height()) as i32 {
                for x in 0..=(BOARD_WIDTH - shape.width()) as i32 {
                    let piece = Piece {
                        kind,
                        shape,
                        x,
                        y,
                    };
                    let mut board = empty.clone();
                    board.place_piece(&piece);
                    assert_eq!(board.occupied_count(), 4);
                    board.clear_piece(&piece);
                    assert_eq!(board, empty, "{:?} at ({}, {})", kind, x, y);
                }
            }
            shape = shape.rotated();
        }
    }
}

#[test]
fn test_clear_undoes_place_on_free_cells_of_cluttered_board() {
    let base = cluttered_board();
    for kind in PieceKind::ALL {
        let shape = get_shape(kind);
        for y in 0..=(BOARD_HEIGHT - shape.height()) as i32 {
            for x in 0..=(BOARD_WIDTH - shape.width()) as i32 {
                let piece = piece_at(kind, x, y);
                if piece.board_cells().any(|(cx, cy)| base.is_occupied(cx, cy)) {
                    continue;
                }
                let mut board = base.clone();
                board.place_piece(&piece);
                board.clear_piece(&piece);
                assert_eq!(board, base);
            }
        }
    }
}

#[test]
fn test_place_is_idempotent() {
    let mut once = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    let piece = piece_at(PieceKind::L, 2, 7);
    once.place_piece(&piece);
    let mut twice = once.clone();
    twice.place_piece(&piece);
    assert_eq!(once, twice);
}

#[test]
fn test_is_row_full() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    for x in 0..BOARD_WIDTH as i32 - 1 {
        board.set(x, 19, true);
    }
    assert!(!board.is_row_full(19));
    board.set(BOARD_WIDTH as i32 - 1, 19, true);
    assert!(board.is_row_full(19));
    assert!(!board.is_row_full(BOARD_HEIGHT));
}

#[test]
fn test_clear_single_full_row() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    for x in 0..BOARD_WIDTH as i32 {
        board.set(x, 19, true);
    }
    // Marker above the full row shifts down by one.
    board.set(2, 18, true);
    board.set(7, 0, true);

    let cleared = board.clear_full_rows();

    assert_eq!(cleared, vec![19]);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.row(0).unwrap().iter().all(|&c| !c));
    assert!(board.is_occupied(2, 19));
    assert!(board.is_occupied(7, 1));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_non_adjacent_full_rows() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    for x in 0..BOARD_WIDTH as i32 {
        board.set(x, 19, true);
        board.set(x, 17, true);
    }
    board.set(0, 18, true);
    board.set(5, 16, true);

    let cleared = board.clear_full_rows();

    assert_eq!(cleared, vec![19, 17]);
    assert_eq!(board.to_rows().len(), BOARD_HEIGHT);
    assert!(board.is_occupied(0, 19));
    assert!(board.is_occupied(5, 18));
    assert_eq!(board.occupied_count(), 2);
    assert!(board.row(0).unwrap().iter().all(|&c| !c));
    assert!(board.row(1).unwrap().iter().all(|&c| !c));
}

#[test]
fn test_clear_more_than_four_rows() {
    let mut board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
    for y in 12..20 {
        for x in 0..BOARD_WIDTH as i32 {
            board.set(x, y, true);
        }
    }
    assert_eq!(board.clear_full_rows().len(), 8);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_clear_board() {
    let mut board = cluttered_board();
    assert!(board.occupied_count() > 0);
    board.clear();
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_from_rows_rejects_ragged() {
    assert!(Board::from_rows(&[]).is_none());
    assert!(Board::from_rows(&[vec![false; 4], vec![false; 3]]).is_none());
}
