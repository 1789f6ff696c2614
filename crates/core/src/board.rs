//! Board module - manages the game grid
//!
//! The board is a `width x height` grid of boolean cells (`true` = occupied).
//! Uses a flat row-major buffer sized once at construction; dimensions never
//! change afterwards.
//! Coordinates: (x, y) where x counts columns left to right and y counts rows
//! top to bottom, so row 0 is the top of the well.

use crate::pieces::Piece;
use crate::types::Cell;

/// The game board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Build a board from explicit rows (row 0 first).
    ///
    /// Returns `None` when the rows are empty or ragged.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        Some(Self {
            width,
            height,
            cells: rows.concat(),
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.get(x, y) == Some(true)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y).is_some_and(|row| row.iter().all(|&cell| cell))
    }

    /// One row of cells, `None` past the bottom
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Write `true` under every occupied cell of the piece.
    ///
    /// Callers validate the position first; cells outside the board are skipped.
    pub fn place_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.board_cells() {
            self.set(x, y, true);
        }
    }

    /// Write `false` under every occupied cell of the piece.
    ///
    /// Exactly undoes [`Board::place_piece`] for an unmoved piece.
    pub fn clear_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.board_cells() {
            self.set(x, y, false);
        }
    }

    /// Remove every full row, inserting a blank row at the top for each.
    ///
    /// Rows above a removed row shift down by one; the row count is unchanged.
    /// Returns the indices the full rows had before removal, bottom to top.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let mut cleared_rows = Vec::new();
        let width = self.width;
        let mut write_y = self.height;

        // Scan from bottom to top
        for read_y in (0..self.height).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                // Move the surviving row down to the write position
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Blank the rows freed at the top
        for cell in &mut self.cells[..write_y * width] {
            *cell = false;
        }

        cleared_rows
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Convert to rows (row 0 first)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells.chunks(self.width).map(<[Cell]>::to_vec).collect()
    }

    /// Copy the grid into `out`, reusing its allocations where the shape matches
    pub fn write_rows_into(&self, out: &mut Vec<Vec<Cell>>) {
        out.resize_with(self.height, Vec::new);
        for (dst, src) in out.iter_mut().zip(self.cells.chunks(self.width)) {
            dst.clear();
            dst.extend_from_slice(src);
        }
    }
}
