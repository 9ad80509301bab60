//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Pieces may hang above the board (negative y); those cells never collide and are
//! never written.

use arrayvec::ArrayVec;

use crate::pieces::Piece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Number of rows, as an index type
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Number of columns, as an index type
pub const BOARD_COLS: usize = BOARD_WIDTH as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_ROWS * BOARD_COLS;

/// Row indices removed by a single [`Board::clear_lines`] call
pub type ClearedRows = ArrayVec<usize, BOARD_ROWS>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * BOARD_COLS + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether a single cell blocks a piece.
    ///
    /// Rows above the board are always passable; side walls and the floor block.
    #[inline]
    pub fn blocks(&self, x: i8, y: i8) -> bool {
        if y < 0 {
            return false;
        }
        match self.get(x, y) {
            Some(cell) => cell.is_some(),
            None => true,
        }
    }

    /// Whether any occupied cell of `piece` overlaps a wall, the floor or a locked cell.
    ///
    /// Cells above the top row are exempt from everything, including the side
    /// walls, so rotations and spawns can hang over the edge.
    pub fn collides(&self, piece: &Piece) -> bool {
        piece.cells().any(|(x, y)| self.blocks(x, y))
    }

    /// Placement check for moves and rotations: no collision, and every cell
    /// between the side walls even while it is still above the top.
    pub fn fits(&self, piece: &Piece) -> bool {
        piece.within_columns() && !self.collides(piece)
    }

    /// Write the piece's kind into every cell it covers, skipping cells above row 0.
    ///
    /// Callers are expected to have checked [`Board::collides`] first; cells that
    /// fall outside the board are ignored.
    pub fn merge(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_ROWS {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Cells of row `y` (left to right). Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * BOARD_COLS;
        &self.cells[start..start + BOARD_COLS]
    }

    /// Remove all full rows and return their indices (sorted bottom to top).
    ///
    /// Rows above a removed row shift down; the vacated rows at the top become empty.
    /// Uses a two-pointer compaction with zero allocation.
    pub fn clear_lines(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = BOARD_ROWS;

        // Scan from bottom to top
        for read_y in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * BOARD_COLS;
                    let dst_start = write_y * BOARD_COLS;
                    self.cells
                        .copy_within(src_start..src_start + BOARD_COLS, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_y * BOARD_COLS].fill(None);

        cleared_rows
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the board into a row-major 2D grid.
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_COLS]; BOARD_ROWS]) {
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(self.row(y));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_ROWS);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_COLS));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_COLS + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        (0..BOARD_ROWS).map(|y| self.row(y).to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure collision predicate: see [`Board::collides`].
pub fn collide(board: &Board, piece: &Piece) -> bool {
    board.collides(piece)
}

/// Commit a piece into the board: see [`Board::merge`].
pub fn merge(board: &mut Board, piece: &Piece) {
    board.merge(piece)
}
