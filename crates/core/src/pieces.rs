//! Pieces module - shape matrices, spawning and kick-fallback rotation
//!
//! Shapes are small rectangular binary matrices (at most 4x4). A [`Shape`] is a
//! plain `Copy` value: rotating produces a new matrix, so a trial piece used for
//! collision testing never aliases the committed piece.

use crate::types::{PieceKind, BOARD_WIDTH, KICK_OFFSETS, SPAWN_Y};

/// Largest matrix side used by any shape
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a single occupied cell relative to the piece origin, as `(dx, dy)`
pub type MinoOffset = (i8, i8);

/// Rectangular binary matrix describing which cells a piece occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Rows must all have the same length and the matrix must fit in 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_DIM);
        let cols = rows.first().map_or(0, |r| r.len());
        debug_assert!(cols <= MAX_SHAPE_DIM);
        debug_assert!(rows.iter().all(|r| r.len() == cols));

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (y, row) in rows.iter().enumerate().take(MAX_SHAPE_DIM) {
            for (x, &v) in row.iter().enumerate().take(MAX_SHAPE_DIM) {
                cells[y][x] = v != 0;
            }
        }

        Self {
            rows: rows.len().min(MAX_SHAPE_DIM) as u8,
            cols: cols.min(MAX_SHAPE_DIM) as u8,
            cells,
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether the matrix cell at (`x`, `y`) is occupied. Out of range is empty.
    pub fn is_filled(&self, x: u8, y: u8) -> bool {
        x < self.cols && y < self.rows && self.cells[y as usize][x as usize]
    }

    /// Occupied cells as `(dx, dy)` offsets, row-major.
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> {
        let shape = *self;
        (0..shape.rows).flat_map(move |y| {
            (0..shape.cols).filter_map(move |x| {
                shape.cells[y as usize][x as usize].then_some((x as i8, y as i8))
            })
        })
    }

    /// Rotate 90° clockwise (transpose, then reverse each row).
    ///
    /// An `r x c` matrix becomes `c x r`.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        for (y, row) in cells.iter_mut().enumerate().take(cols) {
            for (x, cell) in row.iter_mut().enumerate().take(rows) {
                *cell = self.cells[rows - 1 - x][y];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }
}

/// Canonical spawn shape for a piece kind.
///
/// Always returns a fresh copy; callers may rotate it freely.
pub fn get_shape(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
        PieceKind::J => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
        PieceKind::L => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
        PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::S => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
        PieceKind::Z => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    }
}

/// The falling piece: kind, current matrix and top-left board offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    /// May be negative while the piece is entering from above the board.
    pub y: i8,
}

impl Piece {
    /// Create a piece centred horizontally, two rows above the visible top
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            shape,
            x: (BOARD_WIDTH as i8 - shape.cols() as i8) / 2,
            y: SPAWN_Y,
        }
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> {
        let (px, py) = (self.x, self.y);
        self.shape.minos().map(move |(dx, dy)| (px + dx, py + dy))
    }

    /// Every cell lies between the side walls (rows are not checked)
    pub fn within_columns(&self) -> bool {
        self.cells().all(|(x, _)| x >= 0 && x < BOARD_WIDTH as i8)
    }

    /// Same piece moved by (`dx`, `dy`)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its matrix rotated clockwise in place (no kick)
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }
}

/// Rotate a piece clockwise, falling back to horizontal kicks.
///
/// The rotated matrix is tried at each of [`KICK_OFFSETS`] in order; the first
/// placement accepted by `fits` wins. Returns the placed piece and the kick used,
/// or `None` when every offset is rejected.
pub fn try_rotate(piece: &Piece, fits: impl Fn(&Piece) -> bool) -> Option<(Piece, i8)> {
    let rotated = piece.rotated();
    KICK_OFFSETS.iter().find_map(|&dx| {
        let trial = rotated.shifted(dx, 0);
        fits(&trial).then_some((trial, dx))
    })
}
