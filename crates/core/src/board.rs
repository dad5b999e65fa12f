//! Board module - the locked cells of the well
//!
//! The board is a 10x20 grid where each cell is either empty or holds the color
//! of a locked piece. Uses a flat array for cache locality and zero allocation.
//! `x` grows to the right (0..10), `y` grows downward (0..20); row 0 is the top.

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, GRID_HEIGHT, GRID_WIDTH};

const WIDTH: usize = GRID_WIDTH as usize;
const HEIGHT: usize = GRID_HEIGHT as usize;

const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by a single clear, bottom to top
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// 10x20 grid of locked cells
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Row-major: `y * WIDTH + x`
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= GRID_WIDTH || y < 0 || y >= GRID_HEIGHT {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> i32 {
        GRID_WIDTH
    }

    pub fn height(&self) -> i32 {
        GRID_HEIGHT
    }

    /// Cell at `(x, y)`, or `None` off the board
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Returns false (and changes nothing) off the board
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether (x, y) blocks a piece.
    ///
    /// Columns outside the board and rows below the floor count as occupied.
    /// Rows above the top are open.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        if x < 0 || x >= GRID_WIDTH || y >= GRID_HEIGHT {
            return true;
        }
        if y < 0 {
            return false;
        }
        self.cells[(y as usize) * WIDTH + (x as usize)].is_some()
    }

    /// True when every column of row `y` is occupied
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        let start = y * WIDTH;
        self.cells[start..start + WIDTH].iter().all(|cell| cell.is_some())
    }

    /// Write the piece's color into every cell it covers.
    ///
    /// The caller must have checked that the piece does not collide; locking an
    /// overlapping or out-of-range piece is a contract violation.
    pub fn lock_cells(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            debug_assert!(
                !self.is_occupied(x, y),
                "lock_cells: ({}, {}) is blocked",
                x,
                y
            );
            let placed = self.set(x, y, Some(piece.color));
            debug_assert!(placed, "lock_cells: ({}, {}) is above the board", x, y);
        }
    }

    /// Remove every completed row and return how many were removed.
    pub fn clear_completed_rows(&mut self) -> usize {
        self.cleared_rows().len()
    }

    /// Remove every completed row and return their indices (sorted bottom to top).
    ///
    /// First pass collects the completed rows, second pass copies the remaining
    /// rows down in order and blanks the vacated rows at the top.
    pub fn cleared_rows(&mut self) -> ClearedRows {
        let completed: ClearedRows = (0..HEIGHT).rev().filter(|&y| self.is_row_full(y)).collect();
        if completed.is_empty() {
            return completed;
        }

        let mut write_y = HEIGHT;
        for read_y in (0..HEIGHT).rev() {
            if completed.contains(&read_y) {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_y * WIDTH);
            }
        }

        self.cells[..write_y * WIDTH].fill(None);
        completed
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy the grid into a row-major 2D array (for snapshots).
    pub fn write_grid(&self, out: &mut [[Cell; WIDTH]; HEIGHT]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            dst.copy_from_slice(src);
        }
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
