//! Piece module - the active piece, rotation and collision
//!
//! Rotation is a pure matrix transform with no wall kicks: if the rotated
//! matrix does not fit at the current origin, the engine keeps the old one.

use crate::board::Board;
use crate::rng::NextPiece;
use crate::shapes::Matrix;
use crate::types::{Color, GRID_HEIGHT, GRID_WIDTH};

/// Active falling piece
///
/// `(x, y)` is the board position of the matrix's top-left cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub matrix: Matrix,
    pub color: Color,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Create a piece from the next-piece slot at its spawn position
    pub fn spawn(next: NextPiece) -> Self {
        let matrix = next.matrix();
        let (x, y) = spawn_position(&matrix);
        Self {
            matrix,
            color: next.color,
            x,
            y,
        }
    }

    /// Absolute board coordinates of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.matrix
            .occupied()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same origin and color, matrix rotated clockwise
    pub fn rotated(&self) -> Self {
        Self {
            matrix: rotate(&self.matrix),
            ..*self
        }
    }

    pub fn collides(&self, board: &Board) -> bool {
        collides(board, &self.matrix, self.x, self.y)
    }
}

/// Spawn origin for a matrix: horizontally centered (rounding toward the left
/// for odd widths) on the top row.
///
/// ```
/// use blockfall_core::piece::spawn_position;
/// use blockfall_core::shapes::ShapeKind;
///
/// assert_eq!(spawn_position(&ShapeKind::I.matrix()), (3, 0));
/// assert_eq!(spawn_position(&ShapeKind::O.matrix()), (4, 0));
/// assert_eq!(spawn_position(&ShapeKind::T.matrix()), (4, 0));
/// ```
pub fn spawn_position(matrix: &Matrix) -> (i32, i32) {
    (GRID_WIDTH / 2 - matrix.cols() as i32 / 2, 0)
}

/// Rotate 90° clockwise: reverse the row order, then transpose.
pub fn rotate(matrix: &Matrix) -> Matrix {
    let rows = matrix.rows() as usize;
    Matrix::from_fn(matrix.cols(), matrix.rows(), |r, c| {
        matrix.get(rows - 1 - c, r)
    })
}

/// Check whether `matrix` placed at `(x, y)` hits a wall, the floor, or a
/// locked cell.
///
/// Cells above the top row never collide. Coordinates are widened before
/// offsetting, so any `i32` origin is accepted.
pub fn collides(board: &Board, matrix: &Matrix, x: i32, y: i32) -> bool {
    matrix.occupied().any(|(dx, dy)| {
        let px = x as i64 + dx as i64;
        let py = y as i64 + dy as i64;
        if px < 0 || px >= GRID_WIDTH as i64 || py >= GRID_HEIGHT as i64 {
            return true;
        }
        py >= 0 && board.is_occupied(px as i32, py as i32)
    })
}
