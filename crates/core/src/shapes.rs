//! Shapes module - the seven piece geometries
//!
//! Each shape is a small boolean matrix (row 0 at the top) with no empty edge
//! row or column. Matrices are fixed 4x4 arrays with an explicit extent, so
//! rotating or copying a piece never allocates.

use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::types::MAX_PIECE_SIZE;

/// Occupancy matrix of a piece, `rows x cols` with both extents at most 4.
///
/// Cells outside the extent are always `false`, so two matrices compare equal
/// exactly when their grids do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_PIECE_SIZE]; MAX_PIECE_SIZE],
}

impl Matrix {
    /// Build a matrix from per-row bit masks, most significant of `cols` bits
    /// being column 0.
    ///
    /// ```
    /// use blockfall_core::shapes::Matrix;
    ///
    /// let t = Matrix::from_bits(3, &[0b111, 0b010]);
    /// assert_eq!((t.rows(), t.cols()), (2, 3));
    /// assert!(t.get(1, 1));
    /// assert!(!t.get(1, 0));
    /// ```
    pub const fn from_bits(cols: u8, rows: &[u8]) -> Self {
        assert!(rows.len() <= MAX_PIECE_SIZE && cols as usize <= MAX_PIECE_SIZE);

        let mut cells = [[false; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        let mut r = 0;
        while r < rows.len() {
            let mut c = 0;
            while c < cols as usize {
                cells[r][c] = rows[r] & (1u8 << (cols as usize - 1 - c)) != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: rows.len() as u8,
            cols,
            cells,
        }
    }

    /// Build a `rows x cols` matrix from a per-cell predicate `(row, col)`.
    pub fn from_fn(rows: u8, cols: u8, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        debug_assert!(rows as usize <= MAX_PIECE_SIZE && cols as usize <= MAX_PIECE_SIZE);

        let mut cells = [[false; MAX_PIECE_SIZE]; MAX_PIECE_SIZE];
        for (r, row) in cells.iter_mut().enumerate().take(rows as usize) {
            for (c, cell) in row.iter_mut().enumerate().take(cols as usize) {
                *cell = f(r, c);
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Cell at `(row, col)`; anything outside the extent is empty.
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.cells[row][col]
    }

    /// Offsets `(dx, dy)` of every occupied cell, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        (0..self.rows as usize).flat_map(move |r| {
            (0..self.cols as usize)
                .filter(move |&c| self.cells[r][c])
                .map(move |c| (c as i32, r as i32))
        })
    }

    /// Number of occupied cells
    pub fn count(&self) -> usize {
        self.occupied().count()
    }
}

/// Serialized as nested rows of booleans, trimmed to the matrix extent.
impl Serialize for Matrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows as usize))?;
        for row in &self.cells[..self.rows as usize] {
            seq.serialize_element(&row[..self.cols as usize])?;
        }
        seq.end()
    }
}

/// The seven canonical shapes, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
pub enum ShapeKind {
    I,
    O,
    T,
    L,
    J,
    Z,
    S,
}

impl ShapeKind {
    /// Catalog order; the randomizer indexes into this.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::Z,
        ShapeKind::S,
    ];

    /// Catalog entry for this kind.
    pub fn shape(self) -> &'static Shape {
        &SHAPES[self as usize]
    }

    /// Spawn-orientation matrix for this kind.
    pub fn matrix(self) -> Matrix {
        self.shape().matrix
    }
}

/// A read-only shape template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub matrix: Matrix,
}

static SHAPES: [Shape; 7] = [
    Shape {
        kind: ShapeKind::I,
        matrix: Matrix::from_bits(4, &[0b1111]),
    },
    Shape {
        kind: ShapeKind::O,
        matrix: Matrix::from_bits(2, &[0b11, 0b11]),
    },
    Shape {
        kind: ShapeKind::T,
        matrix: Matrix::from_bits(3, &[0b111, 0b010]),
    },
    Shape {
        kind: ShapeKind::L,
        matrix: Matrix::from_bits(3, &[0b111, 0b100]),
    },
    Shape {
        kind: ShapeKind::J,
        matrix: Matrix::from_bits(3, &[0b111, 0b001]),
    },
    Shape {
        kind: ShapeKind::Z,
        matrix: Matrix::from_bits(3, &[0b110, 0b011]),
    },
    Shape {
        kind: ShapeKind::S,
        matrix: Matrix::from_bits(3, &[0b011, 0b110]),
    },
];

/// All seven shapes in catalog order.
pub fn all_shapes() -> &'static [Shape; 7] {
    &SHAPES
}
