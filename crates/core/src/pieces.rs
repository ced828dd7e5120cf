//! Pieces module - shape matrices and the shape catalog
//!
//! A shape is a rectangular occupancy matrix of at most 4x4 cells, stored as a
//! 16-bit mask (bit `r * 4 + c` is row `r`, column `c`). Pieces never rotate,
//! so every catalog template has exactly one orientation.

use serde::{Serialize, Serializer};

use crate::types::{ShapeKind, Tag, MAX_SHAPE_DIM};

const DIM: usize = MAX_SHAPE_DIM as usize;

/// Rectangular occupancy matrix with at least one occupied cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    mask: u16,
}

/// Build a catalog shape at compile time.
const fn matrix(rows: u8, cols: u8, m: [[u8; DIM]; DIM]) -> Shape {
    let mut mask = 0u16;
    let mut r = 0;
    while r < rows as usize {
        let mut c = 0;
        while c < cols as usize {
            if m[r][c] != 0 {
                mask |= 1 << (r * DIM + c);
            }
            c += 1;
        }
        r += 1;
    }
    Shape { rows, cols, mask }
}

const MONO: Shape = matrix(1, 1, [[1, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
const DOMINO_H: Shape = matrix(1, 2, [[1, 1, 0, 0], [0; 4], [0; 4], [0; 4]]);
const DOMINO_V: Shape = matrix(2, 1, [[1, 0, 0, 0], [1, 0, 0, 0], [0; 4], [0; 4]]);
const SQUARE: Shape = matrix(2, 2, [[1, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const TRIOMINO_H: Shape = matrix(1, 3, [[1, 1, 1, 0], [0; 4], [0; 4], [0; 4]]);
const CORNER_L: Shape = matrix(2, 2, [[1, 0, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const CORNER_J: Shape = matrix(2, 2, [[0, 1, 0, 0], [1, 1, 0, 0], [0; 4], [0; 4]]);
const TRIOMINO_V: Shape = matrix(
    3,
    1,
    [[1, 0, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0], [0; 4]],
);
const LINE4: Shape = matrix(1, 4, [[1, 1, 1, 1], [0; 4], [0; 4], [0; 4]]);

/// Get the shape matrix for a catalog entry
pub fn get_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::Mono => MONO,
        ShapeKind::DominoH => DOMINO_H,
        ShapeKind::DominoV => DOMINO_V,
        ShapeKind::Square => SQUARE,
        ShapeKind::TriominoH => TRIOMINO_H,
        ShapeKind::CornerL => CORNER_L,
        ShapeKind::CornerJ => CORNER_J,
        ShapeKind::TriominoV => TRIOMINO_V,
        ShapeKind::Line4 => LINE4,
    }
}

impl Shape {
    /// Validate a caller-supplied matrix.
    ///
    /// Returns `None` unless the rows are non-empty, equally long, no larger
    /// than 4x4, and contain at least one non-zero cell.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if height == 0 || height > DIM || width == 0 || width > DIM {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut mask = 0u16;
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v != 0 {
                    mask |= 1 << (r * DIM + c);
                }
            }
        }
        if mask == 0 {
            return None;
        }

        Some(Self {
            rows: height as u8,
            cols: width as u8,
            mask,
        })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether matrix cell (row, col) is occupied. Out-of-matrix is empty.
    #[inline(always)]
    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.mask & (1 << (row as usize * DIM + col as usize)) != 0
    }

    /// Number of occupied cells.
    pub fn area(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Occupied cells as `(row, col)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.rows).flat_map(move |r| {
            (0..self.cols)
                .filter(move |&c| self.is_filled(r, c))
                .map(move |c| (r, c))
        })
    }

    /// The matrix as nested rows of 0/1, for display and serialization.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|r| (0..self.cols).map(|c| u8::from(self.is_filled(r, c))).collect())
            .collect()
    }
}

impl Serialize for Shape {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_rows().serialize(serializer)
    }
}

/// A shape plus its display tag. Immutable once dealt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub shape: Shape,
    pub tag: Tag,
}

impl Piece {
    pub fn new(shape: Shape, tag: Tag) -> Self {
        Self { shape, tag }
    }

    pub fn from_kind(kind: ShapeKind, tag: Tag) -> Self {
        Self::new(get_shape(kind), tag)
    }
}
