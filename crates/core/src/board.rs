//! Board module - manages the game grid
//!
//! The board is a 10x10 grid where each cell is either empty or filled with a
//! display tag. Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..9 (top to bottom)

use arrayvec::ArrayVec;

use crate::pieces::Shape;
use crate::types::{Cell, Tag, BOARD_SIZE};

/// Total number of cells on the board
const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

const N: usize = BOARD_SIZE as usize;

/// Rows and columns removed by one line-clear pass.
///
/// Both lists are captured from the same board snapshot, so a cell at a
/// row/column intersection shows up in both while being cleared only once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClear {
    pub rows: ArrayVec<u8, N>,
    pub cols: ArrayVec<u8, N>,
}

impl LineClear {
    /// Total lines cleared, each full row and each full column counted once.
    pub fn lines(&self) -> u32 {
        (self.rows.len() + self.cols.len()) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }

    /// Whether board cell (x, y) was part of a cleared line.
    pub fn contains(&self, x: u8, y: u8) -> bool {
        self.rows.contains(&y) || self.cols.contains(&x)
    }
}

/// The game board - 10 columns x 10 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * SIZE + x)
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= BOARD_SIZE as i16 || y < 0 || y >= BOARD_SIZE as i16 {
            return None;
        }
        Some((y as usize) * N + (x as usize))
    }

    /// Side length of the board
    pub fn size(&self) -> u8 {
        BOARD_SIZE
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x.into(), y.into()).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x.into(), y.into()) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    #[inline(always)]
    fn is_free(&self, x: i16, y: i16) -> bool {
        matches!(Self::index(x, y), Some(idx) if self.cells[idx].is_none())
    }

    /// Check whether `shape` fits with its top-left matrix cell at (x, y).
    ///
    /// Every occupied matrix cell (r, c) lands on (x + c, y + r); the check
    /// fails if any of them is off the board or already filled. The origin is
    /// not checked on its own, so a negative origin is fine as long as no
    /// occupied cell ends up outside.
    pub fn can_place(&self, shape: &Shape, x: i8, y: i8) -> bool {
        let (x, y) = (i16::from(x), i16::from(y));
        shape
            .cells()
            .all(|(r, c)| self.is_free(x + i16::from(c), y + i16::from(r)))
    }

    /// Fill every occupied cell of `shape` at (x, y) with `tag`.
    ///
    /// Validates first and leaves the board untouched on failure.
    /// Returns the number of cells filled.
    pub fn fill_piece(&mut self, shape: &Shape, x: i8, y: i8, tag: Tag) -> Option<u32> {
        if !self.can_place(shape, x, y) {
            return None;
        }

        let (x, y) = (i16::from(x), i16::from(y));
        let mut filled = 0;
        for (r, c) in shape.cells() {
            if let Some(idx) = Self::index(x + i16::from(c), y + i16::from(r)) {
                self.cells[idx] = Some(tag);
                filled += 1;
            }
        }
        Some(filled)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= N {
            return false;
        }
        let start = y * N;
        self.cells[start..start + N].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, x: usize) -> bool {
        if x >= N {
            return false;
        }
        (0..N).all(|y| self.cells[y * N + x].is_some())
    }

    /// Find every full row and full column without touching the board.
    pub fn full_lines(&self) -> LineClear {
        let mut found = LineClear::default();
        for i in 0..N {
            if self.is_row_full(i) {
                found.rows.push(i as u8);
            }
            if self.is_col_full(i) {
                found.cols.push(i as u8);
            }
        }
        found
    }

    /// Clear all full rows and columns at once.
    ///
    /// Lines are detected on the current board before any cell is reset, then
    /// the union of their cells is emptied in a single pass. Nothing shifts;
    /// the rest of the board stays where it is.
    pub fn clear_full_lines(&mut self) -> LineClear {
        let cleared = self.full_lines();
        if cleared.is_empty() {
            return cleared;
        }

        for &y in &cleared.rows {
            let start = y as usize * N;
            self.cells[start..start + N].fill(None);
        }
        for &x in &cleared.cols {
            for y in 0..N {
                self.cells[y * N + x as usize] = None;
            }
        }

        cleared
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Write the board as cell codes (0 = empty, tag index + 1 otherwise).
    pub fn write_u8_grid(&self, out: &mut [[u8; N]; N]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = crate::types::cell_code(self.cells[y * N + x]);
            }
        }
    }

    /// Build a board from text rows: `.` is empty, any other char is filled
    /// with `tag`. Missing rows/columns are empty; extra ones are ignored.
    ///
    /// ```
    /// use block_blast_core::Board;
    /// use block_blast_types::Tag;
    ///
    /// let board = Board::from_ascii(&["##..", ".#"], Tag::Cyan);
    /// assert!(board.is_occupied(0, 0));
    /// assert!(board.is_occupied(1, 1));
    /// assert!(!board.is_occupied(2, 0));
    /// ```
    pub fn from_ascii(rows: &[&str], tag: Tag) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().take(N).enumerate() {
            for (x, ch) in row.chars().take(N).enumerate() {
                if ch != '.' {
                    board.cells[y * N + x] = Some(tag);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::get_shape;
    use crate::types::ShapeKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 9), Some(99));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 10), None);
    }

    #[test]
    fn test_can_place_extreme_origin_does_not_overflow() {
        let board = Board::new();
        let line = get_shape(ShapeKind::Line4);
        assert!(!board.can_place(&line, i8::MAX, 0));
        assert!(!board.can_place(&line, 0, i8::MIN));
        assert!(!board.can_place(&line, i8::MAX, i8::MAX));
    }

    #[test]
    fn test_fill_piece_rejects_overlap_without_writing() {
        let mut board = Board::new();
        board.set(1, 0, Some(Tag::Pink));
        let before = board.clone();

        let line = get_shape(ShapeKind::Line4);
        assert_eq!(board.fill_piece(&line, 0, 0, Tag::Green), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_intersection_once() {
        let mut board = Board::new();
        for i in 0..10 {
            board.set(i, 4, Some(Tag::Amber));
            board.set(6, i, Some(Tag::Amber));
        }
        board.set(0, 0, Some(Tag::Teal));

        let cleared = board.clear_full_lines();
        assert_eq!(cleared.rows.as_slice(), &[4]);
        assert_eq!(cleared.cols.as_slice(), &[6]);
        assert_eq!(cleared.lines(), 2);
        assert!(cleared.contains(6, 4));
        assert_eq!(board.filled_count(), 1);
        assert_eq!(board.get(0, 0), Some(Some(Tag::Teal)));
    }

    #[test]
    fn test_full_lines_is_read_only() {
        let mut board = Board::new();
        for x in 0..10 {
            board.set(x, 9, Some(Tag::Cyan));
        }
        let found = board.full_lines();
        assert_eq!(found.rows.as_slice(), &[9]);
        assert_eq!(board.filled_count(), 10);
    }
}
