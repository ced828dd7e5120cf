//! Board tests - placement checks and row/column clearing

use block_blast::core::{get_shape, Board, Shape};
use block_blast::types::{ShapeKind, Tag, BOARD_SIZE};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);

    for y in 0..BOARD_SIZE as i8 {
        for x in 0..BOARD_SIZE as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_SIZE as i8, 0), None);
    assert_eq!(board.get(0, BOARD_SIZE as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 9, Some(Tag::Cyan)));
    assert_eq!(board.get(5, 9), Some(Some(Tag::Cyan)));
    assert!(board.is_occupied(5, 9));

    assert!(board.set(5, 9, None));
    assert_eq!(board.get(5, 9), Some(None));

    assert!(!board.set(-1, 0, Some(Tag::Cyan)));
    assert!(!board.set(0, BOARD_SIZE as i8, Some(Tag::Cyan)));
}

#[test]
fn test_can_place_rejects_any_cell_out_of_bounds() {
    let board = Board::new();
    let n = BOARD_SIZE as i16;

    for kind in ShapeKind::ALL {
        let shape = get_shape(kind);
        for y in -5i8..=12 {
            for x in -5i8..=12 {
                let inside = shape.cells().all(|(r, c)| {
                    let bx = x as i16 + c as i16;
                    let by = y as i16 + r as i16;
                    (0..n).contains(&bx) && (0..n).contains(&by)
                });
                assert_eq!(
                    board.can_place(&shape, x, y),
                    inside,
                    "{:?} at ({}, {})",
                    kind,
                    x,
                    y
                );
            }
        }
    }
}

#[test]
fn test_can_place_only_checks_occupied_cells() {
    // Corner J has an empty top-left cell, so the origin may be filled.
    let board = Board::from_ascii(&["#"], Tag::Green);
    let shape = get_shape(ShapeKind::CornerJ);
    assert!(board.can_place(&shape, 0, 0));

    // A negative origin is fine when the empty matrix cells hang off.
    let hook = Shape::from_rows(&[&[0, 1], &[0, 1]]).unwrap();
    assert!(board.can_place(&hook, -1, 1));
    assert!(!board.can_place(&hook, -2, 1));
}

#[test]
fn test_can_place_rejects_overlap() {
    let board = Board::from_ascii(&["..", ".#"], Tag::Green);
    let square = get_shape(ShapeKind::Square);
    assert!(!board.can_place(&square, 0, 0));
    assert!(board.can_place(&square, 2, 0));
}

#[test]
fn test_fill_piece_leaves_board_untouched_on_failure() {
    let mut board = Board::from_ascii(&["...#"], Tag::Green);
    let before = board.clone();
    let line = get_shape(ShapeKind::Line4);

    assert_eq!(board.fill_piece(&line, 0, 0, Tag::Pink), None);
    assert_eq!(board, before);

    assert_eq!(board.fill_piece(&line, 0, 1, Tag::Pink), Some(4));
    for x in 0..4 {
        assert_eq!(board.get(x, 1), Some(Some(Tag::Pink)));
    }
}

#[test]
fn test_full_lines_detects_rows_and_columns() {
    let board = Board::from_ascii(
        &[
            "##########",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
        ],
        Tag::Amber,
    );
    let lines = board.full_lines();
    assert_eq!(lines.rows.as_slice(), &[0]);
    assert_eq!(lines.cols.as_slice(), &[0]);
    assert_eq!(lines.lines(), 2);
    // Detection alone changes nothing.
    assert_eq!(board.filled_count(), 19);
}

#[test]
fn test_clear_full_lines_clears_intersection_once() {
    let mut board = Board::from_ascii(
        &[
            "##########",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
            "#.........",
        ],
        Tag::Amber,
    );
    board.set(5, 5, Some(Tag::Teal));

    let cleared = board.clear_full_lines();
    assert_eq!(cleared.lines(), 2);
    assert!(cleared.contains(0, 7));
    assert!(cleared.contains(7, 0));
    assert!(!cleared.contains(5, 5));

    // Nothing shifts: the lone cell stays put.
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.get(5, 5), Some(Some(Tag::Teal)));
}

#[test]
fn test_clear_full_lines_noop_without_full_lines() {
    let mut board = Board::from_ascii(&["#########."], Tag::Amber);
    let cleared = board.clear_full_lines();
    assert!(cleared.is_empty());
    assert_eq!(board.filled_count(), 9);
}

#[test]
fn test_write_u8_grid_uses_cell_codes() {
    let mut board = Board::new();
    board.set(0, 0, Some(Tag::Orange));
    board.set(9, 9, Some(Tag::Violet));

    let mut grid = [[0u8; 10]; 10];
    board.write_u8_grid(&mut grid);
    assert_eq!(grid[0][0], 1);
    assert_eq!(grid[9][9], 8);
    assert_eq!(grid[4][4], 0);
}

#[test]
fn test_board_clear() {
    let mut board = Board::from_ascii(&["####", "####"], Tag::Pink);
    board.clear();
    assert_eq!(board.filled_count(), 0);
}
