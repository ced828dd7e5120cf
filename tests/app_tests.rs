//! Session controller tests - keys in, engine and leaderboard effects out

use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use block_blast::app::{App, Control, Mode};
use block_blast::core::{Board, GameState, Piece};
use block_blast::leaderboard::Leaderboard;
use block_blast::types::{ShapeKind, Tag, CLEAR_FLASH_MS, INVENTORY_SIZE};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, codes: &[KeyCode]) {
    for &code in codes {
        assert_eq!(app.handle_key(key(code)), Control::Continue);
    }
}

fn type_str(app: &mut App, s: &str) {
    for ch in s.chars() {
        press(app, &[KeyCode::Char(ch)]);
    }
}

fn app_with(board: Board, kinds: &[ShapeKind]) -> App {
    let pieces = kinds.iter().map(|&k| Piece::from_kind(k, Tag::Violet));
    App::new(
        GameState::with_board(board, pieces, 1),
        Leaderboard::new(),
        None,
    )
}

/// Two open cells per row and column, never adjacent: a mono fits, a square
/// never does, and filling (0, 0) completes no line.
fn sparse_board() -> Board {
    let rows: Vec<String> = (0..10)
        .map(|y| {
            (0..10)
                .map(|x| if x == y || x == (y + 5) % 10 { '.' } else { '#' })
                .collect()
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    Board::from_ascii(&rows, Tag::Teal)
}

fn ended_app() -> App {
    let mut app = app_with(sparse_board(), &[ShapeKind::Mono, ShapeKind::Square]);
    press(&mut app, &[KeyCode::Enter]);
    assert!(app.game().game_over());
    app
}

#[test]
fn enter_places_selected_piece_at_cursor() {
    let mut app = app_with(Board::new(), &[ShapeKind::Line4]);
    press(
        &mut app,
        &[KeyCode::Right, KeyCode::Right, KeyCode::Down, KeyCode::Enter],
    );

    for x in 2..6 {
        assert!(app.game().board().is_occupied(x, 1));
    }
    assert_eq!(app.game().score(), 4);
    assert_eq!(app.game().inventory().len(), INVENTORY_SIZE);
}

#[test]
fn slot_keys_choose_which_piece_is_placed() {
    let mut app = app_with(
        Board::new(),
        &[ShapeKind::Mono, ShapeKind::Square, ShapeKind::Line4],
    );
    press(&mut app, &[KeyCode::Char('3'), KeyCode::Enter]);
    assert_eq!(app.game().score(), 4);
    assert_eq!(app.game().inventory().len(), 2);
    // Selection stays in range after the tray shrinks.
    assert_eq!(app.cursor().slot(), 1);

    press(&mut app, &[KeyCode::Tab, KeyCode::Char('s'), KeyCode::Enter]);
    assert_eq!(app.game().score(), 5);
    assert!(app.game().board().is_occupied(0, 1));
}

#[test]
fn blocked_placement_is_ignored() {
    let board = Board::from_ascii(&["#"], Tag::Green);
    let mut app = app_with(board, &[ShapeKind::Mono, ShapeKind::Mono]);
    assert!(!app.aim().unwrap().legal);

    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.game().score(), 0);
    assert_eq!(app.game().inventory().len(), 2);

    press(&mut app, &[KeyCode::Right]);
    assert!(app.aim().unwrap().legal);
}

#[test]
fn line_clear_flash_runs_for_its_duration() {
    let board = Board::from_ascii(&["#########."], Tag::Green);
    let mut app = app_with(board, &[ShapeKind::Mono]);
    for _ in 0..9 {
        press(&mut app, &[KeyCode::Right]);
    }
    press(&mut app, &[KeyCode::Enter]);

    let flash = app.flash().unwrap();
    assert_eq!(flash.remaining_ms, CLEAR_FLASH_MS);
    assert_eq!(flash.cleared.rows.as_slice(), &[0]);
    assert_eq!(app.game().score(), 11);

    app.tick(100);
    assert_eq!(app.flash().unwrap().remaining_ms, CLEAR_FLASH_MS - 100);
    app.tick(CLEAR_FLASH_MS);
    assert!(app.flash().is_none());
}

#[test]
fn game_over_opens_name_prompt_and_submits_score() {
    let mut app = ended_app();
    assert_eq!(app.mode(), Mode::NamePrompt);
    assert!(app.aim().is_none());

    // Letters that are also game keys are typed, not acted on.
    type_str(&mut app, "qbr z");
    assert_eq!(app.name_input(), "qbr z");
    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(app.mode(), Mode::GameOver);
    assert!(app.showing_leaderboard());
    assert_eq!(app.last_rank(), Some(0));
    let best = &app.leaderboard().entries()[0];
    assert_eq!(best.name, "qbr z");
    assert_eq!(best.score, 1);
}

#[test]
fn blank_name_submits_as_anonymous() {
    let mut app = ended_app();
    type_str(&mut app, "   ");
    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.leaderboard().entries()[0].name, "Anonymous");
}

#[test]
fn escape_skips_submission() {
    let mut app = ended_app();
    press(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.mode(), Mode::GameOver);
    assert!(app.leaderboard().is_empty());
}

#[test]
fn submitted_score_is_written_to_disk() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("block_blast_app_{nanos}"));
    let path = dir.join("scores.json");

    let game = GameState::with_board(
        sparse_board(),
        [
            Piece::from_kind(ShapeKind::Mono, Tag::Amber),
            Piece::from_kind(ShapeKind::Square, Tag::Amber),
        ],
        1,
    );
    let mut app = App::new(game, Leaderboard::new(), Some(path.clone()));
    press(&mut app, &[KeyCode::Enter]);
    type_str(&mut app, "ada");
    press(&mut app, &[KeyCode::Enter]);

    let saved = Leaderboard::load(&path).unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved.entries()[0].name, "ada");
    assert_eq!(saved.best(), Some(1));

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn restart_after_game_over() {
    let mut app = ended_app();
    press(&mut app, &[KeyCode::Esc, KeyCode::Char('r')]);

    assert_eq!(app.mode(), Mode::Playing);
    assert!(!app.game().game_over());
    assert_eq!(app.game().score(), 0);
    assert_eq!(app.game().episode_id(), 1);
    assert!(app.flash().is_none());
}

#[test]
fn leaderboard_view_blocks_placement() {
    let mut app = app_with(Board::new(), &[ShapeKind::Mono]);
    press(&mut app, &[KeyCode::Char('b')]);
    assert!(app.showing_leaderboard());
    assert!(app.hud().leaderboard.is_some());

    press(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.game().score(), 0);

    press(&mut app, &[KeyCode::Char('b'), KeyCode::Enter]);
    assert!(!app.showing_leaderboard());
    assert_eq!(app.game().score(), 1);
}

#[test]
fn quit_keys() {
    let mut app = app_with(Board::new(), &[ShapeKind::Mono]);
    assert_eq!(app.handle_key(key(KeyCode::Char('q'))), Control::Quit);

    let mut ended = ended_app();
    assert_eq!(ended.handle_key(key(KeyCode::Char('q'))), Control::Continue);
    assert_eq!(
        ended.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Control::Quit
    );
}
