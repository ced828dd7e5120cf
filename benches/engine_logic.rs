use criterion::{black_box, criterion_group, criterion_main, Criterion};
use block_blast::core::{get_shape, Board, GameState, Piece};
use block_blast::term::{GameView, Hud, Viewport};
use block_blast::types::{ShapeKind, Tag};

fn bench_can_place_sweep(c: &mut Criterion) {
    let board = Board::from_ascii(
        &["#.#.#.#.#.", ".#.#.#.#.#", "#.#.#.#.#.", ".#.#.#.#.#"],
        Tag::Cyan,
    );
    let shape = get_shape(ShapeKind::Square);

    c.bench_function("can_place_full_sweep", |b| {
        b.iter(|| {
            let mut fits = 0u32;
            for y in -1..=10i8 {
                for x in -1..=10i8 {
                    fits += u32::from(board.can_place(black_box(&shape), x, y));
                }
            }
            fits
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_row_and_column", |b| {
        b.iter(|| {
            let mut rows = ["#........."; 10];
            rows[0] = "##########";
            let mut board = Board::from_ascii(black_box(&rows), Tag::Amber);
            board.clear_full_lines()
        })
    });
}

fn bench_game_over_search(c: &mut Criterion) {
    // Dense board where only a mono would fit; the search has to try every
    // origin for the wider pieces first.
    let rows: Vec<String> = (0..10)
        .map(|y| {
            (0..10)
                .map(|x| if x == y || x == (y + 5) % 10 { '.' } else { '#' })
                .collect()
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    let board = Board::from_ascii(&rows, Tag::Teal);
    let game = GameState::with_board(
        board,
        [
            Piece::from_kind(ShapeKind::Line4, Tag::Pink),
            Piece::from_kind(ShapeKind::Square, Tag::Pink),
            Piece::from_kind(ShapeKind::Mono, Tag::Pink),
        ],
        1,
    );

    c.bench_function("has_valid_moves_dense", |b| {
        b.iter(|| black_box(&game).has_valid_moves())
    });
}

fn bench_play_episode(c: &mut Criterion) {
    c.bench_function("first_fit_episode_100_moves", |b| {
        b.iter(|| {
            let mut game = GameState::new(black_box(12345));
            for _ in 0..100 {
                let Some((slot, (x, y))) = game
                    .inventory()
                    .iter()
                    .find_map(|s| game.first_fit(&s.piece).map(|pos| (*s, pos)))
                else {
                    break;
                };
                if game.place(slot.id, x, y).is_err() {
                    break;
                }
            }
            game.score()
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = GameState::new(7).snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, &Hud::default(), Viewport::new(80, 24));

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), &Hud::default(), Viewport::new(80, 24), &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_can_place_sweep,
    bench_line_clear,
    bench_game_over_search,
    bench_play_episode,
    bench_render
);
criterion_main!(benches);
