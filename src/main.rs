//! Terminal Block Blast runner (default binary).
//!
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout).

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use block_blast::app::{App, Control};
use block_blast::config::Cli;
use block_blast::core::GameState;
use block_blast::leaderboard::Leaderboard;
use block_blast::logging;
use block_blast::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use block_blast::types::TICK_MS;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref(), cli.log_level())?;

    let leaderboard = Leaderboard::load(&cli.leaderboard)
        .with_context(|| format!("Failed to load leaderboard {}", cli.leaderboard.display()))?;

    if cli.scores {
        print_scores(&leaderboard);
        return Ok(());
    }

    let seed = cli.seed();
    info!(seed, leaderboard = %cli.leaderboard.display(), "starting");
    let mut app = App::new(GameState::new(seed), leaderboard, Some(cli.leaderboard.clone()));
    let view = GameView::new(cli.cell_width);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app, &view);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(error = %err, "failed to restore terminal");
    }
    info!(score = app.game().score(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App, view: &GameView) -> Result<()> {
    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(view, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key) == Control::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            app.tick(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }
    }
}

fn print_scores(leaderboard: &Leaderboard) {
    if leaderboard.is_empty() {
        println!("No scores yet.");
        return;
    }
    for (i, entry) in leaderboard.entries().iter().enumerate() {
        println!("{:>2}. {:<24} {:>6}", i + 1, entry.name, entry.score);
    }
}
