//! Session controller: one game plus everything around it.
//!
//! The engine answers rule questions; `App` decides what a key means right
//! now (aiming, typing a name, browsing scores), runs the clear flash, and
//! hands final scores to the leaderboard.

use std::path::PathBuf;

use crossterm::event::KeyEvent;
use tracing::{debug, info, warn};

use crate::core::{GameState, LineClear};
use crate::input::{handle_key_event, is_interrupt, should_quit, Cursor, NameEntry, NameEvent};
use crate::leaderboard::{now_ms, Leaderboard, LeaderboardEntry};
use crate::term::{Aim, FrameBuffer, GameView, Hud, Viewport};
use crate::types::{GameAction, CLEAR_FLASH_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Aiming and placing pieces.
    Playing,
    /// The game ended and the player is typing a name.
    NamePrompt,
    /// The game ended; only restart, leaderboard and quit do anything.
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Cells of the last clear, shown until the timer runs out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub cleared: LineClear,
    pub remaining_ms: u32,
}

pub struct App {
    game: GameState,
    cursor: Cursor,
    mode: Mode,
    name: NameEntry,
    leaderboard: Leaderboard,
    /// Where submitted scores are written; `None` keeps them in memory.
    leaderboard_path: Option<PathBuf>,
    show_leaderboard: bool,
    flash: Option<Flash>,
    last_rank: Option<usize>,
}

impl App {
    pub fn new(game: GameState, leaderboard: Leaderboard, leaderboard_path: Option<PathBuf>) -> Self {
        let mode = if game.game_over() {
            Mode::NamePrompt
        } else {
            Mode::Playing
        };
        Self {
            game,
            cursor: Cursor::new(),
            mode,
            name: NameEntry::new(),
            leaderboard,
            leaderboard_path,
            show_leaderboard: false,
            flash: None,
            last_rank: None,
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn showing_leaderboard(&self) -> bool {
        self.show_leaderboard
    }

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    pub fn name_input(&self) -> &str {
        self.name.as_str()
    }

    /// Rank (0-based) of the last submitted score, if it made the list.
    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    /// Route one key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if is_interrupt(key) {
            return Control::Quit;
        }
        if self.mode == Mode::NamePrompt {
            match self.name.handle_key(key) {
                NameEvent::Editing => {}
                NameEvent::Submit(name) => self.submit_score(&name),
                NameEvent::Cancel => {
                    debug!("name prompt skipped");
                    self.mode = Mode::GameOver;
                }
            }
            return Control::Continue;
        }
        if should_quit(key) {
            return Control::Quit;
        }
        if let Some(action) = handle_key_event(key) {
            self.handle_action(action);
        }
        Control::Continue
    }

    pub fn handle_action(&mut self, action: GameAction) {
        match action {
            GameAction::Restart => self.restart(),
            GameAction::ToggleLeaderboard => {
                if self.mode != Mode::NamePrompt {
                    self.show_leaderboard = !self.show_leaderboard;
                }
            }
            GameAction::Place => {
                if self.mode == Mode::Playing && !self.show_leaderboard {
                    self.place_selected();
                }
            }
            other => {
                if self.mode == Mode::Playing && !self.show_leaderboard {
                    self.cursor.apply(other, self.game.inventory().len());
                }
            }
        }
    }

    /// Advance timers by `elapsed_ms`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(flash) = &mut self.flash {
            flash.remaining_ms = flash.remaining_ms.saturating_sub(elapsed_ms);
            if flash.remaining_ms == 0 {
                self.flash = None;
            }
        }
    }

    /// Current aim, with legality of the selected piece at the cursor.
    pub fn aim(&self) -> Option<Aim> {
        if self.mode != Mode::Playing {
            return None;
        }
        let slot = self.game.inventory().at(self.cursor.slot())?;
        Some(Aim {
            x: self.cursor.x(),
            y: self.cursor.y(),
            slot: self.cursor.slot(),
            legal: self.game.can_place(&slot.piece, self.cursor.x(), self.cursor.y()),
        })
    }

    pub fn hud(&self) -> Hud<'_> {
        Hud {
            aim: self.aim(),
            flash: self.flash.as_ref().map(|f| &f.cleared),
            best: self.leaderboard.best(),
            name_prompt: (self.mode == Mode::NamePrompt).then(|| self.name.as_str()),
            leaderboard: self.show_leaderboard.then(|| self.leaderboard.entries()),
        }
    }

    pub fn render_into(&self, view: &GameView, viewport: Viewport, fb: &mut FrameBuffer) {
        view.render_into(&self.game.snapshot(), &self.hud(), viewport, fb);
    }

    fn place_selected(&mut self) {
        let Some(slot) = self.game.inventory().at(self.cursor.slot()).copied() else {
            return;
        };
        match self.game.place(slot.id, self.cursor.x(), self.cursor.y()) {
            Ok(result) => {
                if !result.cleared.is_empty() {
                    self.flash = Some(Flash {
                        cleared: result.cleared,
                        remaining_ms: CLEAR_FLASH_MS,
                    });
                }
                self.cursor.fit_to(self.game.inventory().len());
                if result.game_over {
                    self.enter_game_over();
                }
            }
            Err(err) => debug!(error = %err, code = err.code(), "placement rejected"),
        }
    }

    fn enter_game_over(&mut self) {
        info!(
            score = self.game.score(),
            lines = self.game.lines_cleared(),
            pieces = self.game.pieces_placed(),
            "game over"
        );
        self.name = NameEntry::new();
        self.mode = Mode::NamePrompt;
    }

    fn submit_score(&mut self, name: &str) {
        let entry = LeaderboardEntry::new(name, self.game.score(), now_ms());
        info!(name = %entry.name, score = entry.score, "submitting score");
        self.last_rank = self.leaderboard.submit(entry);
        if self.last_rank.is_some() {
            if let Some(path) = &self.leaderboard_path {
                if let Err(err) = self.leaderboard.save(path) {
                    warn!(error = %format!("{err:#}"), "could not save leaderboard");
                }
            }
        }
        self.mode = Mode::GameOver;
        self.show_leaderboard = true;
    }

    fn restart(&mut self) {
        if self.mode == Mode::NamePrompt {
            return;
        }
        self.game.restart();
        self.cursor = Cursor::new();
        self.mode = Mode::Playing;
        self.flash = None;
        self.show_leaderboard = false;
        self.last_rank = None;
        info!(episode = self.game.episode_id(), "restarted");
    }
}
