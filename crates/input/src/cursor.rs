//! Aiming state: which tray slot is picked up and where it is held.
//!
//! The cursor is the board cell under the piece's top-left matrix cell. It is
//! clamped to the board, but a piece at the cursor may still hang off the
//! right or bottom edge; the engine decides whether that fits.

use crate::types::{GameAction, BOARD_SIZE, INVENTORY_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    x: i8,
    y: i8,
    slot: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    pub fn new() -> Self {
        Self { x: 0, y: 0, slot: 0 }
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Selected tray position (0-based).
    pub fn slot(&self) -> usize {
        self.slot
    }

    pub fn set_position(&mut self, x: i8, y: i8) {
        let max = BOARD_SIZE as i8 - 1;
        self.x = x.clamp(0, max);
        self.y = y.clamp(0, max);
    }

    /// Move by (dx, dy), clamped to the board.
    pub fn shift(&mut self, dx: i8, dy: i8) {
        self.set_position(self.x.saturating_add(dx), self.y.saturating_add(dy));
    }

    /// Select `slot` if the tray currently holds that many pieces.
    pub fn select(&mut self, slot: usize, held: usize) -> bool {
        if slot < held.min(INVENTORY_SIZE) {
            self.slot = slot;
            true
        } else {
            false
        }
    }

    /// Advance to the next tray position, wrapping.
    pub fn cycle(&mut self, held: usize) {
        if held == 0 {
            self.slot = 0;
            return;
        }
        self.slot = (self.slot + 1) % held;
    }

    /// Keep the selection valid after the tray shrinks or is re-dealt.
    pub fn fit_to(&mut self, held: usize) {
        if self.slot >= held {
            self.slot = held.saturating_sub(1);
        }
    }

    /// Apply a cursor-only action. Returns false for actions it does not own.
    pub fn apply(&mut self, action: GameAction, held: usize) -> bool {
        match action {
            GameAction::CursorLeft => self.shift(-1, 0),
            GameAction::CursorRight => self.shift(1, 0),
            GameAction::CursorUp => self.shift(0, -1),
            GameAction::CursorDown => self.shift(0, 1),
            GameAction::SelectSlot(slot) => {
                self.select(slot as usize, held);
            }
            GameAction::CycleSlot => self.cycle(held),
            _ => return false,
        }
        true
    }
}
