//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`], tracks where the
//! player is aiming the selected piece, and edits the game-over name prompt.

pub mod cursor;
pub mod map;
pub mod name_entry;

pub use block_blast_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, is_interrupt, should_quit};
pub use name_entry::{NameEntry, NameEvent};
