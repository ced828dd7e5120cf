use serde::Serialize;

use crate::inventory::{PieceId, Slot};
use crate::pieces::Shape;
use crate::types::{Tag, BOARD_SIZE, INVENTORY_SIZE};

/// Read-only view of one tray slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SlotSnapshot {
    pub id: PieceId,
    pub shape: Shape,
    pub tag: Tag,
}

impl From<Slot> for SlotSnapshot {
    fn from(value: Slot) -> Self {
        Self {
            id: value.id,
            shape: value.piece.shape,
            tag: value.piece.tag,
        }
    }
}

/// Everything a renderer or observer needs, copied out of the engine.
///
/// `board` uses cell codes: 0 is empty, 1..=8 is a tag (see `cell_code`).
/// Tray positions past the current inventory length are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    pub inventory: [Option<SlotSnapshot>; INVENTORY_SIZE],
    pub score: u32,
    pub game_over: bool,
    pub episode_id: u32,
    pub seed: u32,
    pub lines_cleared: u32,
    pub pieces_placed: u32,
}

impl GameSnapshot {
    /// Number of pieces currently held.
    pub fn held(&self) -> usize {
        self.inventory.iter().flatten().count()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_SIZE as usize]; BOARD_SIZE as usize],
            inventory: [None; INVENTORY_SIZE],
            score: 0,
            game_over: false,
            episode_id: 0,
            seed: 0,
            lines_cleared: 0,
            pieces_placed: 0,
        }
    }
}
