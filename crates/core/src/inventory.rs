//! Inventory module - the tray of up to three held pieces
//!
//! Slots are addressed by a [`PieceId`] handed out when the piece is dealt,
//! never by shape. Two slots holding identical shapes and tags are still
//! different pieces.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::pieces::Piece;
use crate::types::INVENTORY_SIZE;

/// Stable handle for one dealt piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PieceId(pub u32);

/// A held piece and its handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Slot {
    pub id: PieceId,
    pub piece: Piece,
}

/// Ordered tray; size is always 0..=3.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    slots: ArrayVec<Slot, INVENTORY_SIZE>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slot> {
        self.slots.iter()
    }

    /// Slot at tray position `index`.
    pub fn at(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Look up a held piece by handle.
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.slots.iter().find(|s| s.id == id).map(|s| &s.piece)
    }

    pub fn position(&self, id: PieceId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }

    /// Remove a held piece by handle, keeping the order of the others.
    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        let idx = self.position(id)?;
        Some(self.slots.remove(idx).piece)
    }

    /// Append a slot. Callers only deal into an empty tray.
    pub(crate) fn push(&mut self, slot: Slot) {
        debug_assert!(!self.slots.is_full(), "inventory over capacity");
        self.slots.push(slot);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }
}
