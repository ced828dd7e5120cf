//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the placement-and-clearing engine: every rule about
//! what fits where, what clears, what scores, and when the game ends.
//! It has **zero dependencies** on UI, input, or persistence, making it:
//!
//! - **Deterministic**: Same seed deals identical trays
//! - **Testable**: Boards and trays can be built directly for any scenario
//! - **Synchronous**: Every operation runs to completion and returns a value
//!
//! # Module Structure
//!
//! - [`board`]: 10x10 grid with placement checks and row/column clearing
//! - [`game_state`]: Complete game state: board, tray, score, game-over flag
//! - [`inventory`]: The tray of up to three pieces, addressed by [`PieceId`]
//! - [`pieces`]: Shape matrices and the nine-template catalog
//! - [`rng`]: Seeded uniform piece generation
//! - [`scoring`]: Per-cell and per-line points
//! - [`snapshot`]: Copyable, serializable view for renderers and logs
//!
//! # Game Rules
//!
//! - **Placement**: A piece fits if every occupied cell lands on an empty,
//!   in-bounds board cell. No rotation.
//! - **Clearing**: Full rows and full columns clear together, detected on one
//!   snapshot; nothing falls.
//! - **Scoring**: 1 point per placed cell, 10 per cleared line.
//! - **Tray**: Three pieces at a time, re-dealt only when all three are used.
//! - **Game over**: No held piece fits anywhere.
//!
//! # Example
//!
//! ```
//! use block_blast_core::GameState;
//!
//! let mut game = GameState::new(12345);
//! let slot = *game.inventory().at(0).unwrap();
//!
//! // An empty board always has room for the first piece.
//! let (x, y) = game.first_fit(&slot.piece).unwrap();
//! assert!(game.can_place(&slot.piece, x, y));
//!
//! let result = game.place(slot.id, x, y).unwrap();
//! assert_eq!(game.score(), result.cells_placed);
//! assert_eq!(game.inventory().len(), 2);
//! ```

pub mod board;
pub mod game_state;
pub mod inventory;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use block_blast_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, LineClear};
pub use game_state::{GameState, PlaceError, PlacementResult};
pub use inventory::{Inventory, PieceId, Slot};
pub use pieces::{get_shape, Piece, Shape};
pub use rng::{PieceGenerator, SimpleRng};
pub use scoring::{calculate_line_bonus, calculate_placement_score, calculate_score, ScoreResult};
pub use snapshot::{GameSnapshot, SlotSnapshot};
