//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond conversions, making them
//! usable in any context (engine logic, terminal rendering, persistence).
//!
//! # Board Dimensions
//!
//! The playfield is a square grid:
//!
//! - **Size**: 10 columns by 10 rows (indexed 0-9 on both axes)
//! - **Origin**: (0, 0) is the top-left cell, x grows right, y grows down
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_CELL` | 1 | Awarded for every cell a placement fills |
//! | `POINTS_PER_LINE` | 10 | Awarded for every full row or column cleared |
//!
//! # Timing Constants
//!
//! The engine itself is untimed. These values only drive the terminal loop:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `CLEAR_FLASH_MS` | 280 | How long cleared cells flash after a commit |
//!
//! # Examples
//!
//! ```
//! use block_blast_types::{ShapeKind, Tag, BOARD_SIZE, INVENTORY_SIZE};
//!
//! assert_eq!(BOARD_SIZE, 10);
//! assert_eq!(INVENTORY_SIZE, 3);
//!
//! let tag = Tag::from_str("#4caf50").unwrap();
//! assert_eq!(tag, Tag::Green);
//! assert_eq!(ShapeKind::from_str("line4"), Some(ShapeKind::Line4));
//! ```

use serde::{Deserialize, Serialize};

/// Board side length in cells (10x10)
pub const BOARD_SIZE: u8 = 10;

/// Number of pieces dealt into the tray at once
pub const INVENTORY_SIZE: usize = 3;

/// Points for each cell filled by a placement
pub const POINTS_PER_CELL: u32 = 1;

/// Points for each full row or column cleared
pub const POINTS_PER_LINE: u32 = 10;

/// Largest side of any shape matrix
pub const MAX_SHAPE_DIM: u8 = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Duration of the "pop" highlight on cleared cells
pub const CLEAR_FLASH_MS: u32 = 280;

/// Number of entries kept on the leaderboard
pub const LEADERBOARD_CAPACITY: usize = 10;

/// Name used when the player submits a blank name
pub const DEFAULT_PLAYER_NAME: &str = "Anonymous";

/// Longest player name, in characters
pub const MAX_NAME_CHARS: usize = 24;


/// The nine shape templates pieces are drawn from
///
/// Layouts (`#` filled, `.` empty):
/// - **Mono**: `#`
/// - **DominoH**: `##`
/// - **DominoV**: vertical `##`
/// - **Square**: 2x2 block
/// - **TriominoH**: `###`
/// - **CornerL**: `#.` over `##`
/// - **CornerJ**: `.#` over `##`
/// - **TriominoV**: vertical `###`
/// - **Line4**: `####`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Mono,
    DominoH,
    DominoV,
    Square,
    TriominoH,
    CornerL,
    CornerJ,
    TriominoV,
    Line4,
}

impl ShapeKind {
    /// Every catalog entry, in draw-index order.
    pub const ALL: [ShapeKind; 9] = [
        ShapeKind::Mono,
        ShapeKind::DominoH,
        ShapeKind::DominoV,
        ShapeKind::Square,
        ShapeKind::TriominoH,
        ShapeKind::CornerL,
        ShapeKind::CornerJ,
        ShapeKind::TriominoV,
        ShapeKind::Line4,
    ];

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_blast_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("SQUARE"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("corner_j"), Some(ShapeKind::CornerJ));
    /// assert_eq!(ShapeKind::from_str("pentomino"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mono" => Some(ShapeKind::Mono),
            "domino_h" => Some(ShapeKind::DominoH),
            "domino_v" => Some(ShapeKind::DominoV),
            "square" => Some(ShapeKind::Square),
            "triomino_h" => Some(ShapeKind::TriominoH),
            "corner_l" => Some(ShapeKind::CornerL),
            "corner_j" => Some(ShapeKind::CornerJ),
            "triomino_v" => Some(ShapeKind::TriominoV),
            "line4" => Some(ShapeKind::Line4),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Mono => "mono",
            ShapeKind::DominoH => "domino_h",
            ShapeKind::DominoV => "domino_v",
            ShapeKind::Square => "square",
            ShapeKind::TriominoH => "triomino_h",
            ShapeKind::CornerL => "corner_l",
            ShapeKind::CornerJ => "corner_j",
            ShapeKind::TriominoV => "triomino_v",
            ShapeKind::Line4 => "line4",
        }
    }
}

/// Display tag carried by a piece and by every cell it fills.
///
/// The engine treats tags as opaque; only the renderer cares about the color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Orange,
    Green,
    Purple,
    Amber,
    Cyan,
    Pink,
    Teal,
    Violet,
}

impl Tag {
    /// Every catalog color, in draw-index order.
    pub const ALL: [Tag; 8] = [
        Tag::Orange,
        Tag::Green,
        Tag::Purple,
        Tag::Amber,
        Tag::Cyan,
        Tag::Pink,
        Tag::Teal,
        Tag::Violet,
    ];

    /// Parse a tag from its name or its `#rrggbb` hex code (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s || tag.hex() == s)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Orange => "orange",
            Tag::Green => "green",
            Tag::Purple => "purple",
            Tag::Amber => "amber",
            Tag::Cyan => "cyan",
            Tag::Pink => "pink",
            Tag::Teal => "teal",
            Tag::Violet => "violet",
        }
    }

    /// Lowercase `#rrggbb` color code.
    pub fn hex(&self) -> &'static str {
        match self {
            Tag::Orange => "#ff5722",
            Tag::Green => "#4caf50",
            Tag::Purple => "#9c27b0",
            Tag::Amber => "#ffc107",
            Tag::Cyan => "#00bcd4",
            Tag::Pink => "#e91e63",
            Tag::Teal => "#26c6da",
            Tag::Violet => "#ab47bc",
        }
    }

    /// RGB components of [`Tag::hex`].
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Tag::Orange => (0xff, 0x57, 0x22),
            Tag::Green => (0x4c, 0xaf, 0x50),
            Tag::Purple => (0x9c, 0x27, 0xb0),
            Tag::Amber => (0xff, 0xc1, 0x07),
            Tag::Cyan => (0x00, 0xbc, 0xd4),
            Tag::Pink => (0xe9, 0x1e, 0x63),
            Tag::Teal => (0x26, 0xc6, 0xda),
            Tag::Violet => (0xab, 0x47, 0xbc),
        }
    }

    fn index(&self) -> u8 {
        match self {
            Tag::Orange => 0,
            Tag::Green => 1,
            Tag::Purple => 2,
            Tag::Amber => 3,
            Tag::Cyan => 4,
            Tag::Pink => 5,
            Tag::Teal => 6,
            Tag::Violet => 7,
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Tag)`: Filled cell with its display tag
///
/// A filled cell can never lose its tag and an empty cell can never carry one.
pub type Cell = Option<Tag>;

/// Compact code for a cell: 0 = empty, 1..=8 = tag index + 1.
pub fn cell_code(cell: Cell) -> u8 {
    cell.map_or(0, |tag| tag.index() + 1)
}

/// Inverse of [`cell_code`]; unknown codes decode as empty.
pub fn cell_from_code(code: u8) -> Cell {
    match code {
        0 => None,
        n => Tag::ALL.get(usize::from(n - 1)).copied(),
    }
}

/// UI actions produced by the input layer
///
/// These never touch the engine directly; the session controller translates
/// them into engine calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the aiming cursor one cell left
    CursorLeft,
    /// Move the aiming cursor one cell right
    CursorRight,
    /// Move the aiming cursor one cell up
    CursorUp,
    /// Move the aiming cursor one cell down
    CursorDown,
    /// Select tray slot by position (0-based)
    SelectSlot(u8),
    /// Select the next non-empty tray slot
    CycleSlot,
    /// Commit the selected piece at the cursor
    Place,
    /// Start a fresh game
    Restart,
    /// Show or hide the leaderboard
    ToggleLeaderboard,
}
