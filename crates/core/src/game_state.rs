//! Game state module - the placement-and-clearing engine
//!
//! This module ties together all core components: board, tray, generator, and
//! scoring. A placement is one synchronous transaction:
//!
//! 1. fill the piece's cells with its tag
//! 2. score 1 point per cell
//! 3. clear every full row and column found on that board, 10 points per line
//! 4. drop the piece from the tray by id
//! 5. deal three new pieces if the tray is now empty
//! 6. re-run the game-over search
//!
//! Once the game is over every query and mutation is refused until
//! [`GameState::restart`].

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::board::{Board, LineClear};
use crate::inventory::{Inventory, PieceId, Slot};
use crate::pieces::Piece;
use crate::rng::PieceGenerator;
use crate::scoring::{
    calculate_line_bonus, calculate_placement_score, calculate_score, ScoreResult,
};
use crate::snapshot::{GameSnapshot, SlotSnapshot};
use crate::types::{BOARD_SIZE, INVENTORY_SIZE};

/// Why a placement was refused. The state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("game is over")]
    GameOver,
    #[error("piece {0:?} is not in the tray")]
    UnknownPiece(PieceId),
    #[error("piece does not fit at ({x}, {y})")]
    Blocked { x: i8, y: i8 },
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::GameOver => "game_over",
            PlaceError::UnknownPiece(_) => "unknown_piece",
            PlaceError::Blocked { .. } => "blocked",
        }
    }
}

/// Outcome of one committed placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementResult {
    pub piece_id: PieceId,
    pub cells_placed: u32,
    /// Rows and columns emptied by this placement.
    pub cleared: LineClear,
    pub score: ScoreResult,
    /// A fresh tray was dealt because the placed piece was the last one.
    pub refilled: bool,
    /// The game ended as a result of this placement.
    pub game_over: bool,
}

impl PlacementResult {
    pub fn lines_cleared(&self) -> u32 {
        self.cleared.lines()
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    inventory: Inventory,
    generator: PieceGenerator,
    /// Next handle to hand out (monotonic across restarts).
    next_piece_id: u32,
    score: u32,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    lines_cleared: u32,
    pieces_placed: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed and deal the first tray
    pub fn new(seed: u32) -> Self {
        let mut state = Self::empty(seed);
        state.refill_inventory();
        state
    }

    /// Create a game from an existing board and tray.
    ///
    /// At most three pieces are taken; an empty `pieces` deals a normal tray.
    /// Lines already full on `board` are emptied without scoring. The
    /// game-over search runs immediately, so a tray that cannot be placed
    /// anywhere starts terminal.
    pub fn with_board(board: Board, pieces: impl IntoIterator<Item = Piece>, seed: u32) -> Self {
        let mut state = Self::empty(seed);
        state.board = board;
        let stale = state.board.clear_full_lines();
        if !stale.is_empty() {
            debug!(lines = stale.lines(), "dropped full lines from initial board");
        }
        for piece in pieces.into_iter().take(INVENTORY_SIZE) {
            state.deal(piece);
        }
        if state.inventory.is_empty() {
            state.refill_inventory();
        } else {
            state.check_game_over();
        }
        state
    }

    fn empty(seed: u32) -> Self {
        Self {
            board: Board::new(),
            inventory: Inventory::new(),
            generator: PieceGenerator::new(seed),
            next_piece_id: 1,
            score: 0,
            game_over: false,
            episode_id: 0,
            lines_cleared: 0,
            pieces_placed: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn seed(&self) -> u32 {
        self.generator.seed()
    }

    /// Check whether `piece` fits at origin (x, y).
    ///
    /// Pure query for live preview. Always false once the game is over.
    pub fn can_place(&self, piece: &Piece, x: i8, y: i8) -> bool {
        !self.game_over && self.board.can_place(&piece.shape, x, y)
    }

    /// Commit a held piece at origin (x, y).
    ///
    /// Refused with no state change if the game is over, `id` is not in the
    /// tray, or the piece does not fit.
    pub fn place(&mut self, id: PieceId, x: i8, y: i8) -> Result<PlacementResult, PlaceError> {
        if self.game_over {
            return Err(PlaceError::GameOver);
        }
        let piece = *self.inventory.get(id).ok_or(PlaceError::UnknownPiece(id))?;

        let cells_placed = self
            .board
            .fill_piece(&piece.shape, x, y, piece.tag)
            .ok_or(PlaceError::Blocked { x, y })?;
        self.score = self
            .score
            .saturating_add(calculate_placement_score(cells_placed));

        let cleared = self.clear_full_lines();
        let score = calculate_score(cells_placed, cleared.lines());

        self.inventory.remove(id);
        self.pieces_placed = self.pieces_placed.saturating_add(1);
        trace!(
            piece = id.0,
            x,
            y,
            cells = cells_placed,
            lines = cleared.lines(),
            "placed piece"
        );

        let refilled = self.refill_inventory();
        let game_over = self.check_game_over();

        Ok(PlacementResult {
            piece_id: id,
            cells_placed,
            cleared,
            score,
            refilled,
            game_over,
        })
    }

    /// Clear every full row and column and award the line bonus.
    ///
    /// All full lines are found on one board snapshot before any cell is
    /// reset, so a row and a column completed together both count. Does
    /// nothing once the game is over.
    pub fn clear_full_lines(&mut self) -> LineClear {
        if self.game_over {
            return LineClear::default();
        }
        let cleared = self.board.clear_full_lines();
        let lines = cleared.lines();
        if lines > 0 {
            self.score = self.score.saturating_add(calculate_line_bonus(lines));
            self.lines_cleared = self.lines_cleared.saturating_add(lines);
            debug!(
                rows = ?cleared.rows.as_slice(),
                cols = ?cleared.cols.as_slice(),
                score = self.score,
                "cleared lines"
            );
        }
        cleared
    }

    /// Deal three fresh pieces, but only into an empty tray of a live game.
    ///
    /// Runs the game-over search right after dealing, since a fresh tray can
    /// already be unplaceable. Returns whether a tray was dealt.
    pub fn refill_inventory(&mut self) -> bool {
        if self.game_over || !self.inventory.is_empty() {
            return false;
        }
        for _ in 0..INVENTORY_SIZE {
            let piece = self.generator.draw();
            self.deal(piece);
        }
        debug!(
            first_id = self.next_piece_id.wrapping_sub(INVENTORY_SIZE as u32),
            "dealt tray"
        );
        self.check_game_over();
        true
    }

    fn deal(&mut self, piece: Piece) {
        let id = PieceId(self.next_piece_id);
        self.next_piece_id = self.next_piece_id.wrapping_add(1);
        self.inventory.push(Slot { id, piece });
    }

    /// Whether any held piece fits anywhere on the board.
    ///
    /// Exhaustive over every (piece, origin) pair. Counting empty cells is not
    /// enough since the shape of the free space matters.
    pub fn has_valid_moves(&self) -> bool {
        self.inventory
            .iter()
            .any(|slot| self.first_fit(&slot.piece).is_some())
    }

    /// First origin (row-major) where `piece` fits, ignoring the game-over flag.
    pub fn first_fit(&self, piece: &Piece) -> Option<(i8, i8)> {
        let shape = &piece.shape;
        let n = BOARD_SIZE as i8;
        // Every origin on the board: a shape whose last row or column is
        // empty may still fit with its bounding box hanging off the edge.
        (0..n)
            .flat_map(|y| (0..n).map(move |x| (x, y)))
            .find(|&(x, y)| self.board.can_place(shape, x, y))
    }

    /// Run the game-over search and latch the terminal flag.
    ///
    /// An empty tray is never terminal. Once terminal, further checks are
    /// no-ops. Returns the (possibly updated) terminal flag.
    pub fn check_game_over(&mut self) -> bool {
        if self.game_over || self.inventory.is_empty() {
            return self.game_over;
        }
        if !self.has_valid_moves() {
            self.game_over = true;
            info!(
                score = self.score,
                lines = self.lines_cleared,
                pieces = self.pieces_placed,
                episode = self.episode_id,
                "game over"
            );
        }
        self.game_over
    }

    /// Start a fresh game: empty board, new tray, zero score.
    ///
    /// The generator keeps running, so consecutive games deal different trays.
    pub fn restart(&mut self) {
        self.board.clear();
        self.inventory.clear();
        self.score = 0;
        self.game_over = false;
        self.lines_cleared = 0;
        self.pieces_placed = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        debug!(episode = self.episode_id, "restart");
        self.refill_inventory();
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.inventory = [None; INVENTORY_SIZE];
        for (dst, slot) in out.inventory.iter_mut().zip(self.inventory.iter()) {
            *dst = Some(SlotSnapshot::from(*slot));
        }
        out.score = self.score;
        out.game_over = self.game_over;
        out.episode_id = self.episode_id;
        out.seed = self.generator.seed();
        out.lines_cleared = self.lines_cleared;
        out.pieces_placed = self.pieces_placed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
