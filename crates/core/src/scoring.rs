//! Scoring module
//!
//! Two sources of points, both flat:
//! - 1 point per cell filled by a placement
//! - 10 points per cleared line, rows and columns counted separately
//!
//! A cell shared by a cleared row and a cleared column is emptied once but
//! both lines still score.

use crate::types::{POINTS_PER_CELL, POINTS_PER_LINE};

/// Score breakdown for one committed placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points for the cells the piece filled.
    pub placement: u32,
    /// Points for cleared lines.
    pub line_bonus: u32,
    pub total: u32,
}

/// Points for filling `cells` cells.
pub fn calculate_placement_score(cells: u32) -> u32 {
    cells.saturating_mul(POINTS_PER_CELL)
}

/// Bonus for clearing `lines` lines (rows + columns).
pub fn calculate_line_bonus(lines: u32) -> u32 {
    lines.saturating_mul(POINTS_PER_LINE)
}

/// Complete score for one placement.
pub fn calculate_score(cells: u32, lines: u32) -> ScoreResult {
    let placement = calculate_placement_score(cells);
    let line_bonus = calculate_line_bonus(lines);
    ScoreResult {
        placement,
        line_bonus,
        total: placement.saturating_add(line_bonus),
    }
}
