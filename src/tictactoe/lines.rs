//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player};
use crate::types::BOARD_SIZE;

/// Winning line indices on the 3x3 board
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Check if a player has won by having three in a row.
    ///
    /// Lines are scanned rows first, then columns, then diagonals; the
    /// result does not depend on that order, and no caller needs to know
    /// which line won.
    pub fn has_won(cells: &[Cell; BOARD_SIZE], player: Player) -> bool {
        let target = player.to_cell();
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&idx| cells[idx] == target))
    }
}
