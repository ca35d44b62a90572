//! Turn and termination state machine for the grid game

use serde::{Deserialize, Serialize};

use super::{
    board::{Board, Player},
    lines::LineAnalyzer,
};
use crate::types::{BOARD_SIZE, Position};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Position,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
}

/// The grid game state machine.
///
/// Holds the board, the move log, and the explicit phase: `outcome` is
/// `None` while the game is in progress and becomes `Some` exactly once,
/// either when a move completes a line or when the ninth move fills the
/// board without one. The player to move is derived from the parity of the
/// turn count: even counts are `X`, odd counts are `O`.
#[derive(Debug, Clone)]
pub struct GridGame {
    board: Board,
    turn_count: usize,
    moves: Vec<Move>,
    outcome: Option<Outcome>,
}

impl GridGame {
    /// Create a new game with an empty board and `X` to move.
    pub fn new() -> Self {
        GridGame {
            board: Board::new(),
            turn_count: 0,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of accepted moves so far (0-9).
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    /// Whose turn it is, by turn-count parity.
    pub fn to_move(&self) -> Player {
        if self.turn_count.is_multiple_of(2) {
            Player::X
        } else {
            Player::O
        }
    }

    /// The accepted moves in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The final outcome, or `None` while the game is in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the game has reached a terminal state.
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    /// Whether a validated position is currently a legal move.
    ///
    /// Range is already guaranteed by [`Position`]; the only remaining
    /// legality condition is that the cell is vacant.
    pub fn is_legal(&self, position: Position) -> bool {
        self.board.is_vacant(position)
    }

    /// Play the current player's mark at a position.
    ///
    /// The position must have passed [`GridGame::is_legal`]; like the board
    /// itself, this method separates mutation from validation and does not
    /// re-check occupancy. The mover's lines are checked before the draw
    /// condition, so a winning ninth move is reported as a win, never as a
    /// draw.
    ///
    /// Returns the outcome reached by this move, or `None` if the game
    /// continues.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameComplete`] if the game already has an
    /// outcome.
    pub fn apply(&mut self, position: Position) -> Result<Option<Outcome>, crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameComplete);
        }
        debug_assert!(
            self.is_legal(position),
            "move {position} reached apply without validation"
        );

        let player = self.to_move();
        self.board.place(position, player);
        self.moves.push(Move { position, player });
        self.turn_count += 1;

        if LineAnalyzer::has_won(self.board.cells(), player) {
            self.outcome = Some(Outcome::Win(player));
        } else if self.turn_count == BOARD_SIZE {
            self.outcome = Some(Outcome::Draw);
        }

        Ok(self.outcome)
    }
}

impl Default for GridGame {
    fn default() -> Self {
        Self::new()
    }
}
