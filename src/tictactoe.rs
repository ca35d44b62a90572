//! Two-player console Tic-Tac-Toe

pub mod board;
pub mod game;
pub mod lines;
pub mod session;

pub use board::{Board, Cell, Player};
pub use game::{GridGame, Move, Outcome};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use session::{GridSession, GridSummary};
