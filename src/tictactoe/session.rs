//! Interactive grid-game session over a console port

use serde::Serialize;

use super::{
    board::Player,
    game::{GridGame, Move, Outcome},
};
use crate::{Result, ports::Console, types::Position};

/// Record of a finished grid game, for reporting and transcript export.
#[derive(Debug, Clone, Serialize)]
pub struct GridSummary {
    pub moves: Vec<Move>,
    pub outcome: Outcome,
    pub final_board: String,
}

/// One interactive Tic-Tac-Toe game against a console.
///
/// The session owns the whole protocol: it renders the bordered board
/// before every move, prompts the player whose turn it is, re-prompts
/// until the input is a vacant position in range, applies the move, and
/// announces the verdict followed by a final render.
///
/// Input collection is the only place legality is checked; the state
/// machine below it trusts the collected move. Invalid input never leaves
/// the collect loop, so the session can only fail on real console errors.
pub struct GridSession<C: Console> {
    console: C,
    game: GridGame,
}

impl<C: Console> GridSession<C> {
    /// Create a session for a fresh game.
    pub fn new(console: C) -> Self {
        GridSession {
            console,
            game: GridGame::new(),
        }
    }

    /// The underlying game state.
    pub fn game(&self) -> &GridGame {
        &self.game
    }

    /// The console, for inspecting captured output in tests.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Play the game to its terminal state.
    ///
    /// # Errors
    ///
    /// Returns an error only for console failures; illegal input is
    /// consumed by the re-prompt loop and never surfaces.
    pub fn run(&mut self) -> Result<GridSummary> {
        let outcome = loop {
            if let Some(outcome) = self.game.outcome() {
                break outcome;
            }

            let render = self.game.board().bordered();
            self.console.write(&render)?;

            let position = self.collect_move()?;
            if let Some(outcome) = self.game.apply(position)? {
                let verdict = match outcome {
                    Outcome::Win(player) => format!("PLAYER {player} WINS!!\n"),
                    Outcome::Draw => "Game is a draw!\n".to_string(),
                };
                self.console.write(&verdict)?;
                let render = self.game.board().bordered();
                self.console.write(&render)?;
            }
        };

        Ok(GridSummary {
            moves: self.game.moves().to_vec(),
            outcome,
            final_board: self.game.board().encode(),
        })
    }

    /// Prompt until the player supplies a legal move.
    fn collect_move(&mut self) -> Result<Position> {
        let player = self.game.to_move();
        let prompt = format!("Player {player} Enter a value from 1-9:  ");
        self.console.write(&prompt)?;

        loop {
            let line = self.console.read_line()?;
            if let Some(position) = self.parse_move(&line) {
                self.console.write("\n")?;
                return Ok(position);
            }
            self.console.write("Invalid input, please select another:  ")?;
        }
    }

    /// Interpret one input line as a legal move, if it is one.
    ///
    /// Rejects anything that is not an integer, not in 1-9, or aimed at an
    /// occupied cell.
    fn parse_move(&self, line: &str) -> Option<Position> {
        let value: usize = line.trim().parse().ok()?;
        let position = Position::from_input(value).ok()?;
        self.game.is_legal(position).then_some(position)
    }
}
