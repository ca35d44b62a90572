//! Board representation and console rendering for the grid game

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::{BOARD_SIZE, Position};

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    /// Compact encoding character ('.' for empty).
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Character shown in the bordered console render (empty prints as a
    /// space).
    pub fn display_char(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// The 3x3 grid, stored as 9 cells in left-to-right, top-to-bottom order.
///
/// The cells are private; all access goes through [`Position`], so an
/// out-of-range index cannot reach the array. A filled cell is never
/// overwritten: [`Board::place`] requires a vacant cell, which the input
/// collection loop guarantees before calling it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new board with all cells empty.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Get the cell at a position.
    pub fn get(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Check whether a position is still empty.
    pub fn is_vacant(&self, position: Position) -> bool {
        self.get(position) == Cell::Empty
    }

    /// Check whether every cell is filled.
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Write a player's mark into a cell.
    ///
    /// Precondition: the cell is vacant. Validation happens during input
    /// collection, not here; this method only mutates.
    pub fn place(&mut self, position: Position, player: Player) {
        debug_assert!(
            self.is_vacant(position),
            "cell {position} is already occupied"
        );
        self.cells[position.index()] = player.to_cell();
    }

    /// All nine cells in storage order.
    pub fn cells(&self) -> &[Cell; BOARD_SIZE] {
        &self.cells
    }

    /// Create a board from a 9-character string ('.', 'X', 'O'; whitespace
    /// is filtered out). Intended for tests and fixtures.
    ///
    /// # Errors
    ///
    /// Returns an error if the string does not contain exactly 9 cell
    /// characters or if any character is not a valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Compact 9-character encoding, the inverse of [`Board::from_string`].
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// The bordered console render, byte for byte as the session prints it.
    ///
    /// The block is preceded and followed by a blank line; each of the three
    /// cell rows sits between filler rows, with underscore separators
    /// between board rows. Empty cells render as spaces.
    pub fn bordered(&self) -> String {
        let c = |i: usize| self.cells[i].display_char();

        let mut out = String::from("\n");
        for row in 0..3 {
            out.push_str("     |     |    \n");
            let base = row * 3;
            out.push_str(&format!(
                "  {}  |  {}  |  {}\n",
                c(base),
                c(base + 1),
                c(base + 2)
            ));
            if row < 2 {
                out.push_str("____ | ___ | ____\n");
            }
        }
        out.push_str("     |     |    \n");
        out.push('\n');
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(value: usize) -> Position {
        Position::from_input(value).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for i in 1..=9 {
            assert_eq!(board.get(pos(i)), Cell::Empty);
            assert!(board.is_vacant(pos(i)));
        }
        assert!(!board.is_full());
    }

    #[test]
    fn test_place_and_get() {
        let mut board = Board::new();
        board.place(pos(5), Player::X);
        assert_eq!(board.get(pos(5)), Cell::X);
        assert!(!board.is_vacant(pos(5)));
        assert!(board.is_vacant(pos(1)));
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(pos(1)), Cell::X);
        assert_eq!(board.get(pos(2)), Cell::O);
        assert_eq!(board.get(pos(3)), Cell::X);
        assert_eq!(board.get(pos(4)), Cell::Empty);

        // Whitespace is layout, not content
        let spaced = Board::from_string("XOX\n...\n...").unwrap();
        assert_eq!(spaced, Board::from_string("XOX......").unwrap());
    }

    #[test]
    fn test_from_string_rejects_wrong_length() {
        let err = Board::from_string("XO").unwrap_err();
        assert!(
            err.to_string().contains("expected 9 cells, got 2"),
            "unexpected message: {err}"
        );
        assert!(Board::from_string("X.........").is_err());
    }

    #[test]
    fn test_from_string_rejects_unknown_character() {
        let err = Board::from_string("XOZ......").unwrap_err();
        assert!(
            err.to_string().contains("invalid character 'Z'"),
            "unexpected message: {err}"
        );
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("X.O.X.O.X").unwrap();
        assert_eq!(board.encode(), "X.O.X.O.X");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_bordered_empty_board() {
        let render = Board::new().bordered();
        let lines: Vec<&str> = render.split('\n').collect();

        // Leading blank line, nine art lines, trailing blank line
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "     |     |    ");
        assert_eq!(lines[2], "     |     |   ");
        assert_eq!(lines[3], "____ | ___ | ____");
        assert_eq!(lines[10], "");
        assert_eq!(lines[11], "");
    }

    #[test]
    fn test_bordered_shows_marks() {
        let mut board = Board::new();
        board.place(pos(1), Player::X);
        board.place(pos(5), Player::O);
        board.place(pos(9), Player::X);

        let render = board.bordered();
        let lines: Vec<&str> = render.split('\n').collect();
        assert_eq!(lines[2], "  X  |     |   ");
        assert_eq!(lines[5], "     |  O  |   ");
        assert_eq!(lines[8], "     |     |  X");
    }

    #[test]
    fn test_bordered_is_pure() {
        let mut board = Board::new();
        board.place(pos(4), Player::X);
        assert_eq!(board.bordered(), board.bordered());
    }

    #[test]
    fn test_display_compact() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n.O.\nX..");
    }
}
