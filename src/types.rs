//! Newtype wrappers for validated console input.
//!
//! Both games read 1-based integers from the console and index 0-based
//! storage. These types make that conversion a single validated step:
//! construction checks the range, and the 0-based index is only available
//! from an already-valid value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Board size constant for Tic-Tac-Toe.
pub const BOARD_SIZE: usize = 9;

/// A board position as the player enters it (1-9, left-to-right,
/// top-to-bottom).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(usize);

impl Position {
    /// Create a position from 1-based console input.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::PositionOutOfRange`] if the value is 0 or
    /// greater than 9.
    pub fn from_input(value: usize) -> Result<Self, crate::Error> {
        if (1..=BOARD_SIZE).contains(&value) {
            Ok(Position(value))
        } else {
            Err(crate::Error::PositionOutOfRange { value })
        }
    }

    /// The 0-based cell index this position refers to.
    pub fn index(&self) -> usize {
        self.0 - 1
    }

    /// The 1-based value as the player entered it.
    pub fn display_value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A story choice as the player enters it (1-based, bounded by the number
/// of options the current node offers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Choice(usize);

impl Choice {
    /// Create a choice from 1-based console input, bounded by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ChoiceOutOfRange`] if the value is 0 or
    /// greater than `options`.
    pub fn from_input(value: usize, options: usize) -> Result<Self, crate::Error> {
        if (1..=options).contains(&value) {
            Ok(Choice(value))
        } else {
            Err(crate::Error::ChoiceOutOfRange { value, options })
        }
    }

    /// The 0-based arm index this choice selects.
    pub fn index(&self) -> usize {
        self.0 - 1
    }

    /// The 1-based value as the player entered it.
    pub fn display_value(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
