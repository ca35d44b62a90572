//! Error types for the parlor crate

use thiserror::Error;

/// Main error type for the parlor crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("position {value} is out of range (must be 1-9)")]
    PositionOutOfRange { value: usize },

    #[error("choice {value} is out of range (must be 1-{options})")]
    ChoiceOutOfRange { value: usize, options: usize },

    #[error("game already complete")]
    GameComplete,

    #[error("no story node matches choice history [{history}]")]
    UnrecognizedHistory { history: String },

    #[error("board string has wrong length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("console input closed")]
    ConsoleClosed,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "perform I/O".to_string(),
            source,
        }
    }
}
