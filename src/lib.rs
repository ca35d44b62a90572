//! Parlor - console mini-games played over a swappable I/O port
//!
//! This crate provides:
//! - Complete two-player Tic-Tac-Toe with validated console input
//! - A branching text adventure resolved from an immutable decision tree
//! - Interactive sessions written against a [`ports::Console`] trait with
//!   stdio and scripted adapters
//! - JSON transcripts of finished sessions

pub mod adapters;
pub mod adventure;
pub mod cli;
pub mod error;
pub mod identifiers;
pub mod ports;
pub mod tictactoe;
pub mod transcript;
pub mod types;

pub use error::{Error, Result};
pub use transcript::Transcript;
pub use types::{Choice, Position};
