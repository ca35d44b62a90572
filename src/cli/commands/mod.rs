//! Command implementations for the parlor CLI

pub mod adventure;
pub mod tictactoe;
