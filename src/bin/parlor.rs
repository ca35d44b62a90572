//! Parlor CLI - Console mini-games played over stdin/stdout
//!
//! This CLI provides a unified interface for:
//! - Playing two-player Tic-Tac-Toe on a 3x3 grid
//! - Playing a branching text adventure
//! - Exporting JSON transcripts of finished sessions

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "parlor")]
#[command(version, about = "Console mini-games over stdin/stdout", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a two-player Tic-Tac-Toe game
    Tictactoe(parlor::cli::commands::tictactoe::TictactoeArgs),

    /// Play the branching text adventure
    Adventure(parlor::cli::commands::adventure::AdventureArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Tictactoe(args) => parlor::cli::commands::tictactoe::execute(args),
        Commands::Adventure(args) => parlor::cli::commands::adventure::execute(args),
    }
}
