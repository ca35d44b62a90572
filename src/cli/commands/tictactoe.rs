//! Tictactoe command - Play an interactive two-player game

use std::path::Path;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::StdioConsole,
    cli::config::TranscriptArgs,
    tictactoe::GridSession,
    transcript::{Transcript, normalize_transcript_path},
};

#[derive(Parser, Debug)]
#[command(about = "Play a two-player Tic-Tac-Toe game")]
pub struct TictactoeArgs {
    #[command(flatten)]
    pub transcript: TranscriptArgs,
}

pub fn execute(args: TictactoeArgs) -> Result<()> {
    let mut session = GridSession::new(StdioConsole::new());
    let summary = session.run()?;

    if let Some(ref raw) = args.transcript.transcript {
        write_transcript(raw, &Transcript::from(summary))?;
    }

    Ok(())
}

pub(crate) fn write_transcript(raw: &Path, transcript: &Transcript) -> Result<()> {
    let path = normalize_transcript_path(raw);
    if path != *raw {
        println!("\n⚠️  Normalizing transcript path to {}", path.display());
    }

    transcript.write_json(&path)?;
    println!("\nTranscript written to {}", path.display());

    Ok(())
}
