//! Adventure command - Play the branching ork-assault story

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::StdioConsole,
    adventure::{ORK_ASSAULT, StorySession},
    cli::{commands::tictactoe::write_transcript, config::TranscriptArgs},
    transcript::Transcript,
};

#[derive(Parser, Debug)]
#[command(about = "Play the branching text adventure")]
pub struct AdventureArgs {
    #[command(flatten)]
    pub transcript: TranscriptArgs,
}

pub fn execute(args: AdventureArgs) -> Result<()> {
    let mut session = StorySession::new(StdioConsole::new(), &ORK_ASSAULT);
    let summary = session.run()?;

    if let Some(ref raw) = args.transcript.transcript {
        write_transcript(raw, &Transcript::from(summary))?;
    }

    Ok(())
}
