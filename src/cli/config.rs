//! Shared configuration types for CLI commands

use std::path::PathBuf;

use clap::Args;

/// Transcript export options shared across game commands
#[derive(Args, Debug, Clone)]
pub struct TranscriptArgs {
    /// Write a JSON transcript of the finished session to this path
    #[arg(long, short = 't', value_name = "PATH")]
    pub transcript: Option<PathBuf>,
}
