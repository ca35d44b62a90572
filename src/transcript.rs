//! Session transcripts - serializable records of finished games
//!
//! Both engines report a finished session through a summary value. A
//! [`Transcript`] wraps either summary behind a `game` tag so a single
//! JSON file identifies which engine produced it, and
//! [`Transcript::write_json`] exports the record as pretty-printed JSON.

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    adventure::StorySummary,
    error::{Error, Result},
    tictactoe::GridSummary,
};

/// A finished session in serializable form, tagged by engine.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "game", rename_all = "kebab-case")]
pub enum Transcript {
    /// A completed Tic-Tac-Toe game.
    Tictactoe(GridSummary),
    /// A completed story playthrough.
    Adventure(StorySummary),
}

impl Transcript {
    /// Writes the transcript to `path` as pretty-printed JSON.
    ///
    /// The path is normalized first (see [`normalize_transcript_path`]) and
    /// missing parent directories are created. Returns the path actually
    /// written, which differs from `path` when normalization adjusted it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the parent directory or the file cannot be
    /// created, or [`Error::Serialization`] if encoding fails.
    pub fn write_json(&self, path: &Path) -> Result<PathBuf> {
        let path = normalize_transcript_path(path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                operation: format!("create directory {}", parent.display()),
                source,
            })?;
        }

        let file = File::create(&path).map_err(|source| Error::Io {
            operation: format!("create file {}", path.display()),
            source,
        })?;
        to_writer_pretty(file, self)?;

        Ok(path)
    }
}

impl From<GridSummary> for Transcript {
    fn from(summary: GridSummary) -> Self {
        Self::Tictactoe(summary)
    }
}

impl From<StorySummary> for Transcript {
    fn from(summary: StorySummary) -> Self {
        Self::Adventure(summary)
    }
}

/// Normalizes a user-supplied transcript path to a `.json` file.
///
/// A trailing separator or a missing filename is treated as a directory
/// target and gets `transcript.json` appended; any other extension is
/// replaced with `json`.
pub fn normalize_transcript_path(raw: &Path) -> PathBuf {
    let mut normalized = raw.to_path_buf();
    let raw_str = raw.as_os_str().to_string_lossy();

    if raw_str.ends_with(std::path::MAIN_SEPARATOR) || normalized.file_name().is_none() {
        normalized.push("transcript.json");
        return normalized;
    }

    match normalized.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => normalized,
        _ => {
            normalized.set_extension("json");
            normalized
        }
    }
}
