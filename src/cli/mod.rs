//! CLI infrastructure for the parlor mini-games
//!
//! This module provides the command-line interface for playing the console
//! games and exporting session transcripts.

pub mod commands;
pub mod config;
