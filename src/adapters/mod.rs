//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Following hexagonal architecture, adapters depend on
//! domain ports, not the other way around.

pub mod scripted;
pub mod stdio;

pub use scripted::ScriptedConsole;
pub use stdio::StdioConsole;
