//! Scripted console for testing.
//!
//! This adapter provides a pure in-memory implementation of the Console
//! port, enabling whole-session tests without a terminal.

use std::collections::VecDeque;

use crate::{Result, error::Error, ports::Console};

/// Scripted console for testing.
///
/// Feeds a prepared queue of input lines to the session and captures
/// everything the session writes, so tests can drive a full game and then
/// assert on the complete output transcript.
///
/// # Examples
///
/// ```
/// use parlor::adapters::ScriptedConsole;
/// use parlor::ports::Console;
///
/// let mut console = ScriptedConsole::with_lines(["5", "1"]);
/// console.write("pick: ")?;
///
/// assert_eq!(console.read_line()?, "5");
/// assert_eq!(console.read_line()?, "1");
/// assert_eq!(console.output(), "pick: ");
/// # Ok::<(), parlor::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: String,
}

impl ScriptedConsole {
    /// Create a scripted console with no queued input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scripted console preloaded with input lines.
    pub fn with_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: String::new(),
        }
    }

    /// Queue one more input line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.input.push_back(line.into());
    }

    /// Everything the session has written so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Number of input lines not yet consumed.
    ///
    /// Useful for testing that a session stopped asking for input once it
    /// reached a terminal state.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl Console for ScriptedConsole {
    fn write(&mut self, text: &str) -> Result<()> {
        self.output.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> Result<String> {
        self.input.pop_front().ok_or(Error::ConsoleClosed)
    }
}
