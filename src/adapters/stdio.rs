//! Standard-input/-output implementation of the console port.
//!
//! This adapter implements the Console port over the process's real
//! terminal, which is how both games are normally played.

use std::io::{BufRead, StdinLock, StdoutLock, Write};

use crate::{Result, error::Error, ports::Console};

/// Console adapter over locked stdin/stdout.
///
/// Holds both standard stream locks for the lifetime of the session, so a
/// run is one uninterrupted conversation with the terminal. Output is
/// flushed before every read, which keeps newline-less prompts visible
/// while the read blocks.
///
/// # Examples
///
/// ```no_run
/// use parlor::adapters::StdioConsole;
/// use parlor::ports::Console;
///
/// let mut console = StdioConsole::new();
/// console.write("Player X Enter a value from 1-9:  ")?;
/// let line = console.read_line()?;
/// # Ok::<(), parlor::Error>(())
/// ```
pub struct StdioConsole {
    input: StdinLock<'static>,
    output: StdoutLock<'static>,
}

impl StdioConsole {
    /// Create a console over the process's standard streams.
    pub fn new() -> Self {
        Self {
            input: std::io::stdin().lock(),
            output: std::io::stdout().lock(),
        }
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdioConsole {
    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .map_err(|source| Error::Io {
                operation: "write to stdout".to_string(),
                source,
            })
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush().map_err(|source| Error::Io {
            operation: "flush stdout before reading".to_string(),
            source,
        })?;

        let mut line = String::new();
        let bytes = self
            .input
            .read_line(&mut line)
            .map_err(|source| Error::Io {
                operation: "read from stdin".to_string(),
                source,
            })?;

        if bytes == 0 {
            return Err(Error::ConsoleClosed);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(line)
    }
}
