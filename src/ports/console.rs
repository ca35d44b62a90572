//! Console port - abstraction for interactive session I/O
//!
//! This port defines the interface through which the game engines talk to
//! the player. The engines own the protocol (prompts, renders, verdicts)
//! and write it through this boundary; they never touch stdin/stdout
//! directly.

use crate::Result;

/// Console trait for interactive sessions.
///
/// # Design Philosophy
///
/// This trait represents a **port** in hexagonal architecture - the boundary
/// between a game session and its input/output device. The real terminal and
/// the scripted test console are **adapters** that implement this port.
///
/// Sessions treat the console as a trusted interactive terminal: reads block
/// until a line arrives, with no timeout. The only failure modes are the
/// stream closing and real I/O errors.
///
/// # Examples
///
/// ```
/// use parlor::ports::Console;
///
/// /// Swallows output and always answers "1".
/// struct YesMachine;
///
/// impl Console for YesMachine {
///     fn write(&mut self, _text: &str) -> parlor::Result<()> {
///         Ok(())
///     }
///
///     fn read_line(&mut self) -> parlor::Result<String> {
///         Ok("1".to_string())
///     }
/// }
/// ```
pub trait Console {
    /// Write a chunk of protocol text exactly as given.
    ///
    /// Prompts arrive without a trailing newline; the adapter must make them
    /// visible before the next [`read_line`](Console::read_line) blocks.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying device rejects the write.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Read the next input line, without its trailing newline.
    ///
    /// Blocks until a full line is available.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::ConsoleClosed`] when the input stream has
    /// ended, and an I/O error if reading fails.
    fn read_line(&mut self) -> Result<String>;
}
