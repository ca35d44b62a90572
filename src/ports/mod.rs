//! Ports (trait boundaries) for external dependencies.
//!
//! This module defines the interfaces between the game engines and the
//! outside world. Following hexagonal architecture, these traits are owned
//! by the domain and implemented by adapters in the infrastructure layer.

pub mod console;

pub use console::Console;
