//! Simulated shell module
//!
//! Command parsing, the interpreter that owns the current directory and the
//! viewer, and the line editor with history and completion.

pub mod command;
pub mod complete;
pub mod editor;
pub mod interpreter;

pub use command::{COMMANDS, Command};
pub use editor::{History, LineEditor};
pub use interpreter::{OutputKind, OutputLine, Shell};
