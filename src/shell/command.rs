//! Command-line parsing for the simulated shell

use crate::error::SiteError;

/// Every verb the shell understands, in help order
pub const COMMANDS: [&str; 9] = [
    "help", "ls", "cd", "view", "clear", "pwd", "cat", "whoami", "date",
];

/// A parsed command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Ls(Option<String>),
    Cd(Option<String>),
    /// `view` and `cat`; the argument is every remaining token joined by spaces
    View(String),
    Pwd,
    Clear,
    Whoami,
    Date,
}

impl Command {
    /// Parse a line into a command
    ///
    /// The verb is case-insensitive. Extra arguments to commands that take
    /// none are ignored.
    ///
    /// # Errors
    ///
    /// Returns `SiteError::CommandNotFound` for an unknown verb or an empty line
    pub fn parse(line: &str) -> Result<Self, SiteError> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next().unwrap_or("").to_lowercase();
        let first = tokens.clone().next().map(str::to_owned);

        let command = match verb.as_str() {
            "help" => Self::Help,
            "ls" => Self::Ls(first),
            "cd" => Self::Cd(first),
            "view" | "cat" => Self::View(tokens.collect::<Vec<_>>().join(" ")),
            "pwd" => Self::Pwd,
            "clear" => Self::Clear,
            "whoami" => Self::Whoami,
            "date" => Self::Date,
            _ => return Err(SiteError::command_not_found(verb)),
        };
        Ok(command)
    }
}
