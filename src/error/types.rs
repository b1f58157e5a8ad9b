//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for termfolio operations
///
/// The first group of variants is the "target not found" family reported by
/// the command interpreter. They are rendered as error lines and never abort a
/// session. The remaining variants are start-up failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SiteError {
    /// Unknown verb
    #[error("Command not found: {command}. Type 'help' for available commands.")]
    CommandNotFound { command: String },

    /// `cd`/`ls` target that is not a known section
    #[error("Directory not found: {name}")]
    DirectoryNotFound { name: String },

    /// `cd` into the biography document
    #[error("{name} is not a directory. Use 'view {name}' to open it.")]
    NotADirectory { name: String },

    /// `view`/`cat` target that resolves to nothing
    #[error("File not found: {name}")]
    FileNotFound { name: String },

    /// Missing required argument
    #[error("Usage: {usage}")]
    Usage { usage: String },

    /// Content Error - site content missing or malformed
    #[error("Content error: {message}")]
    Content { message: String },

    /// Preferences Error - preference file could not be read or written
    #[error("Preferences error: {message}")]
    Preferences { message: String },

    /// Terminal Error - raw mode or screen setup failed
    #[error("Terminal error: {message}")]
    Terminal { message: String },
}

impl SiteError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Content { .. } => 1,
            Self::CommandNotFound { .. }
            | Self::DirectoryNotFound { .. }
            | Self::NotADirectory { .. }
            | Self::FileNotFound { .. }
            | Self::Usage { .. } => 2,
            Self::Preferences { .. } => 3,
            Self::Terminal { .. } => 4,
        }
    }

    /// Create a command-not-found error
    #[inline]
    pub fn command_not_found<S: Into<String>>(command: S) -> Self {
        Self::CommandNotFound {
            command: command.into(),
        }
    }

    /// Create a directory-not-found error
    #[inline]
    pub fn directory_not_found<S: Into<String>>(name: S) -> Self {
        Self::DirectoryNotFound { name: name.into() }
    }

    /// Create a not-a-directory error
    #[inline]
    pub fn not_a_directory<S: Into<String>>(name: S) -> Self {
        Self::NotADirectory { name: name.into() }
    }

    /// Create a file-not-found error
    #[inline]
    pub fn file_not_found<S: Into<String>>(name: S) -> Self {
        Self::FileNotFound { name: name.into() }
    }

    /// Create a usage error
    #[inline]
    pub fn usage<S: Into<String>>(usage: S) -> Self {
        Self::Usage {
            usage: usage.into(),
        }
    }

    /// Create a content error
    #[inline]
    pub fn content<S: Into<String>>(message: S) -> Self {
        Self::Content {
            message: message.into(),
        }
    }

    /// Create a preferences error
    #[inline]
    pub fn preferences<S: Into<String>>(message: S) -> Self {
        Self::Preferences {
            message: message.into(),
        }
    }

    /// Create a terminal error
    #[inline]
    pub fn terminal<S: Into<String>>(message: S) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_messages_match_shell_wording() {
        assert_eq!(
            SiteError::command_not_found("foo").to_string(),
            "Command not found: foo. Type 'help' for available commands."
        );
        assert_eq!(
            SiteError::not_a_directory("me").to_string(),
            "me is not a directory. Use 'view me' to open it."
        );
        assert_eq!(
            SiteError::usage("view <filename>").to_string(),
            "Usage: view <filename>"
        );
    }

    #[test]
    fn exit_codes_group_by_family() {
        assert_eq!(SiteError::content("x").exit_code(), 1);
        assert_eq!(SiteError::file_not_found("x").exit_code(), 2);
        assert_eq!(SiteError::preferences("x").exit_code(), 3);
        assert_eq!(SiteError::terminal("x").exit_code(), 4);
        assert_eq!(SiteError::command_not_found("x").exit_code(), 2);
    }
}
