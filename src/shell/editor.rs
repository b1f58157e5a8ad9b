//! Input line editing with command history

use crate::input::Key;
use crate::shell::complete::complete;
use crate::shell::interpreter::Shell;

/// Previously submitted command lines
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    /// Equal to `entries.len()` when not browsing
    index: usize,
}

impl History {
    /// Record a submitted line; blank lines are ignored
    pub fn push(&mut self, line: &str) {
        let line = line.trim();
        if !line.is_empty() {
            self.entries.push(line.to_owned());
        }
        self.index = self.entries.len();
    }

    /// Step back; `None` when already at the oldest entry
    pub fn older(&mut self) -> Option<&str> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index).map(String::as_str)
    }

    /// Step forward; `None` once past the newest entry
    pub fn newer(&mut self) -> Option<&str> {
        if self.index + 1 < self.entries.len() {
            self.index += 1;
            return self.entries.get(self.index).map(String::as_str);
        }
        self.index = self.entries.len();
        None
    }

    #[must_use]
    #[inline]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

/// The prompt's input buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: String,
    history: History,
}

impl LineEditor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    #[inline]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    #[inline]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Apply a key; returns the submitted line on `Enter`
    pub fn handle_key(&mut self, key: Key, shell: &Shell<'_>) -> Option<String> {
        match key {
            Key::Enter => {
                let line = std::mem::take(&mut self.buffer);
                self.history.push(&line);
                return Some(line.trim().to_owned());
            }
            Key::Char(c) => self.buffer.push(c),
            Key::Backspace => {
                self.buffer.pop();
            }
            Key::Ctrl('u') => self.buffer.clear(),
            Key::Up => {
                if let Some(line) = self.history.older() {
                    self.buffer = line.to_owned();
                }
            }
            Key::Down => {
                self.buffer = self.history.newer().map(str::to_owned).unwrap_or_default();
            }
            Key::Tab => {
                if let Some(completed) =
                    complete(self.buffer.trim(), shell.store(), shell.current_dir())
                {
                    self.buffer = completed;
                }
            }
            _ => {}
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_walks_back_and_forward() {
        let mut history = History::default();
        history.push("ls");
        history.push("  ");
        history.push("pwd");

        assert_eq!(history.older(), Some("pwd"));
        assert_eq!(history.older(), Some("ls"));
        assert_eq!(history.older(), None);
        assert_eq!(history.newer(), Some("pwd"));
        assert_eq!(history.newer(), None);
        assert_eq!(history.entries().len(), 2);
    }
}
