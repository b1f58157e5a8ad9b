//! System abstraction for configuration paths, filesystem and clock access
//!
//! This module provides a unified trait for all external system interactions,
//! allowing for easy testing with mock implementations.

use chrono::{DateTime, FixedOffset};
use std::io;
use std::path::{Path, PathBuf};

pub mod mock;
pub mod real;

pub use mock::MockSystem;
pub use real::RealSystem;

/// Entry from directory walking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_file: bool,
}

/// Unified trait for system operations (config paths + filesystem + clock)
///
/// # Implementations
/// - `RealSystem`: Production implementation using `dirs`, `std::fs` and `chrono::Local`
/// - `MockSystem`: Test implementation using in-memory storage and a fixed clock
pub trait System: Send + Sync {
    // ==================== Environment Operations ====================

    /// The per-user configuration directory, if the platform has one
    fn config_dir(&self) -> Option<PathBuf>;

    /// Current local time
    fn now(&self) -> DateTime<FixedOffset>;

    // ==================== Filesystem Operations ====================

    /// Read entire file contents as a string
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace a file's contents, creating it if it doesn't exist
    ///
    /// The parent directory must already exist. Readers never observe a
    /// partially written file.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Recursively create a directory and all parent directories
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if a path points to a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Walk a directory up to `max_depth` levels, sorted by file name
    ///
    /// The root itself is not included.
    fn walk_dir(&self, path: &Path, max_depth: usize) -> io::Result<Vec<WalkEntry>>;
}
