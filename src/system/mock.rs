//! Mock system implementation for testing

use super::{System, WalkEntry};
use chrono::{DateTime, FixedOffset};
use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// In-memory implementation of System trait for testing
///
/// `MockSystem` provides an in-memory filesystem, a config directory and a
/// frozen clock, perfect for fast, isolated unit tests without side effects.
///
/// # Example
/// ```
/// use termfolio::system::{mock::MockSystem, System};
/// use std::path::Path;
///
/// let system = MockSystem::new()
///     .with_config_dir("/home/user/.config").unwrap()
///     .with_file("/site/me.yaml", b"type: document\ntext: hi\n").unwrap();
///
/// assert_eq!(system.config_dir().unwrap(), Path::new("/home/user/.config"));
/// assert!(system.exists(Path::new("/site/me.yaml")));
/// assert!(system.is_dir(Path::new("/site")));
/// ```
#[derive(Clone)]
pub struct MockSystem {
    state: Arc<RwLock<MockSystemState>>,
}

struct MockSystemState {
    config_dir: Option<PathBuf>,
    now: DateTime<FixedOffset>,
    files: HashMap<PathBuf, Vec<u8>>,
    dirs: HashSet<PathBuf>,
}

impl MockSystem {
    /// Create a new `MockSystem` with default state
    ///
    /// The clock is frozen at the Unix epoch and there is no config directory.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(MockSystemState {
                config_dir: None,
                now: DateTime::<FixedOffset>::default(),
                files: HashMap::new(),
                dirs: HashSet::from([PathBuf::from("/")]),
            })),
        }
    }

    /// Set the config directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_config_dir<P: AsRef<Path>>(self, dir: P) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.config_dir = Some(dir.as_ref().to_path_buf());
        drop(state);
        Ok(self)
    }

    /// Freeze the clock at the given instant (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_now(self, now: DateTime<FixedOffset>) -> io::Result<Self> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        state.now = now;
        drop(state);
        Ok(self)
    }

    /// Add a file with contents (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_file<P: AsRef<Path>>(self, path: P, contents: &[u8]) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        // Ensure parent directories exist
        if let Some(parent) = path_buf.parent() {
            Self::ensure_parent_dirs(&mut state.dirs, parent);
        }

        state.files.insert(path_buf, contents.to_vec());
        drop(state);
        Ok(self)
    }

    /// Add a directory (builder pattern)
    ///
    /// # Errors
    ///
    /// Returns an error if the state lock is poisoned
    #[inline]
    pub fn with_dir<P: AsRef<Path>>(self, path: P) -> io::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Self::ensure_parent_dirs(&mut state.dirs, &path_buf);
        drop(state);
        Ok(self)
    }

    /// Read back a file's bytes, if present
    #[must_use]
    #[inline]
    pub fn file_contents<P: AsRef<Path>>(&self, path: P) -> Option<Vec<u8>> {
        let state = self.state.read().ok()?;
        state.files.get(path.as_ref()).cloned()
    }

    #[inline]
    fn ensure_parent_dirs(dirs: &mut HashSet<PathBuf>, path: &Path) {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl Default for MockSystem {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl System for MockSystem {
    #[inline]
    fn config_dir(&self) -> Option<PathBuf> {
        let state = self.state.read().ok()?;
        state.config_dir.clone()
    }

    #[inline]
    fn now(&self) -> DateTime<FixedOffset> {
        self.state
            .read()
            .map(|state| state.now)
            .unwrap_or_default()
    }

    #[inline]
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;
        let bytes = state.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            )
        })?;
        let result = bytes.clone();
        drop(state);
        String::from_utf8(result)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {e}")))
    }

    #[inline]
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;

        // Ensure parent directories exist
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !state.dirs.contains(parent)
        {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Parent directory does not exist: {}", parent.display()),
            ));
        }

        state.files.insert(path.to_path_buf(), contents.to_vec());
        drop(state);
        Ok(())
    }

    #[inline]
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| io::Error::other(e.to_string()))?;
        if let Some(file) = path.ancestors().find(|p| state.files.contains_key(*p)) {
            return Err(io::Error::other(format!(
                "Not a directory: {}",
                file.display()
            )));
        }
        Self::ensure_parent_dirs(&mut state.dirs, path);
        drop(state);
        Ok(())
    }

    #[inline]
    fn exists(&self, path: &Path) -> bool {
        self.state
            .read()
            .map(|state| state.files.contains_key(path) || state.dirs.contains(path))
            .unwrap_or(false)
    }

    #[inline]
    fn is_dir(&self, path: &Path) -> bool {
        self.state
            .read()
            .map(|state| state.dirs.contains(path))
            .unwrap_or(false)
    }

    #[inline]
    fn walk_dir(&self, path: &Path, max_depth: usize) -> io::Result<Vec<WalkEntry>> {
        let state = self
            .state
            .read()
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !state.dirs.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Directory not found: {}", path.display()),
            ));
        }

        let within = |candidate: &Path| -> bool {
            candidate
                .strip_prefix(path)
                .map(|rest| {
                    let depth = rest.components().count();
                    depth >= 1 && depth <= max_depth
                })
                .unwrap_or(false)
        };

        let mut entries: Vec<WalkEntry> = state
            .files
            .keys()
            .filter(|p| within(p))
            .map(|p| WalkEntry {
                path: p.clone(),
                is_file: true,
            })
            .chain(state.dirs.iter().filter(|p| within(p)).map(|p| WalkEntry {
                path: p.clone(),
                is_file: false,
            }))
            .collect();
        drop(state);

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }
}
