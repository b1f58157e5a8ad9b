//! Persisted display preferences
//!
//! A single JSON record `{ "mode": "terminal", "theme": "dark" }`, read at
//! startup and rewritten whenever the user toggles the mode or the theme.

use crate::error::SiteError;
use crate::system::System;
use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Application directory under the user's config directory
pub const APP_DIR: &str = "termfolio";

/// Preference file name
pub const PREFS_FILE: &str = "prefs.json";

/// How the site is presented
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// The simulated shell
    #[default]
    Terminal,
    /// The whole site as one scrollable page
    Plain,
}

impl DisplayMode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Terminal => Self::Plain,
            Self::Plain => Self::Terminal,
        }
    }
}

/// Colour scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The stored preference record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub mode: DisplayMode,
    pub theme: Theme,
}

/// Reads and writes the preference record through the `System` trait
pub struct PreferenceStore<'sys> {
    system: &'sys dyn System,
    path: Option<PathBuf>,
}

impl<'sys> PreferenceStore<'sys> {
    /// Use `explicit` if given, otherwise `<config dir>/termfolio/prefs.json`
    ///
    /// Without either, preferences live only for the session.
    #[must_use]
    pub fn new(system: &'sys dyn System, explicit: Option<&Path>) -> Self {
        let path = explicit.map(Path::to_path_buf).or_else(|| {
            system
                .config_dir()
                .map(|dir| dir.join(APP_DIR).join(PREFS_FILE))
        });
        Self { system, path }
    }

    #[must_use]
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Read the stored record, falling back to defaults
    ///
    /// A missing file is normal on first run. An unreadable or corrupt file
    /// is reported as a warning and otherwise ignored.
    #[must_use]
    pub fn load(&self) -> Preferences {
        let Some(path) = self.path.as_deref() else {
            return Preferences::default();
        };
        if !self.system.exists(path) {
            debug!("No preferences at {}, using defaults", path.display());
            return Preferences::default();
        }
        match self.read(path) {
            Ok(prefs) => prefs,
            Err(err) => {
                warn!("{err:#}");
                Preferences::default()
            }
        }
    }

    fn read(&self, path: &Path) -> Result<Preferences> {
        let text = self
            .system
            .read_to_string(path)
            .with_context(|| format!("Failed to read preferences: {}", path.display()))?;
        serde_json::from_str(&text).map_err(|e| {
            SiteError::preferences(format!("Invalid preferences in {}: {e}", path.display()))
                .into()
        })
    }

    /// Write the record, creating the parent directory if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or the file cannot be written
    pub fn save(&self, prefs: &Preferences) -> Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !self.system.is_dir(parent)
        {
            self.system
                .create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(prefs).context("Failed to encode preferences")?;
        self.system
            .write(path, json.as_bytes())
            .map_err(|e| SiteError::preferences(format!("Failed to write {}: {e}", path.display())))?;
        debug!("Saved preferences to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::system::MockSystem;

    #[test]
    fn defaults_to_terminal_and_dark() {
        let prefs = Preferences::default();
        assert_eq!(prefs.mode, DisplayMode::Terminal);
        assert_eq!(prefs.theme, Theme::Dark);
    }

    #[test]
    fn partial_record_fills_in_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"theme":"light"}"#).unwrap();
        assert_eq!(prefs.mode, DisplayMode::Terminal);
        assert_eq!(prefs.theme, Theme::Light);
    }

    #[test]
    fn path_defaults_to_config_dir() {
        let system = MockSystem::new().with_config_dir("/home/u/.config").unwrap();
        let store = PreferenceStore::new(&system, None);
        assert_eq!(
            store.path(),
            Some(Path::new("/home/u/.config/termfolio/prefs.json"))
        );

        let explicit = PreferenceStore::new(&system, Some(Path::new("/tmp/p.json")));
        assert_eq!(explicit.path(), Some(Path::new("/tmp/p.json")));
    }

    #[test]
    fn without_any_location_saving_is_a_no_op() {
        let system = MockSystem::new();
        let store = PreferenceStore::new(&system, None);
        assert!(store.path().is_none());
        store.save(&Preferences::default()).unwrap();
        assert_eq!(store.load(), Preferences::default());
    }
}
