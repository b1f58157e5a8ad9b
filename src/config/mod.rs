//! Configuration management module
//!
//! Resolves command-line arguments and stored preferences into the settings
//! a run uses, and loads the site content they point at.

pub mod prefs;

use crate::cli::Args;
use crate::content::ContentStore;
use crate::content::loader::{load_builtin, load_dir};
use crate::system::System;
use prefs::{DisplayMode, Preferences, Theme};
use std::path::PathBuf;

/// Settings for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Content directory; the built-in site when `None`
    pub content_dir: Option<PathBuf>,
    /// Explicit preferences file
    pub prefs_path: Option<PathBuf>,
    /// One-off overrides that are not written back
    pub mode_override: Option<DisplayMode>,
    pub theme_override: Option<Theme>,
    /// Commands to run in batch mode
    pub exec: Vec<String>,
}

impl Settings {
    /// Build settings from parsed arguments
    #[must_use]
    pub fn from_args(args: &Args) -> Self {
        Self {
            content_dir: args.content.clone(),
            prefs_path: args.prefs.clone(),
            mode_override: args.mode,
            theme_override: args.theme,
            exec: args.exec.clone(),
        }
    }

    /// Apply the one-off overrides on top of the stored preferences
    #[must_use]
    pub fn effective(&self, stored: Preferences) -> Preferences {
        Preferences {
            mode: self.mode_override.unwrap_or(stored.mode),
            theme: self.theme_override.unwrap_or(stored.theme),
        }
    }

    /// Load the site content these settings point at
    pub fn load_content(&self, system: &dyn System) -> anyhow::Result<ContentStore> {
        match self.content_dir.as_deref() {
            Some(dir) => load_dir(system, dir),
            None => load_builtin(),
        }
    }
}
