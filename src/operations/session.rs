//! Interactive session state
//!
//! Owns the interpreter, the line editor and the preferences, and decides
//! where each key goes: mode/theme toggles first, then the plain page or the
//! open viewer, and finally the input line.

use crate::config::prefs::{DisplayMode, PreferenceStore, Preferences};
use crate::content::format::welcome;
use crate::input::Key;
use crate::operations::plain::plain_page;
use crate::shell::{Command, LineEditor, OutputKind, Shell};
use crate::viewer::Scroll;
use tracing::{debug, warn};

/// Rows taken by the viewer's title and status bars
pub const VIEWER_CHROME_ROWS: usize = 2;

/// What the front end should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct Session<'sys> {
    shell: Shell<'sys>,
    editor: LineEditor,
    prefs: Preferences,
    prefs_store: PreferenceStore<'sys>,
    plain_lines: Vec<String>,
    plain_scroll: Scroll,
    page_height: usize,
}

impl<'sys> Session<'sys> {
    #[must_use]
    pub fn new(shell: Shell<'sys>, prefs_store: PreferenceStore<'sys>, prefs: Preferences) -> Self {
        let plain_lines = plain_page(shell.store())
            .lines()
            .map(str::to_owned)
            .collect();
        let mut session = Self {
            shell,
            editor: LineEditor::new(),
            prefs,
            prefs_store,
            plain_lines,
            plain_scroll: Scroll::default(),
            page_height: crate::viewer::DEFAULT_PAGE_HEIGHT,
        };
        session.resize(crate::viewer::DEFAULT_PAGE_HEIGHT + VIEWER_CHROME_ROWS);
        session
    }

    /// Print the welcome banner followed by the root listing
    pub fn start(&mut self) {
        let banner = welcome(self.shell.store().identity());
        self.shell.print(OutputKind::Info, &banner);
        if let Err(err) = self.shell.dispatch(Command::Ls(None)) {
            warn!("Initial listing failed: {err}");
        }
    }

    #[must_use]
    #[inline]
    pub const fn shell(&self) -> &Shell<'sys> {
        &self.shell
    }

    #[must_use]
    #[inline]
    pub const fn editor(&self) -> &LineEditor {
        &self.editor
    }

    #[must_use]
    #[inline]
    pub const fn preferences(&self) -> Preferences {
        self.prefs
    }

    #[must_use]
    #[inline]
    pub fn plain_lines(&self) -> &[String] {
        &self.plain_lines
    }

    #[must_use]
    #[inline]
    pub const fn plain_scroll(&self) -> usize {
        self.plain_scroll.offset()
    }

    /// Height of the scrollable area in plain mode
    #[must_use]
    #[inline]
    pub const fn page_height(&self) -> usize {
        self.page_height
    }

    /// Adapt to a terminal of `rows` rows
    pub fn resize(&mut self, rows: usize) {
        self.page_height = rows.saturating_sub(VIEWER_CHROME_ROWS).max(1);
        self.shell.viewer_mut().set_page_height(self.page_height);
        self.plain_scroll
            .clamp(self.plain_lines.len(), self.page_height);
    }

    pub fn handle_key(&mut self, key: Key) -> Control {
        match key {
            Key::Ctrl('c' | 'd') => return Control::Quit,
            Key::Ctrl('t') => {
                self.prefs.theme = self.prefs.theme.toggled();
                debug!("Theme switched to {:?}", self.prefs.theme);
                self.persist();
                return Control::Continue;
            }
            Key::Ctrl('p') => {
                self.prefs.mode = self.prefs.mode.toggled();
                debug!("Display mode switched to {:?}", self.prefs.mode);
                self.persist();
                return Control::Continue;
            }
            _ => {}
        }

        if self.prefs.mode == DisplayMode::Plain {
            self.plain_scroll
                .apply(key, self.plain_lines.len(), self.page_height);
        } else if self.shell.viewer().is_open() {
            self.shell.handle_viewer_key(key);
        } else if let Some(line) = self.editor.handle_key(key, &self.shell) {
            // Errors are already in the scrollback
            let _ = self.shell.execute(&line);
        }
        Control::Continue
    }

    fn persist(&mut self) {
        if let Err(err) = self.prefs_store.save(&self.prefs) {
            debug!("Preference save failed: {err:#}");
            self.shell.print(
                OutputKind::Error,
                &format!("Could not save preferences: {err:#}"),
            );
        }
    }
}
