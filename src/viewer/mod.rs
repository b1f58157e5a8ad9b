//! Modal content viewer
//!
//! A small state machine used to browse collections and read documents:
//!
//! - closed → list: a collection is opened; the first entry is selected
//! - list → detail: `Enter` formats the selected entry
//! - detail → list: `b`, only when the detail view came from a list
//! - list/detail → closed: `q` or `Escape`
//!
//! In list mode `j`/`k` move the selection and `g`/`G` jump to the ends.
//! Document views (details and directly opened documents) scroll instead.

pub mod render;
pub mod scroll;

pub use render::{FrameLine, ViewerFrame, render, render_full};
pub use scroll::{SCROLL_STEP, Scroll};

use crate::content::format::format_entry;
use crate::content::{Collection, ContentStore, SectionName};
use crate::input::Key;
use tracing::debug;

/// Page height used until the front end reports the real one
pub const DEFAULT_PAGE_HEIGHT: usize = 20;

/// Coarse viewer state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerMode {
    Closed,
    List,
    Detail,
}

/// Where a detail view was opened from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOrigin {
    pub collection: SectionName,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Closed,
    List {
        collection: SectionName,
        selected: usize,
    },
    Document {
        name: String,
        lines: Vec<String>,
        scroll: Scroll,
        origin: Option<ListOrigin>,
    },
}

/// The modal viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer {
    state: State,
    page_height: usize,
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: State::Closed,
            page_height: DEFAULT_PAGE_HEIGHT,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> ViewerMode {
        match self.state {
            State::Closed => ViewerMode::Closed,
            State::List { .. } => ViewerMode::List,
            State::Document { .. } => ViewerMode::Detail,
        }
    }

    #[must_use]
    #[inline]
    pub const fn is_open(&self) -> bool {
        !matches!(self.state, State::Closed)
    }

    /// Selected entry in list mode, or the entry a detail view came from
    #[must_use]
    pub const fn selected_index(&self) -> usize {
        match self.state {
            State::List { selected, .. } => selected,
            State::Document {
                origin: Some(origin),
                ..
            } => origin.index,
            State::Closed | State::Document { origin: None, .. } => 0,
        }
    }

    /// Collection being browsed, if any
    #[must_use]
    pub const fn active_collection(&self) -> Option<SectionName> {
        match self.state {
            State::List { collection, .. } => Some(collection),
            State::Document {
                origin: Some(origin),
                ..
            } => Some(origin.collection),
            State::Closed | State::Document { origin: None, .. } => None,
        }
    }

    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        match self.state {
            State::Document { scroll, .. } => scroll.offset(),
            State::Closed | State::List { .. } => 0,
        }
    }

    #[must_use]
    pub const fn origin(&self) -> Option<ListOrigin> {
        match self.state {
            State::Document { origin, .. } => origin,
            State::Closed | State::List { .. } => None,
        }
    }

    #[must_use]
    #[inline]
    pub const fn page_height(&self) -> usize {
        self.page_height
    }

    /// Name shown in the viewer's title bar
    #[must_use]
    pub fn title(&self) -> Option<String> {
        match &self.state {
            State::Closed => None,
            State::List { collection, .. } => Some(format!("{collection}/")),
            State::Document { name, .. } => Some(name.clone()),
        }
    }

    /// Lines of the open document
    #[must_use]
    pub fn document_lines(&self) -> Option<&[String]> {
        match &self.state {
            State::Document { lines, .. } => Some(lines),
            State::Closed | State::List { .. } => None,
        }
    }

    /// Update the visible height; zero is treated as one line
    pub fn set_page_height(&mut self, height: usize) {
        self.page_height = height.max(1);
        if let State::Document { lines, scroll, .. } = &mut self.state {
            scroll.clamp(lines.len(), self.page_height);
        }
    }

    /// Open a collection in list mode with the first entry selected
    pub fn open_collection(&mut self, collection: &Collection) {
        debug!("Viewer: list {}", collection.name());
        self.state = State::List {
            collection: collection.name(),
            selected: 0,
        };
    }

    /// Open a document that does not belong to a list
    pub fn open_document<S: Into<String>>(&mut self, name: S, text: &str) {
        let name = name.into();
        debug!("Viewer: document {name}");
        self.state = State::Document {
            name,
            lines: split_lines(text),
            scroll: Scroll::default(),
            origin: None,
        };
    }

    pub fn close(&mut self) {
        if self.is_open() {
            debug!("Viewer: closed");
        }
        self.state = State::Closed;
    }

    /// Route a key press; returns `false` when the key had no effect
    pub fn handle_key(&mut self, key: Key, store: &ContentStore) -> bool {
        if matches!(key, Key::Char('q') | Key::Escape) && self.is_open() {
            self.close();
            return true;
        }

        let page_height = self.page_height;
        match &mut self.state {
            State::Closed => false,
            State::List {
                collection,
                selected,
            } => {
                let collection = *collection;
                let len = store.collection(collection).map_or(0, Collection::len);
                let last = len.saturating_sub(1);
                let next = match key {
                    Key::Char('j') | Key::Down => (*selected + 1).min(last),
                    Key::Char('k') | Key::Up => selected.saturating_sub(1),
                    Key::Char('g') => 0,
                    Key::Char('G') => last,
                    Key::Enter => {
                        let index = *selected;
                        return self.open_entry(store, collection, index);
                    }
                    _ => return false,
                };
                let moved = next != *selected;
                *selected = next;
                moved
            }
            State::Document {
                lines,
                scroll,
                origin,
                ..
            } => {
                if key == Key::Char('b') {
                    let Some(origin) = *origin else {
                        return false;
                    };
                    debug!("Viewer: back to {}", origin.collection);
                    self.state = State::List {
                        collection: origin.collection,
                        selected: origin.index,
                    };
                    return true;
                }
                scroll.apply(key, lines.len(), page_height)
            }
        }
    }

    fn open_entry(&mut self, store: &ContentStore, collection: SectionName, index: usize) -> bool {
        let Some(named) = store.entry(collection, index) else {
            return false;
        };
        debug!("Viewer: detail {collection}/{}", named.name);
        self.state = State::Document {
            name: named.name.clone(),
            lines: split_lines(&format_entry(&named.entry)),
            scroll: Scroll::default(),
            origin: Some(ListOrigin { collection, index }),
        };
        true
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}
