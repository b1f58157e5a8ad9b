//! Rendering of the viewer as a pure function of its state

use crate::content::format::centered_banner;
use crate::content::{Collection, ContentStore, NamedEntry};
use crate::utils::text::{pad_end, percent};
use crate::viewer::{Scroll, Viewer, ViewerMode};

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    pub text: String,
    pub highlighted: bool,
}

impl FrameLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            highlighted: false,
        }
    }
}

/// Everything a front end needs to draw the viewer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerFrame {
    pub title: String,
    pub lines: Vec<FrameLine>,
    /// Position indicator: `3/4` in list mode, `42%` in documents
    pub status: String,
    pub hint: &'static str,
}

impl ViewerFrame {
    /// The frame as plain text, one row per line
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            out.push_str(&line.text);
            out.push('\n');
        }
        out
    }
}

const LIST_HINT: &str = "j/k move  g/G first/last  Enter open  q quit";
const DETAIL_HINT: &str = "j/k scroll  d/u half page  g/G top/bottom  b back  q quit";
const DOCUMENT_HINT: &str = "j/k scroll  d/u half page  g/G top/bottom  q quit";

/// Render the visible window of the viewer; `None` when it is closed
#[must_use]
pub fn render(viewer: &Viewer, store: &ContentStore) -> Option<ViewerFrame> {
    render_with(viewer, store, true)
}

/// Render every line of the viewer, ignoring the page height
#[must_use]
pub fn render_full(viewer: &Viewer, store: &ContentStore) -> Option<ViewerFrame> {
    render_with(viewer, store, false)
}

fn render_with(viewer: &Viewer, store: &ContentStore, windowed: bool) -> Option<ViewerFrame> {
    let title = viewer.title()?;
    match viewer.mode() {
        ViewerMode::Closed => None,
        ViewerMode::List => {
            let collection = store.collection(viewer.active_collection()?)?;
            Some(render_list(title, collection, viewer, windowed))
        }
        ViewerMode::Detail => {
            let lines = viewer.document_lines()?;
            Some(render_document(title, lines, viewer, windowed))
        }
    }
}

fn render_list(title: String, collection: &Collection, viewer: &Viewer, windowed: bool) -> ViewerFrame {
    let heading = collection.name().as_str().to_uppercase();
    let mut lines: Vec<FrameLine> = centered_banner(&[&heading])
        .lines()
        .map(FrameLine::plain)
        .collect();
    lines.push(FrameLine::plain(""));
    if !collection.description().is_empty() {
        lines.push(FrameLine::plain(collection.description()));
        lines.push(FrameLine::plain(""));
    }

    let selected = viewer.selected_index();
    let name_width = collection
        .entries()
        .iter()
        .map(|e| e.name.chars().count())
        .max()
        .unwrap_or(0);

    let rows = collection.entries().iter().enumerate().map(|(index, named)| {
        let highlighted = index == selected;
        FrameLine {
            text: list_row(named, name_width, highlighted),
            highlighted,
        }
    });

    if windowed {
        // Keep the selected row inside the visible window
        let room = viewer.page_height().saturating_sub(lines.len()).max(1);
        let first = (selected + 1).saturating_sub(room);
        lines.extend(rows.skip(first).take(room));
    } else {
        lines.extend(rows);
    }

    if collection.is_empty() {
        lines.push(FrameLine::plain("  (empty)"));
    }

    let status = if collection.is_empty() {
        "0/0".to_owned()
    } else {
        format!("{}/{}", selected + 1, collection.len())
    };

    ViewerFrame {
        title,
        lines,
        status,
        hint: LIST_HINT,
    }
}

fn list_row(named: &NamedEntry, name_width: usize, selected: bool) -> String {
    let marker = if selected { '▶' } else { ' ' };
    let name = pad_end(&named.name, name_width);
    match named.entry.title.as_deref() {
        Some(title) => format!("{marker} {name}  {title}"),
        None => format!("{marker} {name}"),
    }
}

fn render_document(title: String, lines: &[String], viewer: &Viewer, windowed: bool) -> ViewerFrame {
    let page_height = viewer.page_height();
    let offset = viewer.scroll_offset();

    let visible: Vec<FrameLine> = if windowed {
        lines
            .iter()
            .skip(offset)
            .take(page_height)
            .map(|l| FrameLine::plain(l.as_str()))
            .collect()
    } else {
        lines.iter().map(|l| FrameLine::plain(l.as_str())).collect()
    };

    let max = Scroll::max_offset(lines.len(), page_height);
    let hint = if viewer.origin().is_some() {
        DETAIL_HINT
    } else {
        DOCUMENT_HINT
    };

    ViewerFrame {
        title,
        lines: visible,
        status: format!("{}%", percent(offset, max)),
        hint,
    }
}
