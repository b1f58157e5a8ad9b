//! Vim-style scrolling over a block of lines

use crate::input::Key;

/// Lines moved by `j`/`k`
pub const SCROLL_STEP: usize = 2;

/// Scroll position within a document of `line_count` lines shown in a
/// window of `page_height` lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scroll {
    offset: usize,
}

impl Scroll {
    #[must_use]
    #[inline]
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Largest valid offset
    #[must_use]
    #[inline]
    pub const fn max_offset(line_count: usize, page_height: usize) -> usize {
        line_count.saturating_sub(page_height)
    }

    /// Re-clamp after the window or the document changed size
    pub fn clamp(&mut self, line_count: usize, page_height: usize) {
        self.offset = self.offset.min(Self::max_offset(line_count, page_height));
    }

    /// Apply a scrolling key; returns `false` for keys that do not scroll
    pub fn apply(&mut self, key: Key, line_count: usize, page_height: usize) -> bool {
        let max = Self::max_offset(line_count, page_height);
        let half = (page_height / 2).max(1);

        self.offset = match key {
            Key::Char('j') | Key::Down => self.offset.saturating_add(SCROLL_STEP),
            Key::Char('k') | Key::Up => self.offset.saturating_sub(SCROLL_STEP),
            Key::Char('d') | Key::PageDown => self.offset.saturating_add(half),
            Key::Char('u') | Key::PageUp => self.offset.saturating_sub(half),
            Key::Char('g') => 0,
            Key::Char('G') => max,
            _ => return false,
        }
        .min(max);
        true
    }
}
