//! Text layout helpers shared by the formatters and renderers

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Interior width of the box banners, in characters
pub const BOX_INNER_WIDTH: usize = 63;

/// Horizontal rule separating document parts
pub static RULE: LazyLock<String> = LazyLock::new(|| "─".repeat(BOX_INNER_WIDTH));

#[expect(clippy::unwrap_used, reason = "The pattern is a literal")]
static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").unwrap());

/// Remove inline HTML tags such as `<strong>` from content text
#[must_use]
pub fn strip_markup(text: &str) -> Cow<'_, str> {
    MARKUP_TAG.replace_all(text, "")
}

/// Pad `text` with spaces to `width` characters; longer text is left as is
#[must_use]
pub fn pad_end(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let mut out = String::with_capacity(text.len() + width.saturating_sub(len));
    out.push_str(text);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(len)));
    out
}

/// Center `text` within `width` characters, extra space going to the right
#[must_use]
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    pad_end(&format!("{}{text}", " ".repeat(left)), width)
}

/// Draw a double-line box around the given rows
///
/// Each row is padded to fit between `║ ` and ` ║`.
#[must_use]
pub fn boxed(rows: &[String]) -> String {
    let bar = "═".repeat(BOX_INNER_WIDTH);
    let mut out = format!("╔{bar}╗\n");
    for row in rows {
        out.push_str(&format!("║ {} ║\n", pad_end(row, BOX_INNER_WIDTH - 2)));
    }
    out.push_str(&format!("╚{bar}╝\n"));
    out
}

/// Percentage of `part` over `whole`, `0` when `whole` is zero
#[must_use]
pub fn percent(part: usize, whole: usize) -> usize {
    if whole == 0 {
        return 0;
    }
    (part.saturating_mul(100) + whole / 2) / whole
}
