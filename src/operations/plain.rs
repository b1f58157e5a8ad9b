//! Plain (non-terminal) rendering of the whole site

use crate::content::ContentStore;
use crate::content::format::format_entry;
use crate::utils::text::RULE;
use std::fmt;

/// The site as one document: biography, then every collection's summary
/// followed by each of its entries
#[must_use]
pub fn plain_page(store: &ContentStore) -> String {
    let mut out = String::new();
    write_page(&mut out, store).map(|()| out).unwrap_or_default()
}

fn write_page<W: fmt::Write>(out: &mut W, store: &ContentStore) -> fmt::Result {
    write!(out, "{}\n\n", store.me().text.trim_end())?;

    for collection in store.collections() {
        writeln!(out, "{}", collection.summary())?;
        for named in collection.entries() {
            write!(
                out,
                "{}\n{}\n\n{}\n\n",
                *RULE,
                named.name,
                format_entry(&named.entry).trim_end()
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;
    use crate::content::loader::load_builtin;

    #[test]
    fn plain_page_contains_every_section_in_order() {
        let store = load_builtin().unwrap();
        let page = plain_page(&store);

        let me = page.find("Hi! I am Abe Hou.").unwrap();
        let publications = page.find("PUBLICATIONS").unwrap();
        let experiences = page.find("EXPERIENCES").unwrap();
        let blog = page.find("BLOG").unwrap();
        assert!(me < publications && publications < experiences && experiences < blog);

        for collection in store.collections() {
            for named in collection.entries() {
                assert!(page.contains(&named.name));
            }
        }
    }
}
