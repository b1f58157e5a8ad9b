//! Site content module
//!
//! Holds the static content tree (biography document plus the publication,
//! experience and blog collections), its YAML loader and schema, and the
//! formatters that turn entries into readable documents.

pub mod entry;
pub mod format;
pub mod loader;
pub mod schema;

pub use entry::{Entry, NamedEntry};

use crate::error::SiteError;
use std::fmt;

/// The fixed set of top-level sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionName {
    Me,
    Publications,
    Experiences,
    Blog,
}

impl SectionName {
    /// Every section, in display order
    pub const ALL: [Self; 4] = [Self::Me, Self::Publications, Self::Experiences, Self::Blog];

    /// The sections that hold collections, in search order
    pub const COLLECTIONS: [Self; 3] = [Self::Publications, Self::Experiences, Self::Blog];

    #[must_use]
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Me => "me",
            Self::Publications => "publications",
            Self::Experiences => "experiences",
            Self::Blog => "blog",
        }
    }

    #[must_use]
    #[inline]
    pub const fn is_collection(self) -> bool {
        !matches!(self, Self::Me)
    }

    /// Short description shown by `ls` at the root
    #[must_use]
    #[inline]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::Me => "About me and introduction",
            Self::Publications => "My research publications",
            Self::Experiences => "Professional and academic experience",
            Self::Blog => "Blog posts and writings",
        }
    }

    /// Parse an exact section name
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == name)
    }
}

impl fmt::Display for SectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who the simulated shell belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user: String,
    pub host: String,
    /// Custom welcome banner; a default one is generated when absent
    pub welcome: Option<String>,
}

impl Default for Identity {
    fn default() -> Self {
        Self {
            user: "guest".to_owned(),
            host: "localhost".to_owned(),
            welcome: None,
        }
    }
}

/// A plain-text document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub title: String,
    pub text: String,
}

/// A named group of entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collection {
    name: SectionName,
    description: String,
    entries: Vec<NamedEntry>,
    summary: String,
}

impl Collection {
    /// Create a collection; its summary is generated when it joins a store
    #[must_use]
    pub fn new<S: Into<String>>(name: SectionName, description: S, entries: Vec<NamedEntry>) -> Self {
        Self {
            name,
            description: description.into(),
            entries,
            summary: String::new(),
        }
    }

    #[must_use]
    #[inline]
    pub const fn name(&self) -> SectionName {
        self.name
    }

    #[must_use]
    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    #[inline]
    pub fn entries(&self) -> &[NamedEntry] {
        &self.entries
    }

    #[must_use]
    #[inline]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    #[inline]
    pub fn get(&self, index: usize) -> Option<&NamedEntry> {
        self.entries.get(index)
    }

    /// Index of the entry with the given file name
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.name == name)
    }
}

/// The whole site, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentStore {
    identity: Identity,
    me: Document,
    collections: Vec<Collection>,
}

impl ContentStore {
    /// Assemble a store and attach a generated summary to every collection
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A collection is registered under the `me` section
    /// - A collection section is missing or appears twice
    pub fn new(
        identity: Identity,
        me: Document,
        collections: Vec<Collection>,
    ) -> Result<Self, SiteError> {
        let mut ordered = Vec::with_capacity(SectionName::COLLECTIONS.len());

        for section in SectionName::COLLECTIONS {
            let mut matching = collections.iter().filter(|c| c.name == section);
            let Some(found) = matching.next() else {
                return Err(SiteError::content(format!(
                    "Missing required section: {section}"
                )));
            };
            if matching.next().is_some() {
                return Err(SiteError::content(format!(
                    "Section defined more than once: {section}"
                )));
            }
            ordered.push(found.clone());
        }

        if let Some(stray) = collections.iter().find(|c| !c.name.is_collection()) {
            return Err(SiteError::content(format!(
                "Section '{}' must be a document, not a collection",
                stray.name
            )));
        }

        for collection in &mut ordered {
            collection.summary = format::collection_summary(collection);
        }

        Ok(Self {
            identity,
            me,
            collections: ordered,
        })
    }

    #[must_use]
    #[inline]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// The biography document
    #[must_use]
    #[inline]
    pub const fn me(&self) -> &Document {
        &self.me
    }

    #[must_use]
    #[inline]
    pub fn collections(&self) -> &[Collection] {
        &self.collections
    }

    #[must_use]
    pub fn collection(&self, name: SectionName) -> Option<&Collection> {
        self.collections.iter().find(|c| c.name == name)
    }

    /// Search every collection, in fixed order, for an entry file name
    #[must_use]
    pub fn find_entry(&self, name: &str) -> Option<(SectionName, usize)> {
        self.collections
            .iter()
            .find_map(|c| c.position(name).map(|index| (c.name, index)))
    }

    #[must_use]
    pub fn entry(&self, section: SectionName, index: usize) -> Option<&NamedEntry> {
        self.collection(section).and_then(|c| c.get(index))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "This is a test module")]
mod tests {
    use super::*;

    fn collection(name: SectionName, entries: &[&str]) -> Collection {
        Collection::new(
            name,
            "",
            entries
                .iter()
                .map(|e| NamedEntry::new(*e, Entry::default()))
                .collect(),
        )
    }

    fn me() -> Document {
        Document {
            title: "me".to_owned(),
            text: "hello".to_owned(),
        }
    }

    #[test]
    fn section_names_round_trip() {
        for section in SectionName::ALL {
            assert_eq!(SectionName::parse(section.as_str()), Some(section));
        }
        assert_eq!(SectionName::parse("Blog"), None);
        assert!(!SectionName::Me.is_collection());
    }

    #[test]
    fn store_orders_collections_and_attaches_summaries() {
        let store = ContentStore::new(
            Identity::default(),
            me(),
            vec![
                collection(SectionName::Blog, &["post1.txt"]),
                collection(SectionName::Publications, &["paper1.txt"]),
                collection(SectionName::Experiences, &[]),
            ],
        )
        .unwrap();

        let names: Vec<_> = store.collections().iter().map(Collection::name).collect();
        assert_eq!(names, SectionName::COLLECTIONS.to_vec());
        assert!(store.collections().iter().all(|c| !c.summary().is_empty()));
    }

    #[test]
    fn store_rejects_missing_and_duplicate_sections() {
        let missing = ContentStore::new(
            Identity::default(),
            me(),
            vec![collection(SectionName::Blog, &[])],
        );
        assert!(missing.unwrap_err().to_string().contains("publications"));

        let duplicate = ContentStore::new(
            Identity::default(),
            me(),
            vec![
                collection(SectionName::Publications, &[]),
                collection(SectionName::Publications, &[]),
                collection(SectionName::Experiences, &[]),
                collection(SectionName::Blog, &[]),
            ],
        );
        assert!(duplicate.unwrap_err().to_string().contains("more than once"));
    }

    #[test]
    fn find_entry_searches_collections_in_order() {
        let store = ContentStore::new(
            Identity::default(),
            me(),
            vec![
                collection(SectionName::Publications, &["shared.txt"]),
                collection(SectionName::Experiences, &["job.txt"]),
                collection(SectionName::Blog, &["shared.txt"]),
            ],
        )
        .unwrap();

        assert_eq!(
            store.find_entry("shared.txt"),
            Some((SectionName::Publications, 0))
        );
        assert_eq!(store.find_entry("job.txt"), Some((SectionName::Experiences, 0)));
        assert_eq!(store.find_entry("nope.txt"), None);
    }
}
