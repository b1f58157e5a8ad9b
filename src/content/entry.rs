//! Collection entries

use serde::{Deserialize, Serialize};

/// One item of a collection: a paper, a position, a blog post
///
/// Every field is optional and unvalidated. The detail formatter prints
/// whichever fields are present in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// May contain inline markup such as `<strong>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(
        default,
        rename = "abstract",
        skip_serializing_if = "Option::is_none"
    )]
    pub abstract_text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Free-form body, used by blog posts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<String>,
}

/// An entry together with the file name it is addressed by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedEntry {
    pub name: String,
    pub entry: Entry,
}

impl NamedEntry {
    #[must_use]
    pub fn new<S: Into<String>>(name: S, entry: Entry) -> Self {
        Self {
            name: name.into(),
            entry,
        }
    }
}
