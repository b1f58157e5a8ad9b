//! Formatting of entries, collection summaries and banners into plain text

use crate::content::{Collection, Entry, Identity};
use crate::utils::text::{BOX_INNER_WIDTH, RULE, boxed, center, strip_markup};
use std::fmt;

/// Width available to text inside a box banner
const BANNER_TEXT_WIDTH: usize = BOX_INNER_WIDTH - 2;

/// Left-aligned single-row banner
#[must_use]
pub fn banner(title: &str) -> String {
    boxed(&[title.to_owned()])
}

/// Centered banner with one or more rows
#[must_use]
pub fn centered_banner(rows: &[&str]) -> String {
    let rows: Vec<String> = rows
        .iter()
        .map(|row| center(row, BANNER_TEXT_WIDTH))
        .collect();
    boxed(&rows)
}

/// Format an entry into a readable document
///
/// Fields are emitted in a fixed order: header fields (authors, venue,
/// organization, duration, date), then abstract, description, body and
/// links. Entries without a title are rendered as pretty-printed JSON.
#[must_use]
pub fn format_entry(entry: &Entry) -> String {
    let Some(title) = entry.title.as_deref() else {
        return serde_json::to_string_pretty(entry).unwrap_or_default();
    };

    let mut out = String::new();
    write_entry(&mut out, title, entry)
        .map(|()| out)
        .unwrap_or_default()
}

fn write_entry<W: fmt::Write>(out: &mut W, title: &str, entry: &Entry) -> fmt::Result {
    writeln!(out, "{}", banner(title))?;

    if let Some(authors) = entry.authors.as_deref() {
        writeln!(out, "Authors: {}", strip_markup(authors))?;
    }
    if let Some(venue) = entry.venue.as_deref() {
        writeln!(out, "Venue: {venue}")?;
    }
    if let Some(organization) = entry.organization.as_deref() {
        writeln!(out, "Organization: {organization}")?;
    }
    if let Some(duration) = entry.duration.as_deref() {
        writeln!(out, "Duration: {duration}")?;
    }
    if let Some(date) = entry.date.as_deref() {
        writeln!(out, "Date: {date}")?;
    }

    write!(out, "\n{}\n\n", *RULE)?;

    if let Some(abstract_text) = entry.abstract_text.as_deref() {
        write!(out, "ABSTRACT\n\n{abstract_text}\n\n")?;
    }
    if let Some(description) = entry.description.as_deref() {
        write!(out, "DESCRIPTION\n\n{description}\n\n")?;
    }
    if let Some(content) = entry.content.as_deref() {
        write!(out, "{content}\n\n")?;
    }
    if let Some(links) = entry.links.as_deref() {
        write!(out, "{}\nLINKS\n\n{links}\n", *RULE)?;
    }
    Ok(())
}

/// Human-readable summary of a collection: banner, description, entry index
#[must_use]
pub fn collection_summary(collection: &Collection) -> String {
    let mut out = String::new();
    write_summary(&mut out, collection)
        .map(|()| out)
        .unwrap_or_default()
}

fn write_summary<W: fmt::Write>(out: &mut W, collection: &Collection) -> fmt::Result {
    let heading = collection.name().as_str().to_uppercase();
    writeln!(out, "{}", centered_banner(&[&heading]))?;

    if !collection.description().is_empty() {
        write!(out, "{}\n\n", collection.description())?;
    }

    if collection.is_empty() {
        return writeln!(out, "Nothing here yet.");
    }

    writeln!(out, "Entries:")?;
    for named in collection.entries() {
        write!(out, "  • {}", named.name)?;
        if let Some(title) = named.entry.title.as_deref() {
            write!(out, " - {title}")?;
        }
        if let Some(date) = named.entry.date.as_deref() {
            write!(out, " ({date})")?;
        }
        writeln!(out)?;
    }

    if let Some(first) = collection.get(0) {
        write!(
            out,
            "\nUse 'view <filename>' to read an entry in detail.\nFor example: view {}\n",
            first.name
        )?;
    }
    Ok(())
}

/// Welcome banner printed when an interactive session starts
#[must_use]
pub fn welcome(identity: &Identity) -> String {
    if let Some(custom) = identity.welcome.as_deref() {
        return custom.to_owned();
    }

    let headline = format!("Welcome to {}'s Personal Website", identity.user);
    let mut out = centered_banner(&[&headline, "Terminal Interface"]);
    out.push_str("\nType 'help' for available commands, or 'ls' to list files.\n");
    out
}
