//! YAML content loading and parsing
//!
//! A site is a set of YAML documents, one per section, named by their stem:
//! `me.yaml`, `publications.yaml`, `experiences.yaml`, `blog.yaml`, and an
//! optional `site.yaml` carrying the shell identity. The default site is
//! embedded in the binary.

use crate::content::schema::ContentSchema;
use crate::content::{Collection, ContentStore, Document, Entry, Identity, NamedEntry, SectionName};
use crate::error::SiteError;
use crate::system::System;
use anyhow::{Context as _, Result, anyhow};
use serde::Deserialize;
use serde_yaml::Mapping;
use std::ffi::OsStr;
use std::path::Path;
use tracing::{debug, info, warn};

/// Stem of the identity document
const SITE_STEM: &str = "site";

const BUILTIN: [(&str, &str); 5] = [
    ("site", include_str!("../../content/site.yaml")),
    ("me", include_str!("../../content/me.yaml")),
    ("publications", include_str!("../../content/publications.yaml")),
    ("experiences", include_str!("../../content/experiences.yaml")),
    ("blog", include_str!("../../content/blog.yaml")),
];

/// One content document as written on disk
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawDocument {
    Document {
        #[serde(default)]
        title: Option<String>,
        text: String,
    },
    Collection {
        #[serde(default)]
        description: String,
        #[serde(default)]
        entries: Mapping,
    },
    Site {
        user: String,
        host: String,
        #[serde(default)]
        welcome: Option<String>,
    },
}

/// Load the site embedded in the binary
pub fn load_builtin() -> Result<ContentStore> {
    let schema = ContentSchema::embedded()?;
    let mut documents = Vec::with_capacity(BUILTIN.len());
    for (stem, text) in BUILTIN {
        documents.push((stem.to_owned(), parse_document(&schema, stem, text)?));
    }
    assemble(documents)
}

/// Load a site from a directory of YAML documents
///
/// Files other than `*.yaml`/`*.yml` are ignored, as are YAML files whose
/// stem is not a known section.
pub fn load_dir(system: &dyn System, dir: &Path) -> Result<ContentStore> {
    if !system.is_dir(dir) {
        return Err(SiteError::content(format!(
            "Content directory not found: {}",
            dir.display()
        ))
        .into());
    }

    let schema = ContentSchema::embedded()?;
    let listing = system
        .walk_dir(dir, 1)
        .with_context(|| format!("Failed to list content directory: {}", dir.display()))?;

    let mut documents = Vec::new();
    for entry in listing {
        if !entry.is_file {
            continue;
        }
        if !matches!(
            entry.path.extension().and_then(OsStr::to_str),
            Some("yaml" | "yml")
        ) {
            debug!("Skipping non-YAML file: {}", entry.path.display());
            continue;
        }
        let Some(stem) = entry.path.file_stem().and_then(OsStr::to_str) else {
            continue;
        };

        let text = system
            .read_to_string(&entry.path)
            .with_context(|| format!("Failed to read content file: {}", entry.path.display()))?;
        let source = entry.path.display().to_string();
        documents.push((stem.to_owned(), parse_document(&schema, &source, &text)?));
    }

    assemble(documents)
}

/// Parse one YAML document and validate it against the schema
fn parse_document(schema: &ContentSchema, source: &str, text: &str) -> Result<RawDocument> {
    let value: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| {
        // Extract line and column information from serde_yaml error
        if let Some(location) = e.location() {
            anyhow!(
                "Failed to parse content document '{source}' at line {}, column {}: {e}",
                location.line(),
                location.column(),
            )
        } else {
            anyhow!("Failed to parse content document '{source}': {e}")
        }
    })?;

    let json = serde_json::to_value(&value)
        .with_context(|| format!("Content document '{source}' cannot be checked against the schema"))?;
    schema.validate(source, &json)?;

    serde_yaml::from_value(value)
        .with_context(|| format!("Failed to read content document '{source}'"))
}

fn assemble(documents: Vec<(String, RawDocument)>) -> Result<ContentStore> {
    let mut identity: Option<Identity> = None;
    let mut me: Option<Document> = None;
    let mut collections = Vec::new();

    for (stem, document) in documents {
        if stem == SITE_STEM {
            let RawDocument::Site {
                user,
                host,
                welcome,
            } = document
            else {
                return Err(SiteError::content("site document must have type 'site'").into());
            };
            if identity.replace(Identity { user, host, welcome }).is_some() {
                return Err(SiteError::content("Section defined more than once: site").into());
            }
            continue;
        }

        let Some(section) = SectionName::parse(&stem) else {
            warn!("Ignoring content document for unknown section: {stem}");
            continue;
        };

        match (section, document) {
            (SectionName::Me, RawDocument::Document { title, text }) => {
                let title = title.unwrap_or_else(|| section.as_str().to_owned());
                if me.replace(Document { title, text }).is_some() {
                    return Err(SiteError::content("Section defined more than once: me").into());
                }
            }
            (section, RawDocument::Collection {
                description,
                entries,
            }) if section.is_collection() => {
                let entries = convert_entries(section, entries)?;
                debug!("Loaded {} entries into {section}", entries.len());
                collections.push(Collection::new(section, description, entries));
            }
            (section, _) => {
                let expected = if section.is_collection() {
                    "collection"
                } else {
                    "document"
                };
                return Err(SiteError::content(format!(
                    "Section '{section}' must have type '{expected}'"
                ))
                .into());
            }
        }
    }

    let me = me.ok_or_else(|| SiteError::content("Missing required section: me"))?;
    let store = ContentStore::new(identity.unwrap_or_default(), me, collections)?;

    info!(
        "Loaded site for {}@{} with {} entries",
        store.identity().user,
        store.identity().host,
        store.collections().iter().map(Collection::len).sum::<usize>()
    );
    Ok(store)
}

/// Convert a YAML mapping of file name to entry, keeping source order
fn convert_entries(section: SectionName, entries: Mapping) -> Result<Vec<NamedEntry>> {
    entries
        .into_iter()
        .map(|(key, value)| -> Result<NamedEntry> {
            let name = key
                .as_str()
                .ok_or_else(|| SiteError::content(format!("Entry names in {section} must be strings")))?
                .to_owned();
            let entry: Entry = serde_yaml::from_value(value)
                .with_context(|| format!("Failed to read entry {name} in {section}"))?;
            Ok(NamedEntry::new(name, entry))
        })
        .collect()
}
