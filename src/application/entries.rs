//! Entry use cases
//!
//! The domain-level repository: get, list, create and update entries
//! on top of a [`ContentStore`] and the front matter codec. Slugs are
//! the identity; uniqueness is only as strong as the store's
//! existence primitive, and updates are plain read-modify-write with
//! no isolation (last writer wins).

use crate::domain::front_matter::{self, Metadata};
use crate::domain::{validate_slug, Entry};
use crate::error::{Result, ScrawlError};
use crate::infrastructure::store::{ContentStore, WriteMode};
use futures::future::join_all;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;

const TITLE_KEY: &str = "title";
const AUTHOR_KEY: &str = "author";

/// How `list` treats records that fail to read or decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListFailurePolicy {
    /// Log a warning and drop the failing record, keep the rest
    #[default]
    Skip,
    /// Propagate the first failure and abort the listing
    Fail,
}

/// Fields for a new entry. All required; the body may be empty.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEntry {
    pub title: String,
    pub author: String,
    pub body: String,
    pub slug: String,
}

/// Fields of an update request. A field that is absent or empty keeps
/// the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub body: Option<String>,
}

/// Entry repository over a content store.
pub struct EntryService {
    store: Arc<dyn ContentStore>,
    list_policy: ListFailurePolicy,
}

impl EntryService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        EntryService {
            store,
            list_policy: ListFailurePolicy::default(),
        }
    }

    pub fn with_list_policy(mut self, policy: ListFailurePolicy) -> Self {
        self.list_policy = policy;
        self
    }

    /// Fetch a single entry by slug.
    pub async fn get(&self, slug: &str) -> Result<Entry> {
        validate_slug(slug)?;
        let raw = self.store.read(slug).await?;
        decode_entry(slug, &raw)
    }

    /// Fetch all entries.
    ///
    /// Records are fetched as independent concurrent reads and
    /// recombined in listing order. Per-record failures are handled
    /// according to the configured [`ListFailurePolicy`].
    pub async fn list(&self) -> Result<Vec<Entry>> {
        let names = self.store.list().await?;
        let fetched = join_all(names.iter().map(|name| self.get(name))).await;

        let mut entries = Vec::with_capacity(names.len());
        for (name, result) in names.iter().zip(fetched) {
            match result {
                Ok(entry) => entries.push(entry),
                Err(e) => match self.list_policy {
                    ListFailurePolicy::Skip => {
                        warn!(slug = %name, error = %e, "skipping unreadable entry");
                    }
                    ListFailurePolicy::Fail => return Err(e),
                },
            }
        }
        Ok(entries)
    }

    /// Create an entry under a fresh slug.
    ///
    /// Using the slug as the filename enforces uniqueness through the
    /// store's existence check.
    pub async fn create(&self, new: NewEntry) -> Result<Entry> {
        validate_slug(&new.slug)?;

        if self.store.exists(&new.slug).await? {
            return Err(ScrawlError::AlreadyExists(new.slug));
        }

        let entry = Entry {
            slug: new.slug,
            title: new.title,
            author: new.author,
            body: new.body,
        };
        let raw = front_matter::encode(&entry.body, &entry_metadata(&entry))?;
        self.store.write(&entry.slug, &raw, WriteMode::Create).await?;

        Ok(entry)
    }

    /// Update an existing entry in place.
    ///
    /// Reads the stored entry, merges the patch over it and writes the
    /// result back. Fails with `NotFound` if the slug is absent.
    pub async fn update(&self, slug: &str, patch: EntryPatch) -> Result<Entry> {
        validate_slug(slug)?;
        let current = self.get(slug).await?;

        let entry = Entry {
            slug: current.slug,
            title: merge_field(patch.title, current.title),
            author: merge_field(patch.author, current.author),
            body: merge_field(patch.body, current.body),
        };
        let raw = front_matter::encode(&entry.body, &entry_metadata(&entry))?;
        self.store.write(slug, &raw, WriteMode::Overwrite).await?;

        Ok(entry)
    }
}

/// Requested values override stored ones only when present and
/// non-empty.
fn merge_field(requested: Option<String>, stored: String) -> String {
    match requested {
        Some(value) if !value.is_empty() => value,
        _ => stored,
    }
}

fn entry_metadata(entry: &Entry) -> Metadata {
    let mut metadata = Metadata::new();
    metadata.insert(TITLE_KEY.to_string(), entry.title.clone());
    metadata.insert(AUTHOR_KEY.to_string(), entry.author.clone());
    metadata
}

fn decode_entry(slug: &str, raw: &str) -> Result<Entry> {
    let (metadata, body) = front_matter::decode(raw)?;
    Ok(Entry {
        slug: slug.to_string(),
        title: metadata.get(TITLE_KEY).cloned().unwrap_or_default(),
        author: metadata.get(AUTHOR_KEY).cloned().unwrap_or_default(),
        body,
    })
}
