//! Entry aggregate root

use crate::error::{Result, ScrawlError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Regex for filename-safe slugs: alphanumeric start, then
/// alphanumerics, dashes and underscores
fn slug_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").unwrap())
}

/// A titled, authored markdown document identified by its slug.
///
/// The slug doubles as the primary key and is derived from the storage
/// filename (basename minus the `.md` extension), never set
/// independently of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub slug: String,
    pub title: String,
    pub author: String,
    pub body: String,
}

/// Check that a slug is safe to use as a filename.
///
/// Slugs become path components in both backends, so anything that
/// could escape the content root (separators, dots, empty strings) is
/// rejected before storage is touched.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug_regex().is_match(slug) {
        Ok(())
    } else {
        Err(ScrawlError::InvalidSlug(slug.to_string()))
    }
}
