//! Storage backends for raw entry records

pub mod dropbox;
pub mod local;

pub use dropbox::DropboxStore;
pub use local::LocalStore;

use crate::error::Result;
use async_trait::async_trait;

/// Write disposition for [`ContentStore::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Fail with `AlreadyExists` if the name is occupied
    Create,
    /// Replace any existing contents
    Overwrite,
}

/// Abstract store for raw entry records, keyed by slug name.
///
/// Implementations map a name to a `<name>.md` file in their substrate
/// and must agree on the externally observable error contract: absence
/// is `NotFound`, occupied-name creation is `AlreadyExists`, and any
/// transport or IO failure is `BackendUnavailable`. The store is
/// codec-agnostic; it moves text, not entries.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Check whether a record with this name exists. Never errors for
    /// a missing name.
    async fn exists(&self, name: &str) -> Result<bool>;

    /// Read the raw contents of the named record.
    async fn read(&self, name: &str) -> Result<String>;

    /// Write the raw contents of the named record.
    async fn write(&self, name: &str, contents: &str, mode: WriteMode) -> Result<()>;

    /// List the names of all stored records, fully materialized.
    /// Non-file entries and files without the markdown extension are
    /// filtered out.
    async fn list(&self) -> Result<Vec<String>>;
}

/// Strip the markdown extension from a stored filename, returning the
/// record name, or `None` for filenames the store should ignore.
pub(crate) fn markdown_stem(filename: &str) -> Option<&str> {
    filename.strip_suffix(".md").filter(|stem| !stem.is_empty())
}
