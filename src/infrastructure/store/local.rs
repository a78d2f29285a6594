//! Local filesystem store

use crate::error::{Result, ScrawlError};
use crate::infrastructure::store::{markdown_stem, ContentStore, WriteMode};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use walkdir::WalkDir;

/// Filesystem implementation of [`ContentStore`].
///
/// Records live as `<name>.md` files directly under the content root.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at the given content directory.
    pub fn new(root: PathBuf) -> Self {
        LocalStore { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.root.join(format!("{}.md", name))
    }
}

fn unavailable(context: &str, err: std::io::Error) -> ScrawlError {
    ScrawlError::BackendUnavailable(format!("{}: {}", context, err))
}

#[async_trait]
impl ContentStore for LocalStore {
    async fn exists(&self, name: &str) -> Result<bool> {
        tokio::fs::try_exists(self.record_path(name))
            .await
            .map_err(|e| unavailable("cannot stat record", e))
    }

    async fn read(&self, name: &str) -> Result<String> {
        match tokio::fs::read_to_string(self.record_path(name)).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ScrawlError::NotFound(name.to_string()))
            }
            Err(e) => Err(unavailable("cannot read record", e)),
        }
    }

    async fn write(&self, name: &str, contents: &str, mode: WriteMode) -> Result<()> {
        let path = self.record_path(name);
        let open = match mode {
            // create_new makes the existence check and the write a
            // single filesystem operation
            WriteMode::Create => {
                tokio::fs::OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&path)
                    .await
            }
            WriteMode::Overwrite => {
                tokio::fs::OpenOptions::new()
                    .write(true)
                    .create(true)
                    .truncate(true)
                    .open(&path)
                    .await
            }
        };

        let mut file = match open {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ScrawlError::AlreadyExists(name.to_string()))
            }
            Err(e) => return Err(unavailable("cannot open record for writing", e)),
        };

        file.write_all(contents.as_bytes())
            .await
            .map_err(|e| unavailable("cannot write record", e))?;
        // tokio file writes land on a background task; the contents
        // are only guaranteed on disk once the flush completes
        file.flush()
            .await
            .map_err(|e| unavailable("cannot write record", e))
    }

    async fn list(&self) -> Result<Vec<String>> {
        // The directory walk is synchronous, so keep it off the
        // runtime threads
        let root = self.root.clone();
        tokio::task::spawn_blocking(move || {
            let mut names = Vec::new();

            for entry in WalkDir::new(&root).min_depth(1).max_depth(1) {
                let entry = entry.map_err(|e| {
                    ScrawlError::BackendUnavailable(format!(
                        "cannot list {}: {}",
                        root.display(),
                        e
                    ))
                })?;
                if !entry.file_type().is_file() {
                    continue;
                }
                if let Some(name) = markdown_stem(&entry.file_name().to_string_lossy()) {
                    names.push(name.to_string());
                }
            }

            names.sort();
            Ok(names)
        })
        .await
        .map_err(|e| ScrawlError::BackendUnavailable(format!("listing task failed: {}", e)))?
    }
}
