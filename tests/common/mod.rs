use scrawl::application::{EntryService, NewEntry};
use scrawl::infrastructure::store::LocalStore;
use std::sync::Arc;
use tempfile::TempDir;

/// Entry service backed by a throwaway local content directory.
pub fn service() -> (TempDir, EntryService) {
    let temp = TempDir::new().unwrap();
    let service = EntryService::new(Arc::new(LocalStore::new(temp.path().to_path_buf())));
    (temp, service)
}

pub fn new_entry(title: &str, author: &str, body: &str, slug: &str) -> NewEntry {
    NewEntry {
        title: title.to_string(),
        author: author.to_string(),
        body: body.to_string(),
        slug: slug.to_string(),
    }
}
