//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod store;

pub use config::{BackendKind, Config};
pub use store::{ContentStore, DropboxStore, LocalStore, WriteMode};
