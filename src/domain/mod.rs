//! Domain layer - Entries and their record format

pub mod entry;
pub mod front_matter;

pub use entry::{validate_slug, Entry};
pub use front_matter::Metadata;
