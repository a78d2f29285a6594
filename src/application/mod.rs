//! Application layer - Use cases and orchestration

pub mod entries;

pub use entries::{EntryPatch, EntryService, ListFailurePolicy, NewEntry};
