//! Error types for scrawl

use thiserror::Error;

/// Main error type for the scrawl backend
#[derive(Debug, Error)]
pub enum ScrawlError {
    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Entry already exists: {0}. Please choose a different slug.")]
    AlreadyExists(String),

    #[error("Malformed record: {0}")]
    MalformedRecord(String),

    #[error("Invalid slug: {0}")]
    InvalidSlug(String),

    #[error("Storage backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScrawlError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ScrawlError::Config(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrawlError>;
