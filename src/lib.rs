//! scrawl - Markdown entry CMS backend
//!
//! A small content-management backend that serves markdown entries with
//! YAML front matter through an HTTP query/mutation API. Entries can be
//! stored on the local filesystem or in a Dropbox folder; both backends
//! implement the same storage contract.

pub mod api;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ScrawlError;
