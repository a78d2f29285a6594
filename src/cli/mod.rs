//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "scrawl")]
#[command(about = "Markdown entry CMS backend", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Serve entries from Dropbox instead of the local filesystem.
    /// Requires DROPBOX_ACCESS_TOKEN in the environment.
    #[arg(short, long)]
    pub dropbox: bool,

    /// Root directory for local entry storage
    #[arg(long, default_value = "content/entries")]
    pub content_dir: PathBuf,

    /// Dropbox folder holding the entries
    #[arg(long, env = "DROPBOX_CONTENT_DIRECTORY", default_value = "scrawl-entries")]
    pub dropbox_dir: String,

    /// Port for the HTTP API
    #[arg(short, long, env = "PORT", default_value_t = 4001)]
    pub port: u16,
}
