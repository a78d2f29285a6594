//! Runtime configuration

use crate::cli::Cli;
use crate::error::{Result, ScrawlError};
use std::path::PathBuf;

/// Environment variable holding the Dropbox bearer token. Kept out of
/// the CLI surface so the secret never shows up on a command line.
pub const ACCESS_TOKEN_VAR: &str = "DROPBOX_ACCESS_TOKEN";

/// Which storage backend serves entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendKind {
    Local { content_dir: PathBuf },
    Dropbox { container: String, access_token: String },
}

/// Resolved runtime configuration for the server.
#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendKind,
    pub port: u16,
}

impl Config {
    /// Resolve configuration from parsed CLI arguments and the
    /// environment.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let backend = if cli.dropbox {
            let access_token = std::env::var(ACCESS_TOKEN_VAR).map_err(|_| {
                ScrawlError::Config(format!(
                    "please provide {} as an environment variable",
                    ACCESS_TOKEN_VAR
                ))
            })?;
            BackendKind::Dropbox {
                container: cli.dropbox_dir,
                access_token,
            }
        } else {
            BackendKind::Local {
                content_dir: cli.content_dir,
            }
        };

        Ok(Config {
            backend,
            port: cli.port,
        })
    }
}
