use clap::Parser;
use scrawl::api;
use scrawl::application::EntryService;
use scrawl::cli::Cli;
use scrawl::error::ScrawlError;
use scrawl::infrastructure::store::{ContentStore, DropboxStore, LocalStore};
use scrawl::infrastructure::{BackendKind, Config};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), ScrawlError> {
    let config = Config::from_cli(cli)?;

    let store: Arc<dyn ContentStore> = match config.backend {
        BackendKind::Local { content_dir } => {
            tokio::fs::create_dir_all(&content_dir).await?;
            info!(root = %content_dir.display(), "serving entries from the local filesystem");
            Arc::new(LocalStore::new(content_dir))
        }
        BackendKind::Dropbox {
            container,
            access_token,
        } => {
            info!(container = %container, "serving entries from Dropbox");
            Arc::new(DropboxStore::new(container, access_token))
        }
    };

    let service = Arc::new(EntryService::new(store));
    api::serve(service, config.port).await
}
