//! Dropbox object store
//!
//! Records live as `/<container>/<name>.md` objects inside a single
//! Dropbox folder. Every operation is an HTTP call authenticated with
//! a bearer token; non-success responses carry a JSON error payload
//! which is kept in the error for diagnostics.

use crate::error::{Result, ScrawlError};
use crate::infrastructure::store::{markdown_stem, ContentStore, WriteMode};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::json;

const CONTENT_BASE_URL: &str = "https://content.dropboxapi.com/2";
const API_BASE_URL: &str = "https://api.dropboxapi.com/2";

/// Marker in Dropbox error summaries for a missing path.
const NOT_FOUND_MARKER: &str = "not_found";
/// Marker in Dropbox error summaries for a rejected `add`-mode upload.
const CONFLICT_MARKER: &str = "conflict";

/// Dropbox implementation of [`ContentStore`].
pub struct DropboxStore {
    client: reqwest::Client,
    container: String,
    access_token: String,
}

/// One entry of a `list_folder` response.
#[derive(Debug, Deserialize)]
struct FolderEntry {
    #[serde(rename = ".tag")]
    tag: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ListFolderResponse {
    entries: Vec<FolderEntry>,
}

impl DropboxStore {
    /// Create a store over the given Dropbox folder.
    pub fn new(container: String, access_token: String) -> Self {
        DropboxStore {
            client: reqwest::Client::new(),
            container,
            access_token,
        }
    }

    /// Dropbox path for a record name.
    fn object_path(&self, name: &str) -> String {
        format!("/{}/{}.md", self.container, name)
    }

    /// Send a request and hand back status plus body text. Transport
    /// failures become `BackendUnavailable`.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(reqwest::StatusCode, String)> {
        let response = request
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| ScrawlError::BackendUnavailable(format!("request failed: {}", e)))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ScrawlError::BackendUnavailable(format!("cannot read response: {}", e)))?;
        Ok((status, body))
    }
}

#[async_trait]
impl ContentStore for DropboxStore {
    async fn exists(&self, name: &str) -> Result<bool> {
        let request = self
            .client
            .post(format!("{}/files/get_metadata", API_BASE_URL))
            .json(&json!({ "path": self.object_path(name) }));

        let (status, body) = self.send(request).await?;
        if status.is_success() {
            Ok(true)
        } else if body.contains(NOT_FOUND_MARKER) {
            Ok(false)
        } else {
            Err(ScrawlError::BackendUnavailable(format!(
                "get_metadata failed ({}): {}",
                status, body
            )))
        }
    }

    async fn read(&self, name: &str) -> Result<String> {
        let request = self
            .client
            .post(format!("{}/files/download", CONTENT_BASE_URL))
            .header(
                "Dropbox-API-Arg",
                json!({ "path": self.object_path(name) }).to_string(),
            );

        let (status, body) = self.send(request).await?;
        if status.is_success() {
            Ok(body)
        } else if body.contains(NOT_FOUND_MARKER) {
            Err(ScrawlError::NotFound(name.to_string()))
        } else {
            Err(ScrawlError::BackendUnavailable(format!(
                "download failed ({}): {}",
                status, body
            )))
        }
    }

    async fn write(&self, name: &str, contents: &str, mode: WriteMode) -> Result<()> {
        // The server enforces create-vs-overwrite through the mode
        // directive, so no separate existence check is needed here.
        let mode_arg = match mode {
            WriteMode::Create => "add",
            WriteMode::Overwrite => "overwrite",
        };
        let request = self
            .client
            .post(format!("{}/files/upload", CONTENT_BASE_URL))
            .header(
                "Dropbox-API-Arg",
                json!({ "path": self.object_path(name), "mode": mode_arg }).to_string(),
            )
            .header(CONTENT_TYPE, "application/octet-stream")
            .body(contents.to_string());

        let (status, body) = self.send(request).await?;
        if status.is_success() {
            Ok(())
        } else if mode == WriteMode::Create && body.contains(CONFLICT_MARKER) {
            Err(ScrawlError::AlreadyExists(name.to_string()))
        } else {
            Err(ScrawlError::BackendUnavailable(format!(
                "upload failed ({}): {}",
                status, body
            )))
        }
    }

    async fn list(&self) -> Result<Vec<String>> {
        let request = self
            .client
            .post(format!("{}/files/list_folder", API_BASE_URL))
            .json(&json!({ "path": format!("/{}", self.container) }));

        let (status, body) = self.send(request).await?;
        if !status.is_success() {
            return Err(ScrawlError::BackendUnavailable(format!(
                "list_folder failed ({}): {}",
                status, body
            )));
        }

        let listing: ListFolderResponse = serde_json::from_str(&body).map_err(|e| {
            ScrawlError::BackendUnavailable(format!("cannot parse folder listing: {}", e))
        })?;

        Ok(listing
            .entries
            .iter()
            .filter(|entry| entry.tag == "file")
            .filter_map(|entry| markdown_stem(&entry.name))
            .map(str::to_string)
            .collect())
    }
}
