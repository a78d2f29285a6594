//! HTTP API adapter
//!
//! A thin layer over [`EntryService`]: four routes that marshal
//! arguments, forward to the service and map errors to status codes.

use crate::application::{EntryPatch, EntryService, NewEntry};
use crate::domain::Entry;
use crate::error::ScrawlError;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Build the API router over an entry service.
pub fn router(service: Arc<EntryService>) -> Router {
    Router::new()
        .route("/entries", get(list_entries).post(create_entry))
        .route("/entries/:slug", get(get_entry).patch(update_entry))
        .with_state(service)
}

/// Bind the API on the given port and serve until shutdown.
pub async fn serve(service: Arc<EntryService>, port: u16) -> crate::error::Result<()> {
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("server running on http://{}", listener.local_addr()?);
    axum::serve(listener, router(service)).await?;
    Ok(())
}

async fn list_entries(
    State(service): State<Arc<EntryService>>,
) -> Result<Json<Vec<Entry>>, ApiError> {
    Ok(Json(service.list().await?))
}

async fn get_entry(
    State(service): State<Arc<EntryService>>,
    Path(slug): Path<String>,
) -> Result<Json<Entry>, ApiError> {
    Ok(Json(service.get(&slug).await?))
}

async fn create_entry(
    State(service): State<Arc<EntryService>>,
    Json(input): Json<NewEntry>,
) -> Result<(StatusCode, Json<Entry>), ApiError> {
    Ok((StatusCode::CREATED, Json(service.create(input).await?)))
}

async fn update_entry(
    State(service): State<Arc<EntryService>>,
    Path(slug): Path<String>,
    Json(patch): Json<EntryPatch>,
) -> Result<Json<Entry>, ApiError> {
    Ok(Json(service.update(&slug, patch).await?))
}

/// Wrapper so `ScrawlError` can flow out of handlers with `?`.
struct ApiError(ScrawlError);

impl From<ScrawlError> for ApiError {
    fn from(err: ScrawlError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ScrawlError::NotFound(_) => StatusCode::NOT_FOUND,
            ScrawlError::AlreadyExists(_) => StatusCode::CONFLICT,
            ScrawlError::InvalidSlug(_) => StatusCode::BAD_REQUEST,
            ScrawlError::MalformedRecord(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ScrawlError::BackendUnavailable(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
