//! REST backend for the todo list app.
//!
//! # Overview
//! Four routes over one collection: list, create, partial update, delete.
//! Handlers validate input at the HTTP boundary (non-empty `text` on create,
//! well-formed ids on the `/todos/{id}` routes) and delegate every operation
//! to an [`ItemStore`] held as shared router state. Errors render as JSON
//! `{"error": msg}` bodies via [`ServiceError`].

pub mod config;
pub mod error;
pub mod store;
pub mod types;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, patch};
use axum::{Json, Router};
use tokio::net::TcpListener;

pub use config::Config;
pub use error::ServiceError;
pub use store::{ItemStore, MemoryStore, SharedStore, StoreError};
pub use types::{CreateItem, DeleteConfirmation, Item, ItemId, UpdateItem};

/// Build the router over the given store.
pub fn app(store: SharedStore) -> Router {
    Router::new()
        .route("/todos", get(list_items).post(create_item))
        .route("/todos/{id}", patch(update_item).delete(delete_item))
        .with_state(store)
}

/// Serve the app on an already-bound listener until the process is stopped.
pub async fn run(listener: TcpListener, store: SharedStore) -> Result<(), std::io::Error> {
    axum::serve(listener, app(store)).await
}

async fn list_items(State(store): State<SharedStore>) -> Result<Json<Vec<Item>>, ServiceError> {
    Ok(Json(store.list().await?))
}

async fn create_item(
    State(store): State<SharedStore>,
    Json(input): Json<CreateItem>,
) -> Result<(StatusCode, Json<Item>), ServiceError> {
    if input.text.trim().is_empty() {
        return Err(ServiceError::MissingText);
    }
    let item = store.insert(input.text).await?;
    tracing::debug!(id = %item.id, "created todo");
    Ok((StatusCode::CREATED, Json(item)))
}

async fn update_item(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
    Json(input): Json<UpdateItem>,
) -> Result<Json<Item>, ServiceError> {
    let id = parse_id(&id)?;
    let item = store.update(id, input).await?.ok_or(ServiceError::NotFound)?;
    tracing::debug!(id = %item.id, completed = item.completed, "updated todo");
    Ok(Json(item))
}

async fn delete_item(
    State(store): State<SharedStore>,
    Path(id): Path<String>,
) -> Result<Json<DeleteConfirmation>, ServiceError> {
    let id = parse_id(&id)?;
    if !store.remove(id).await? {
        return Err(ServiceError::NotFound);
    }
    tracing::debug!(%id, "deleted todo");
    Ok(Json(DeleteConfirmation {
        message: "Deleted".to_string(),
    }))
}

/// Validate the raw path segment; ids are opaque to clients but must match
/// the store's format.
fn parse_id(raw: &str) -> Result<ItemId, ServiceError> {
    raw.parse().map_err(|_| {
        tracing::warn!(id = raw, "rejected malformed todo id");
        ServiceError::InvalidId
    })
}
