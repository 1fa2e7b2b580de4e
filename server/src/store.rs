//! Persistence behind a trait so the HTTP layer never sees a concrete engine.
//!
//! # Design
//! `ItemStore` is the seam between the API contract and storage: handlers
//! hold an `Arc<dyn ItemStore>` and every operation is a single store call.
//! The shipped backend keeps items in a `HashMap` behind a `tokio` `RwLock`;
//! a networked document store would implement the same trait and report
//! connection trouble through `StoreError::Unavailable`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::types::{Item, ItemId, UpdateItem};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend could not be reached.
    #[error("storage backend unreachable: {0}")]
    Unavailable(String),
}

/// Storage operations over the item collection.
///
/// `list` returns items in backend-defined order; callers get no ordering
/// guarantee. `update` and `remove` report a missing id as `Ok(None)` /
/// `Ok(false)` rather than an error so the HTTP layer owns the 404 mapping.
#[async_trait]
pub trait ItemStore: std::fmt::Debug + Send + Sync + 'static {
    async fn list(&self) -> Result<Vec<Item>, StoreError>;
    async fn insert(&self, text: String) -> Result<Item, StoreError>;
    async fn update(&self, id: ItemId, changes: UpdateItem) -> Result<Option<Item>, StoreError>;
    async fn remove(&self, id: ItemId) -> Result<bool, StoreError>;
}

pub type SharedStore = Arc<dyn ItemStore>;

/// In-process store backing the `memory` connection scheme.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RwLock<HashMap<ItemId, Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor for handing the store to the router.
    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn insert(&self, text: String) -> Result<Item, StoreError> {
        let item = Item {
            id: ItemId::new(),
            text,
            completed: false,
        };
        self.items.write().await.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, id: ItemId, changes: UpdateItem) -> Result<Option<Item>, StoreError> {
        let mut items = self.items.write().await;
        let Some(item) = items.get_mut(&id) else {
            return Ok(None);
        };
        if let Some(text) = changes.text {
            item.text = text;
        }
        if let Some(completed) = changes.completed {
            item.completed = completed;
        }
        Ok(Some(item.clone()))
    }

    async fn remove(&self, id: ItemId) -> Result<bool, StoreError> {
        Ok(self.items.write().await.remove(&id).is_some())
    }
}

/// Open the store selected by a connection string.
///
/// Only the `memory` scheme is supported; anything else fails so startup can
/// abort instead of silently serving from the wrong backend.
pub fn open(connection: &str) -> Result<SharedStore, StoreError> {
    match connection {
        "memory" => Ok(MemoryStore::shared()),
        other => Err(StoreError::Unavailable(format!(
            "unsupported storage backend: {other}"
        ))),
    }
}
