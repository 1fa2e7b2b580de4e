//! Application state over the todo collection.
//!
//! # Design
//! `TodoApp` keeps the client's cached copy of the item list plus transient
//! `loading` / `error` flags, and reconciles the cache against server
//! responses. Like the rest of the crate it never performs I/O: each user
//! action hands back an `HttpRequest` for the host to execute, and the
//! matching `apply_*` method consumes the outcome. A transport failure is
//! reported by the host as `Err(description)`.
//!
//! Failure handling is deliberately coarse: every failed action sets one
//! generic per-action message and the error kinds are not distinguished.
//! There is no retry, no timeout, and no sequencing of overlapping actions —
//! if the host issues two requests at once the last response applied wins.

use crate::client::TodoApi;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{CreateItem, Item, ItemId, UpdateItem};

/// Outcome of the host executing an `HttpRequest`: a response, or a
/// description of the transport failure.
pub type TransportResult = Result<HttpResponse, String>;

/// Client-side state: cached items, in-flight flag, and the last error.
#[derive(Debug)]
pub struct TodoApp {
    api: TodoApi,
    items: Vec<Item>,
    loading: bool,
    error: Option<String>,
}

impl TodoApp {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: TodoApi::new(base_url),
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Begin fetching the full collection (initial mount or reload).
    pub fn refresh(&mut self) -> HttpRequest {
        self.loading = true;
        self.api.build_list()
    }

    /// Replace the cache with the server's list, or record a fetch error.
    pub fn apply_refresh(&mut self, result: TransportResult) {
        self.loading = false;
        let parsed =
            result.and_then(|resp| self.api.parse_list(resp).map_err(|e| e.to_string()));
        match parsed {
            Ok(items) => self.items = items,
            Err(_) => self.error = Some("Failed to fetch todos".to_string()),
        }
    }

    /// Begin adding a new item. Blank text is a no-op and produces no request.
    pub fn add(&mut self, text: &str) -> Option<HttpRequest> {
        if text.trim().is_empty() {
            return None;
        }
        let input = CreateItem {
            text: text.to_string(),
        };
        match self.api.build_create(&input) {
            Ok(req) => {
                self.loading = true;
                Some(req)
            }
            Err(_) => {
                self.error = Some("Failed to add todo".to_string());
                None
            }
        }
    }

    /// Append the server-returned item to the cache, or record an add error.
    pub fn apply_add(&mut self, result: TransportResult) {
        self.loading = false;
        let parsed =
            result.and_then(|resp| self.api.parse_create(resp).map_err(|e| e.to_string()));
        match parsed {
            Ok(item) => self.items.push(item),
            Err(_) => self.error = Some("Failed to add todo".to_string()),
        }
    }

    /// Begin flipping the completed state of a cached item. Unknown ids are a
    /// no-op and produce no request.
    pub fn toggle(&mut self, id: &ItemId) -> Option<HttpRequest> {
        let completed = self.items.iter().find(|item| &item.id == id)?.completed;
        let input = UpdateItem {
            completed: Some(!completed),
            ..Default::default()
        };
        match self.api.build_update(id, &input) {
            Ok(req) => {
                self.loading = true;
                Some(req)
            }
            Err(_) => {
                self.error = Some("Failed to update todo".to_string());
                None
            }
        }
    }

    /// Swap the server's updated item into the cache, or record an update
    /// error.
    pub fn apply_toggle(&mut self, id: &ItemId, result: TransportResult) {
        self.loading = false;
        let parsed =
            result.and_then(|resp| self.api.parse_update(resp).map_err(|e| e.to_string()));
        match parsed {
            Ok(updated) => {
                for item in &mut self.items {
                    if &item.id == id {
                        *item = updated;
                        break;
                    }
                }
            }
            Err(_) => self.error = Some("Failed to update todo".to_string()),
        }
    }

    /// Begin deleting an item.
    pub fn delete(&mut self, id: &ItemId) -> HttpRequest {
        self.loading = true;
        self.api.build_delete(id)
    }

    /// Drop the item from the cache on success; the response body is not
    /// inspected.
    pub fn apply_delete(&mut self, id: &ItemId, result: TransportResult) {
        self.loading = false;
        let parsed =
            result.and_then(|resp| self.api.parse_delete(resp).map_err(|e| e.to_string()));
        match parsed {
            Ok(()) => self.items.retain(|item| &item.id != id),
            Err(_) => self.error = Some("Failed to delete todo".to_string()),
        }
    }
}
