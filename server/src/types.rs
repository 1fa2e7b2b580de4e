//! Domain types for the todo service.
//!
//! # Design
//! `ItemId` is the service's opaque identifier: UUID-backed internally, but
//! exposed on the wire as a plain string and validated only at the HTTP
//! boundary. Handlers receive the raw path segment and parse it themselves so
//! a malformed id produces the service's own 400 body rather than a framework
//! default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier for a todo item, assigned by the store at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ItemId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// A single todo item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub completed: bool,
}

/// Request payload for creating a new item.
///
/// `text` defaults to empty when the field is absent; the handler rejects
/// empty text, so a missing field and an empty one fail the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItem {
    #[serde(default)]
    pub text: String,
}

/// Request payload for partial updates. Omitted fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateItem {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

/// Confirmation body returned by a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}
