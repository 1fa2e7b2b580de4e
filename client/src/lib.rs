//! Client for the todo service: request/response core plus app state.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the client fully deterministic and
//! testable.
//!
//! # Design
//! - `TodoApi` is stateless — it holds only `base_url` — and splits each
//!   CRUD operation into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - `TodoApp` layers the user-facing state on top: the cached item list
//!   plus `loading` / `error` flags, reconciled against server responses.
//! - DTOs are defined independently from the server crate; integration
//!   tests catch schema drift.

pub mod app;
pub mod client;
pub mod error;
pub mod http;
pub mod types;

pub use app::{TodoApp, TransportResult};
pub use client::TodoApi;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{CreateItem, Item, ItemId, UpdateItem};
