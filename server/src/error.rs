//! Service error taxonomy mapped onto HTTP responses.
//!
//! Every error renders as a JSON body `{"error": "<message>"}` with the
//! matching status code. Storage failures are logged server-side and surface
//! to the caller as a generic 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Create request with missing or empty `text`.
    #[error("Text is required")]
    MissingText,

    /// Path identifier that does not parse as an item id.
    #[error("Invalid ID")]
    InvalidId,

    /// No item matches the given identifier.
    #[error("Todo not found")]
    NotFound,

    /// The storage backend failed mid-request.
    #[error("Storage unavailable")]
    Storage(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::MissingText | ServiceError::InvalidId => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Storage(cause) => {
                tracing::error!("storage failure: {cause}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_maps_to_400() {
        let resp = ServiceError::MissingText.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_id_maps_to_400() {
        let resp = ServiceError::InvalidId.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let resp = ServiceError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn storage_error_maps_to_500() {
        let err = ServiceError::from(StoreError::Unavailable("connection refused".into()));
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
