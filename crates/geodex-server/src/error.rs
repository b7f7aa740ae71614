//! API error taxonomy and its HTTP mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use geodex_core::FieldError;
use geodex_storage::StorageError;
use geodex_sync::SyncError;
use serde_json::json;

/// Errors surfaced by the HTTP handlers.
///
/// Mapping: validation → 400, missing record → 404, duplicate code → 409,
/// remote fetch failure → 502, anything else in storage → 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    BadRequest { message: String },

    #[error("Validation failed")]
    Validation { errors: Vec<FieldError> },

    #[error("Country not found")]
    NotFound,

    #[error("Country with this code already exists")]
    Conflict,

    #[error(transparent)]
    Storage(StorageError),

    #[error(transparent)]
    Sync(#[from] SyncError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation { errors }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { .. } => Self::NotFound,
            StorageError::AlreadyExists { .. } => Self::Conflict,
            other => Self::Storage(other),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, Json(json!({"error": message}))).into_response()
            }
            Self::Validation { errors } => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Validation failed", "details": errors})),
            )
                .into_response(),
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Country not found"})),
            )
                .into_response(),
            Self::Conflict => (
                StatusCode::CONFLICT,
                Json(json!({"error": "Country with this code already exists"})),
            )
                .into_response(),
            Self::Storage(err) => {
                tracing::error!(error = %err, "Storage failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": "Internal storage error"})),
                )
                    .into_response()
            }
            Self::Sync(SyncError::Fetch(err)) => {
                tracing::error!(error = %err, "Sync fetch failure");
                (
                    StatusCode::BAD_GATEWAY,
                    Json(json!({"error": format!("Failed to synchronize countries: {err}")})),
                )
                    .into_response()
            }
            Self::Sync(SyncError::Storage(err)) => {
                tracing::error!(error = %err, "Sync persistence failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"error": format!("Failed to synchronize countries: {err}")})),
                )
                    .into_response()
            }
        }
    }
}
