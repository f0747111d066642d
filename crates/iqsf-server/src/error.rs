//! Server and API error types.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use iqsf_metrics::{
    ERROR_BAD_REQUEST, ERROR_CONFIG, ERROR_CONFLICT, ERROR_INTERNAL, ERROR_IO, ERROR_NOT_FOUND,
    ERROR_VALIDATION, record_error,
};
use iqsf_model::ValidationError;
use iqsf_store::StoreError;
use serde_json::json;
use tracing::error;

/// Startup and serve-loop failures.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config: {0}")]
    Config(String),
    #[error("store: {0}")]
    Store(#[from] StoreError),
}

impl ServerError {
    /// Get the error type string for metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            ServerError::Io(_) => ERROR_IO,
            ServerError::Config(_) => ERROR_CONFIG,
            ServerError::Store(_) => ERROR_INTERNAL,
        }
    }
}

/// Error returned by request handlers.
///
/// Every variant renders as `{"error": message}`; validation failures also
/// list the offending fields. Internal failures never expose their cause.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}: {errors}")]
    Validation {
        message: &'static str,
        errors: ValidationError,
    },
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(&'static str),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Log `err` and hide it behind `message`.
    pub(crate) fn internal(message: &'static str, err: impl std::fmt::Display) -> Self {
        error!(error = %err, "{message}");
        ApiError::Internal(message)
    }

    /// Map a failed store write. `invalid` is the message for rejected payloads.
    pub(crate) fn store(err: StoreError, invalid: &'static str, failed: &'static str) -> Self {
        match err {
            StoreError::Validation(errors) => ApiError::Validation {
                message: invalid,
                errors,
            },
            conflict @ StoreError::Conflict { .. } => ApiError::Conflict(conflict.to_string()),
            backend @ StoreError::Backend(_) => ApiError::internal(failed, backend),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error type string for metrics.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => ERROR_VALIDATION,
            ApiError::BadRequest(_) => ERROR_BAD_REQUEST,
            ApiError::NotFound(_) => ERROR_NOT_FOUND,
            ApiError::Conflict(_) => ERROR_CONFLICT,
            ApiError::Internal(_) => ERROR_INTERNAL,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        record_error(self.error_type());
        let status = self.status();
        let body = match self {
            ApiError::Validation { message, errors } => json!({
                "error": message,
                "fields": errors.fields,
            }),
            ApiError::BadRequest(message) | ApiError::Conflict(message) => {
                json!({ "error": message })
            }
            ApiError::NotFound(message) | ApiError::Internal(message) => {
                json!({ "error": message })
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}
