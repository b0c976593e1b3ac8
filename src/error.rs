//! Request-level errors and their JSON envelope.
//!
//! Every handler returns `Result<_, AppError>`. The `IntoResponse` impl is the
//! single place where an error becomes a status code and a
//! `{success:false, error, message?}` body, so nothing reaches the transport
//! layer unconverted.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::http::response::ErrorBody;

/// Errors surfaced to API callers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed input.
    #[error("{error}")]
    Validation {
        error: &'static str,
        message: Option<String>,
    },

    /// Upload rejected by the media type / extension allow-lists.
    #[error("unsupported file type: {0}")]
    UnsupportedMedia(String),

    /// Upload exceeded the configured size cap.
    #[error("file exceeds the maximum size of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    /// Request body over the route's buffering limit.
    #[error("request body too large: {0}")]
    BodyTooLarge(String),

    /// Request did not complete within the configured timeout.
    #[error("request exceeded the {secs}s timeout")]
    Timeout { secs: u64 },

    /// No route for the requested method and path.
    #[error("no route for {path}")]
    NotFound { path: String },

    /// Anything unexpected.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for request handlers.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Validation error with only an error code.
    pub fn validation(error: &'static str) -> Self {
        AppError::Validation { error, message: None }
    }

    /// Validation error with a code and a human-readable detail.
    pub fn validation_with(error: &'static str, message: impl Into<String>) -> Self {
        AppError::Validation {
            error,
            message: Some(message.into()),
        }
    }

    /// Internal error from a caught handler panic.
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        let detail = if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "handler panicked".to_string()
        };
        AppError::Internal(detail)
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::UnsupportedMedia(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge { .. } | AppError::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Timeout { .. } => StatusCode::REQUEST_TIMEOUT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Build the envelope body for this error.
    pub fn to_body(&self) -> ErrorBody {
        match self {
            AppError::Validation { error, message } => ErrorBody::new(*error, message.clone()),
            AppError::UnsupportedMedia(detail) => ErrorBody::new("unsupported file type", Some(detail.clone())),
            AppError::PayloadTooLarge { limit } => ErrorBody::new("file too large", Some(size_limit_message(*limit))),
            AppError::BodyTooLarge(detail) => ErrorBody::new("body too large", Some(detail.clone())),
            AppError::Timeout { secs } => ErrorBody::new(
                "request timeout",
                Some(format!("request did not complete within {} seconds", secs)),
            ),
            AppError::NotFound { path } => {
                ErrorBody::new("not found", Some(path.clone())).with_endpoints(crate::http::handlers::available_endpoints())
            }
            AppError::Internal(detail) => ErrorBody::new("internal error", Some(detail.clone())),
        }
    }
}

fn size_limit_message(limit: usize) -> String {
    const MIB: usize = 1024 * 1024;
    if limit >= MIB && limit % MIB == 0 {
        format!("file exceeds the maximum size of {} bytes ({} MiB)", limit, limit / MIB)
    } else {
        format!("file exceeds the maximum size of {} bytes", limit)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Internal(_) => tracing::error!(error = %self, "Internal service error"),
            AppError::UnsupportedMedia(_) | AppError::PayloadTooLarge { .. } | AppError::BodyTooLarge(_) => {
                tracing::info!(error = %self, "Payload rejected")
            }
            AppError::Timeout { .. } => tracing::warn!(error = %self, "Request timed out"),
            AppError::Validation { .. } | AppError::NotFound { .. } => {
                tracing::debug!(error = %self, "Client error")
            }
        }

        (self.status_code(), Json(self.to_body())).into_response()
    }
}
