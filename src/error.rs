//! Error taxonomy and HTTP response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Application-level error shared by handlers and repositories.
///
/// Maps onto the HTTP surface as:
///
/// - [`AppError::Validation`] → 400 `{"message": ...}`
/// - [`AppError::NotFound`] → 404 `{"message": ...}`
/// - [`AppError::Conflict`] → 409 `{"message": ...}`
/// - [`AppError::Storage`] → 500 problem-details body with generic text
///
/// The storage variant keeps the driver error for server-side logging; the
/// response body never carries it.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        Self::Validation {
            message: errors.to_string().replace('\n', "; "),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation { message } => message_response(StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => message_response(StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => message_response(StatusCode::CONFLICT, message),
            AppError::Storage(_) => {
                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let body = json!({
                    "title": "Internal Server Error",
                    "detail": "An error occurred while processing your request",
                    "statusCode": status.as_u16(),
                });

                (status, Json(body)).into_response()
            }
        }
    }
}

fn message_response(status: StatusCode, message: String) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}
