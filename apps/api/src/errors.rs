#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// None of these are fatal to the process: every variant maps to a status code
/// and a JSON envelope, and the user re-initiates the action (no retry logic).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    #[error("Camera permission denied")]
    PermissionDenied,

    #[error("Camera device unavailable")]
    DeviceUnavailable,

    #[error("Unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("No images to convert")]
    EmptyInputSet,

    #[error("Gate denied: {remaining_secs}s remaining")]
    GateDenied { remaining_secs: i64 },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnprocessableEntity(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "UNPROCESSABLE_ENTITY",
                msg.clone(),
            ),
            AppError::PermissionDenied => (
                StatusCode::FORBIDDEN,
                "PERMISSION_DENIED",
                "Camera access was denied".to_string(),
            ),
            AppError::DeviceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                "DEVICE_UNAVAILABLE",
                "No camera device is available".to_string(),
            ),
            AppError::UnsupportedFileType(mime) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_FILE_TYPE",
                format!("Only image files are accepted (got '{mime}')"),
            ),
            AppError::EmptyInputSet => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EMPTY_INPUT_SET",
                "Add at least one image before converting or sharing".to_string(),
            ),
            AppError::GateDenied { remaining_secs } => (
                StatusCode::FORBIDDEN,
                "GATE_DENIED",
                format!("Finish watching the ad first ({remaining_secs}s remaining)"),
            ),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
