use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::content::store::ContentError;

/// Error type for HTTP handlers. Every failure is scoped to the one request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No album exists under the requested id.
    #[error("album {0:?} not found")]
    MissingRecord(String),

    #[error(transparent)]
    Content(#[from] ContentError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::MissingRecord(_) => (StatusCode::NOT_FOUND, "MISSING_RECORD", self.to_string()),
            AppError::Content(e) => {
                tracing::error!("Content store error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CONTENT_ERROR",
                    "Content could not be read".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message, "code": code }))).into_response()
    }
}
