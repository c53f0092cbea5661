use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients as `{"error": ...}` bodies.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Please provide a filename in the request.")]
    MissingFilename,
    #[error("File '{0}' not found.")]
    FileNotFound(String),
    #[error("Error reading the file: {0}")]
    InvalidBoard(#[from] checkers_core::NotationError),
    #[error("invalid side '{0}', expected 'o' or 'x'")]
    InvalidSide(String),
    #[error("No valid moves available.")]
    NoMove,
    /// Out-of-range positions cannot come from a parsed board, so this
    /// is a server bug rather than a client mistake.
    #[error(transparent)]
    Core(#[from] checkers_core::CoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
