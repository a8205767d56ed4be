use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mediastore::StoreError;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
///
/// Store failures keep their identity all the way to the response so each
/// kind gets its own HTTP status, instead of collapsing everything into one
/// generic client error.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Upload request carried no file fields at all.
    #[error("no files available")]
    EmptyUpload,

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("internal server error: {0}")]
    Internal(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::EmptyUpload | ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Store(err) => match err {
                StoreError::InvalidFileName(_) => StatusCode::BAD_REQUEST,
                StoreError::SizeLimitExceeded { .. } => StatusCode::PAYLOAD_TOO_LARGE,
                StoreError::DuplicateContent { .. } => StatusCode::CONFLICT,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Internal(_) | ServerError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::EmptyUpload => "EMPTY_UPLOAD",
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Store(err) => match err {
                StoreError::InvalidFileName(_) => "INVALID_FILE_NAME",
                StoreError::SizeLimitExceeded { .. } => "SIZE_LIMIT_EXCEEDED",
                StoreError::DuplicateContent { .. } => "DUPLICATE_CONTENT",
                StoreError::Io(_) => "IO_ERROR",
                _ => "STORE_ERROR",
            },
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::Config(_) => "CONFIG_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for ServerError {
    fn from(err: anyhow::Error) -> Self {
        ServerError::Internal(err.to_string())
    }
}
