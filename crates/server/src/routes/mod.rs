//! API route handlers
//!
//! - `health`: liveness and readiness probes
//! - `media`: multipart upload and file listing

pub mod health;
pub mod media;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// Service name and endpoint listing, served at the root path.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "mediastore-server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/api/media/upload",
            "/api/media/filelist",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 handler for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
