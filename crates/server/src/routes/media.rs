//! Upload and listing endpoints.

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Multipart, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use mediastore::IncomingFile;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Query parameters for the file listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct FileListQuery {
    /// Case-insensitive substring filter on file names. Empty means no
    /// filtering.
    #[serde(default)]
    pub search: String,
}

/// Upload one or more files from a multipart form body.
///
/// The whole batch is saved or none of it: an oversized member rejects the
/// batch before any write, and under the default policy a byte-identical
/// duplicate aborts it. A request with no file fields is rejected without
/// touching the store.
pub async fn upload_media(
    State(state): State<Arc<ServerState>>,
    mut multipart: Multipart,
) -> ServerResult<impl IntoResponse> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| ServerError::BadRequest(format!("malformed multipart body: {err}")))?
    {
        // Only file fields carry a file name; plain form values are ignored.
        let Some(name) = field.file_name().map(str::to_owned) else {
            continue;
        };
        let bytes = field.bytes().await.map_err(|err| {
            ServerError::BadRequest(format!("failed to read field {name:?}: {err}"))
        })?;
        files.push(IncomingFile::new(name, bytes));
    }

    if files.is_empty() {
        return Err(ServerError::EmptyUpload);
    }

    let uploaded = state.store.save_files(files).await?;

    Ok(Json(json!({
        "message": "files uploaded successfully",
        "uploaded": uploaded,
    })))
}

/// List stored files, optionally filtered by a case-insensitive name
/// substring.
pub async fn file_list(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<FileListQuery>,
) -> ServerResult<impl IntoResponse> {
    let files = state.store.list_files(&query.search).await?;
    Ok(Json(files))
}
