//! Upload API handler.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{debug, warn};

use sortbox_core::{sanitize_filename, PlacedFile, Placer};

use crate::metrics::{UPLOAD_FILES_SKIPPED, UPLOAD_REQUESTS_REJECTED, UPLOAD_REQUESTS_TOTAL};
use crate::state::AppState;

// ============================================================================
// Response types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub saved: Vec<SavedFile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SavedFile {
    /// Filename as the client sent it.
    pub original: String,
    /// Final path relative to the server working directory.
    pub stored: PathBuf,
    /// Category folder the file landed in.
    pub category: String,
}

impl SavedFile {
    fn from_placed(original: String, placed: PlacedFile) -> Self {
        Self {
            original,
            stored: placed.stored,
            category: placed.category,
        }
    }
}

fn reject(status: StatusCode, message: &str) -> (StatusCode, Json<UploadResponse>) {
    (
        status,
        Json(UploadResponse {
            success: false,
            saved: vec![],
            message: Some(message.to_string()),
        }),
    )
}

// ============================================================================
// Handler
// ============================================================================

/// POST /upload
///
/// Accepts multipart form data with one or more entries in the `files`
/// field. Each file is staged into the upload root, then moved into its
/// category folder. Files whose name sanitizes to nothing are skipped.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, Json<UploadResponse>)> {
    let mut saw_files_field = false;
    let mut saved = Vec::new();

    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("files") {
            continue;
        }
        saw_files_field = true;

        let original = field.file_name().unwrap_or("").to_string();
        if original.is_empty() {
            continue;
        }

        let Some(file_name) = sanitize_filename(&original) else {
            debug!("Skipping upload with unusable name {:?}", original);
            UPLOAD_FILES_SKIPPED.inc();
            continue;
        };

        let data = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return Err(reject(
                    StatusCode::BAD_REQUEST,
                    &format!("Failed to read file: {}", e),
                ))
            }
        };

        let staged = state.placer().stage(&file_name, &data).await.map_err(|e| {
            warn!("Failed to stage {:?}: {}", file_name, e);
            reject(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        })?;

        let placed = state.placer().place(&staged).await.map_err(|e| {
            warn!("Failed to place {:?}: {}", staged, e);
            reject(StatusCode::INTERNAL_SERVER_ERROR, &e.to_string())
        })?;

        saved.push(SavedFile::from_placed(original, placed));
    }

    if !saw_files_field {
        UPLOAD_REQUESTS_REJECTED.inc();
        return Err(reject(
            StatusCode::BAD_REQUEST,
            "No file part 'files' found",
        ));
    }

    UPLOAD_REQUESTS_TOTAL.inc();
    Ok(Json(UploadResponse {
        success: true,
        saved,
        message: None,
    }))
}
