use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info, warn};

use crate::{
    models::{Product, UploadReport},
    AppState,
};

/// Longest slice of the uploaded file echoed to the log.
const PREVIEW_LIMIT: usize = 500;

// ── Available products ────────────────────────────────────────────────────────

pub async fn available_products(
    State(state): State<AppState>,
) -> (StatusCode, Json<Vec<Product>>) {
    let products = state.catalog.as_ref().clone();
    info!(count = products.len(), "Listed available products");
    (StatusCode::OK, Json(products))
}

// ── Upload ────────────────────────────────────────────────────────────────────

/// Upload stub: accepts the first file under the `files` field, logs what it
/// received, and reports a canned result. The file content is never parsed
/// or validated; a real ingestion pipeline replaces this later.
pub async fn upload_products(mut multipart: Multipart) -> (StatusCode, Json<UploadReport>) {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => {
                warn!("Upload request without a 'files' field");
                return (
                    StatusCode::BAD_REQUEST,
                    Json(UploadReport::rejected(
                        "No 'files' field found in the request",
                        vec!["'files' field not found".to_string()],
                    )),
                );
            }
            Err(err) => {
                warn!(error = %err, "Failed to read multipart body");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(UploadReport::rejected(
                        "Error processing files",
                        vec![format!("server error: {err}")],
                    )),
                );
            }
        };

        if field.name() != Some("files") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            warn!("Upload request with an empty filename");
            return (
                StatusCode::BAD_REQUEST,
                Json(UploadReport::rejected(
                    "No file selected",
                    vec!["no file selected".to_string()],
                )),
            );
        }

        let content_type = field.content_type().map(str::to_string);

        // Only the first file is looked at; extra files are ignored.
        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(error = %err, file = %filename, "Failed to read uploaded file");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(UploadReport::rejected(
                        "Error processing files",
                        vec![format!("server error: {err}")],
                    )),
                );
            }
        };

        info!(
            file = %filename,
            content_type = content_type.as_deref().unwrap_or("unknown"),
            size_bytes = bytes.len(),
            "Received product upload"
        );

        let preview = String::from_utf8_lossy(&bytes);
        let cut = preview
            .char_indices()
            .nth(PREVIEW_LIMIT)
            .map(|(i, _)| i)
            .unwrap_or(preview.len());
        debug!(preview = %&preview[..cut], "Upload content preview");

        return (StatusCode::OK, Json(UploadReport::accepted()));
    }
}
