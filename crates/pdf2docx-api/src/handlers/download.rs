use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, Response, StatusCode},
    response::IntoResponse,
};
use pdf2docx_core::constants::DOCX_CONTENT_TYPE;
use pdf2docx_core::AppError;
use pdf2docx_storage::StorageError;
use std::sync::Arc;

#[utoipa::path(
    get,
    path = "/downloads/{filename}",
    tag = "downloads",
    params(
        ("filename" = String, Path, description = "Generated document file name")
    ),
    responses(
        (status = 200, description = "Word document", content_type = "application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        (status = 400, description = "Invalid file name", body = ErrorResponse),
        (status = 404, description = "File not found", body = ErrorResponse)
    )
)]
pub async fn download_document(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    // The storage layer sanitizes the name; a key that could escape the
    // output directory is rejected before touching the filesystem.
    let data = state.output.get(&filename).await.map_err(|e| match e {
        StorageError::NotFound(_) => HttpAppError(AppError::NotFound("file not found".to_string())),
        other => HttpAppError::from(other),
    })?;

    tracing::debug!(filename = %filename, size_bytes = data.len(), "Serving generated document");

    let content_disposition = format!("attachment; filename=\"{}\"", filename);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, DOCX_CONTENT_TYPE)
        .header(header::CONTENT_DISPOSITION, content_disposition.as_str())
        .body(Body::from(data))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {}", e)))?;

    Ok(response)
}
