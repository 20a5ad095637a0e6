use crate::error::{ErrorResponse, HttpAppError};
use crate::services::ConversionService;
use crate::state::AppState;
use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use pdf2docx_core::constants::{MAX_UPLOAD_SIZE_BYTES, UPLOAD_FIELD_NAME};
use pdf2docx_core::AppError;
use pdf2docx_processing::{UploadValidator, ValidationError};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

/// Sentinel used when the client supplied no file name.
const UNKNOWN_NAME: &str = "unknown";

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub success: bool,
    pub message: String,
    pub download_url: String,
    pub file_name: String,
}

fn multipart_error(err: MultipartError) -> HttpAppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        HttpAppError(AppError::PayloadTooLarge(err.body_text()))
    } else {
        HttpAppError(AppError::InvalidInput(format!(
            "Invalid multipart request: {}",
            err
        )))
    }
}

/// Generate a staging file name unique across concurrent uploads: field
/// prefix, millisecond timestamp, random disambiguator, fixed extension.
fn staged_file_name() -> String {
    format!(
        "{}-{}-{}.pdf",
        UPLOAD_FIELD_NAME,
        Utc::now().timestamp_millis(),
        Uuid::new_v4().simple()
    )
}

#[utoipa::path(
    post,
    path = "/api/convert",
    tag = "convert",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "PDF converted successfully", body = ConvertResponse),
        (status = 400, description = "Missing file or unsupported type", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Conversion failed", body = ErrorResponse)
    )
)]
pub async fn convert_pdf(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ConvertResponse>, HttpAppError> {
    let validator = UploadValidator::new(MAX_UPLOAD_SIZE_BYTES);

    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        let original_name = field
            .file_name()
            .filter(|name| !name.is_empty())
            .unwrap_or(UNKNOWN_NAME)
            .to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(multipart_error)?;

        // Validate before anything is persisted to the staging area.
        validator.validate(&content_type, data.len())?;

        upload = Some((original_name, data.to_vec()));
        break;
    }

    let (original_name, data) = upload.ok_or(ValidationError::MissingFile)?;

    let staged_key = staged_file_name();
    state
        .staging
        .put(&staged_key, data)
        .await
        .map_err(HttpAppError::from)?;

    tracing::debug!(
        original_name = %original_name,
        staged_key = %staged_key,
        "Upload staged, starting conversion"
    );

    let record = ConversionService::new(&state)
        .convert(&staged_key, &original_name)
        .await
        .map_err(HttpAppError::from)?;

    Ok(Json(ConvertResponse {
        success: true,
        message: "File converted successfully".to_string(),
        download_url: record.download_url.unwrap_or_default(),
        file_name: record.file_name.unwrap_or_default(),
    }))
}
