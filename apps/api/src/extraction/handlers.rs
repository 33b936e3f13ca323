//! Axum route handler for PDF upload.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::{build_document, loader::load_document};
use crate::state::AppState;

/// Multipart field carrying the resume.
pub const UPLOAD_FIELD: &str = "pdf_file";
/// Largest accepted upload.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

const TOO_LARGE: &str = "PDF too large (max 10MB)";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub latex_code: String,
    pub message: String,
}

/// POST /api/upload-pdf/
///
/// Accepts a multipart `pdf_file`, extracts resume fields, and returns the
/// rendered LaTeX. Unreadable PDFs still succeed with the default template.
pub async fn handle_upload_pdf(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    let mut multipart =
        multipart.map_err(|_| AppError::Validation("No PDF uploaded".to_string()))?;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(AppError::Validation("Only PDF files allowed".to_string()));
        }

        let data = field.bytes().await.map_err(multipart_error)?;
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::Validation(TOO_LARGE.to_string()));
        }

        info!("Received upload {:?} ({} bytes)", filename, data.len());

        let text = load_document(data, filename, state.config.scratch_dir.clone()).await?;
        let latex_code = build_document(&text);

        return Ok(Json(UploadResponse {
            success: true,
            latex_code,
            message: "PDF converted successfully!".to_string(),
        }));
    }

    Err(AppError::Validation("No PDF uploaded".to_string()))
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Validation(TOO_LARGE.to_string())
    } else {
        AppError::Validation(format!("Invalid upload: {}", err.body_text()))
    }
}
