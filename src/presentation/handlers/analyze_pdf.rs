use axum::Json;
use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::services::AnalysisError;
use crate::domain::{ContentType, Document};
use crate::presentation::state::AppState;

use super::error::{error_response, error_response_with_details};
use super::scaffold::scaffold_analysis_response;

const FILE_FIELD: &str = "file";
const LANGUAGE_NOTE_FIELD: &str = "languageNote";

struct Upload {
    filename: String,
    content_type: Option<String>,
    data: Bytes,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn analyze_pdf_handler(State(state): State<AppState>, multipart: Multipart) -> Response {
    let (upload, language_note) = match read_form(multipart).await {
        Ok(form) => form,
        Err(message) => {
            tracing::warn!(error = %message, "Failed to read multipart");
            return error_response(StatusCode::BAD_REQUEST, message);
        }
    };

    let Some(upload) = upload.filter(|u| !u.data.is_empty()) else {
        tracing::warn!("Analyze request with no file");
        return error_response(StatusCode::BAD_REQUEST, "No file provided");
    };

    if state.scaffold_config.enabled {
        return scaffold_analysis_response(&state.scaffold_config, &upload.filename).await;
    }

    if state.analysis_service.ensure_configured().is_err() {
        tracing::error!("Inference credential is not configured");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Missing inference credential");
    }

    let Some(content_type) = ContentType::detect(upload.content_type.as_deref(), &upload.filename)
    else {
        tracing::warn!(
            filename = %upload.filename,
            content_type = ?upload.content_type,
            "Unsupported content type"
        );
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!(
                "Unsupported content type: {}",
                upload.content_type.as_deref().unwrap_or("unknown")
            ),
        );
    };

    let document = Document::new(upload.filename, content_type, upload.data.len() as u64);

    tracing::debug!(
        filename = %document.filename,
        content_type = content_type.as_mime(),
        size_bytes = document.size_bytes,
        "Processing upload"
    );

    match state
        .analysis_service
        .analyze(&upload.data, &document, language_note.as_deref())
        .await
    {
        Ok(items) => {
            tracing::info!(item_count = items.len(), "Document analyzed");
            (StatusCode::OK, Json(items)).into_response()
        }
        Err(AnalysisError::MissingCredential) => {
            tracing::error!("Inference credential is not configured");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Missing inference credential")
        }
        Err(AnalysisError::NoUsableText) => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            "No readable text could be extracted from the document, even with OCR",
        ),
        Err(e) => {
            tracing::error!(error = %e, "Document analysis failed");
            error_response_with_details(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to analyze PDF",
                e.to_string(),
            )
        }
    }
}

async fn read_form(mut multipart: Multipart) -> Result<(Option<Upload>, Option<String>), String> {
    let mut upload = None;
    let mut language_note = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Failed to read multipart: {e}"))?
    {
        match field.name() {
            Some(FILE_FIELD) => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| format!("Failed to read file: {e}"))?;
                upload = Some(Upload {
                    filename,
                    content_type,
                    data,
                });
            }
            Some(LANGUAGE_NOTE_FIELD) => {
                let note = field
                    .text()
                    .await
                    .map_err(|e| format!("Failed to read {LANGUAGE_NOTE_FIELD}: {e}"))?;
                language_note = Some(note).filter(|n| !n.trim().is_empty());
            }
            _ => {}
        }
    }

    Ok((upload, language_note))
}
