use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::LegalAssistantError;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalQuestionRequest {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub language_note: Option<String>,
}

#[derive(Serialize)]
pub struct LegalAnswerResponse {
    pub answer: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisputeLetterRequest {
    #[serde(default)]
    pub context: String,
    #[serde(default)]
    pub language_note: Option<String>,
}

#[derive(Serialize)]
pub struct DisputeLetterResponse {
    pub letter: String,
}

#[tracing::instrument(skip(state, payload))]
pub async fn analyze_legal_handler(
    State(state): State<AppState>,
    payload: Result<Json<LegalQuestionRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return error_response(StatusCode::BAD_REQUEST, "Missing question or region");
    };

    match state
        .legal_assistant_service
        .answer_question(
            &request.question,
            &request.region,
            request.language_note.as_deref(),
        )
        .await
    {
        Ok(answer) => (StatusCode::OK, Json(LegalAnswerResponse { answer })).into_response(),
        Err(LegalAssistantError::MissingField(_)) => {
            error_response(StatusCode::BAD_REQUEST, "Missing question or region")
        }
        Err(e) => backend_failure(e),
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn generate_dispute_letter_handler(
    State(state): State<AppState>,
    payload: Result<Json<DisputeLetterRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return error_response(StatusCode::BAD_REQUEST, "Missing context");
    };

    match state
        .legal_assistant_service
        .draft_dispute_letter(&request.context, request.language_note.as_deref())
        .await
    {
        Ok(letter) => (StatusCode::OK, Json(DisputeLetterResponse { letter })).into_response(),
        Err(LegalAssistantError::MissingField(_)) => {
            error_response(StatusCode::BAD_REQUEST, "Missing context")
        }
        Err(e) => backend_failure(e),
    }
}

fn backend_failure(error: LegalAssistantError) -> Response {
    tracing::error!(error = %error, "Model call failed");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
}
