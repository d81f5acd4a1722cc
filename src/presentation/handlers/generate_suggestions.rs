use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::application::services::SuggestionError;
use crate::domain::SuggestionItem;
use crate::presentation::state::AppState;

use super::error::{error_response, error_response_with_details};

const INVALID_BREAKDOWN: &str = "Missing or invalid breakdown";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsRequest {
    #[serde(default)]
    pub breakdown: Option<Value>,
    #[serde(default)]
    pub language_note: Option<String>,
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<SuggestionItem>,
}

#[tracing::instrument(skip(state, payload))]
pub async fn generate_suggestions_handler(
    State(state): State<AppState>,
    payload: Result<Json<SuggestionsRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Invalid suggestions request body");
            return error_response(StatusCode::BAD_REQUEST, INVALID_BREAKDOWN);
        }
    };

    let breakdown = match request.breakdown {
        Some(Value::Array(items)) if !items.is_empty() => items,
        _ => return error_response(StatusCode::BAD_REQUEST, INVALID_BREAKDOWN),
    };

    match state
        .suggestion_service
        .suggest(&breakdown, request.language_note.as_deref())
        .await
    {
        Ok(suggestions) => {
            tracing::info!(suggestion_count = suggestions.len(), "Suggestions generated");
            (StatusCode::OK, Json(SuggestionsResponse { suggestions })).into_response()
        }
        Err(SuggestionError::EmptyBreakdown) => {
            error_response(StatusCode::BAD_REQUEST, INVALID_BREAKDOWN)
        }
        Err(SuggestionError::MissingCredential) => {
            tracing::error!("Inference credential is not configured");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Missing inference credential")
        }
        Err(e) => {
            tracing::error!(error = %e, "Suggestion generation failed");
            error_response_with_details(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server error",
                e.to_string(),
            )
        }
    }
}
