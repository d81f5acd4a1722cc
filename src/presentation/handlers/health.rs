use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::presentation::state::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// False until an inference credential is configured.
    pub models_configured: bool,
    pub scaffold_mode: bool,
}

pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let models_configured = state.analysis_service.ensure_configured().is_ok();

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy",
            version: env!("CARGO_PKG_VERSION"),
            models_configured,
            scaffold_mode: state.scaffold_config.enabled,
        }),
    )
}
