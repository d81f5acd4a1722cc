use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::ChargeItem;
use crate::presentation::config::ScaffoldConfig;

/// Canned breakdown returned by `analyze-pdf` in demo mode.
pub fn sample_breakdown() -> Vec<ChargeItem> {
    vec![
        ChargeItem::new(
            "Pool Renovation",
            "Special assessment for pool area renovation",
            850.0,
            false,
        ),
        ChargeItem::new(
            "Legal Fees",
            "Legal fees for ongoing litigation with the previous management company",
            300.0,
            true,
        ),
        ChargeItem::new(
            "Administrative Fee",
            "Processing fee for the special assessment",
            75.0,
            true,
        ),
        ChargeItem::new(
            "Emergency Repairs",
            "Emergency roof repairs after storm damage",
            200.0,
            false,
        ),
        ChargeItem::new("Late Fee", "Late payment penalty", 50.0, true),
    ]
}

#[tracing::instrument(skip(config), fields(scaffold = true))]
pub async fn scaffold_analysis_response(config: &ScaffoldConfig, filename: &str) -> Response {
    if let Some(delay) = config.mock_delay() {
        tokio::time::sleep(delay).await;
    }

    tracing::info!("Scaffold: returning sample breakdown");
    (StatusCode::OK, Json(sample_breakdown())).into_response()
}
