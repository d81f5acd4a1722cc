use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    analyze_legal_handler, analyze_pdf_handler, generate_dispute_letter_handler,
    generate_suggestions_handler, health_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    let api = Router::new()
        .route("/analyze-pdf", post(analyze_pdf_handler))
        .route("/generate-suggestions", post(generate_suggestions_handler))
        .route("/analyze-legal", post(analyze_legal_handler))
        .route("/generate-dispute-letter", post(generate_dispute_letter_handler));

    Router::new()
        .route("/health", get(health_handler))
        .merge(api.clone())
        .nest("/api", api)
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
