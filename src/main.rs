use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use condo_advocate::application::ports::LlmClient;
use condo_advocate::application::services::{
    BackendPool, BracketMode, DocumentAnalysisService, FanOutCoordinator, LegalAssistantService,
    OcrFallback, RoundRobinBackendPool, SuggestionService, TextChunker,
};
use condo_advocate::infrastructure::llm::ChatCompletionsClient;
use condo_advocate::infrastructure::observability::{TracingConfig, init_tracing};
use condo_advocate::infrastructure::text_processing::{
    PdfAdapter, PdfiumRasterizer, VlmOcrEngine,
};
use condo_advocate::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );
    tracing::debug!(?settings, "Configuration loaded");

    let llm_client: Arc<dyn LlmClient> =
        Arc::new(ChatCompletionsClient::from_settings(&settings.llm));
    if !llm_client.has_credential() {
        tracing::warn!("No inference credential configured; model endpoints will return 500");
    }

    let ocr_engine = VlmOcrEngine::from_settings(
        &settings.extraction.ocr,
        &settings.llm.base_url,
        &settings.llm.api_key,
    )
    .context("Failed to build OCR client")?;

    let ocr_fallback = OcrFallback::new(
        Arc::new(PdfiumRasterizer::new()),
        Arc::new(ocr_engine),
        settings.extraction.ocr.max_pages,
    );

    let analysis_pool = RoundRobinBackendPool::new(settings.llm.analysis_models.clone())
        .context("llm.analysis_models")?;
    let suggestion_pool = RoundRobinBackendPool::new(settings.llm.suggestion_models.clone())
        .context("llm.suggestion_models")?;
    tracing::info!(
        analysis_models = ?analysis_pool.backends(),
        suggestion_models = ?suggestion_pool.backends(),
        "Backend pools ready"
    );

    let max_concurrent_calls = settings.dispatch.max_concurrent_calls;

    let analysis_service = Arc::new(DocumentAnalysisService::new(
        Arc::new(PdfAdapter::new()),
        ocr_fallback,
        Arc::clone(&llm_client),
        Arc::new(analysis_pool),
        TextChunker::new(
            settings.chunking.max_chunk_length,
            settings.chunking.min_chunk_content,
        ),
        FanOutCoordinator::new(max_concurrent_calls, BracketMode::ArrayOnly),
        settings.extraction.min_native_text_length,
    ));

    let suggestion_service = Arc::new(SuggestionService::new(
        Arc::clone(&llm_client),
        Arc::new(suggestion_pool),
        FanOutCoordinator::new(max_concurrent_calls, BracketMode::ArrayOrObject),
        settings.chunking.max_items_per_batch,
    ));

    let legal_assistant_service = Arc::new(LegalAssistantService::new(
        Arc::clone(&llm_client),
        settings.llm.legal_model.clone(),
        settings.llm.letter_model.clone(),
    ));

    if settings.scaffold.enabled {
        tracing::warn!("Scaffold mode enabled: analyze-pdf returns sample data");
    }

    let state = AppState {
        analysis_service,
        suggestion_service,
        legal_assistant_service,
        scaffold_config: settings.scaffold.clone(),
        max_upload_bytes: settings.server.max_upload_bytes,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server.host / server.port")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
