use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient};
use crate::domain::{ChargeItem, Document, ExtractedText, OcrLanguage};

use super::backend_pool::BackendPool;
use super::fan_out::{FanOutCoordinator, merge_records};
use super::model_dispatcher::ModelDispatcher;
use super::ocr_fallback::OcrFallback;
use super::prompts::PromptTemplate;
use super::text_chunker::TextChunker;

pub const DEFAULT_MIN_NATIVE_TEXT_LENGTH: usize = 20;

pub struct DocumentAnalysisService {
    file_loader: Arc<dyn FileLoader>,
    ocr_fallback: OcrFallback,
    llm_client: Arc<dyn LlmClient>,
    backend_pool: Arc<dyn BackendPool>,
    chunker: TextChunker,
    coordinator: FanOutCoordinator,
    min_native_text_length: usize,
}

impl DocumentAnalysisService {
    pub fn new(
        file_loader: Arc<dyn FileLoader>,
        ocr_fallback: OcrFallback,
        llm_client: Arc<dyn LlmClient>,
        backend_pool: Arc<dyn BackendPool>,
        chunker: TextChunker,
        coordinator: FanOutCoordinator,
        min_native_text_length: usize,
    ) -> Self {
        Self {
            file_loader,
            ocr_fallback,
            llm_client,
            backend_pool,
            chunker,
            coordinator,
            min_native_text_length,
        }
    }

    pub fn ensure_configured(&self) -> Result<(), AnalysisError> {
        if self.llm_client.has_credential() {
            Ok(())
        } else {
            Err(AnalysisError::MissingCredential)
        }
    }

    #[tracing::instrument(
        skip(self, data, document, language_note),
        fields(filename = %document.filename, content_type = document.content_type.as_mime())
    )]
    pub async fn analyze(
        &self,
        data: &[u8],
        document: &Document,
        language_note: Option<&str>,
    ) -> Result<Vec<ChargeItem>, AnalysisError> {
        self.ensure_configured()?;

        let language = OcrLanguage::from_language_note(language_note);
        let extracted = self.extract_text(data, document, language).await?;

        let chunks = self.chunker.usable_chunks(&extracted.text);
        if chunks.is_empty() {
            tracing::warn!(
                text_chars = extracted.content_length(),
                "No usable text after extraction"
            );
            return Err(AnalysisError::NoUsableText);
        }

        tracing::info!(
            chunk_count = chunks.len(),
            max_chunk_length = self.chunker.max_length(),
            "Dispatching document chunks"
        );

        let dispatcher = ModelDispatcher::new(
            Arc::clone(&self.llm_client),
            Arc::clone(&self.backend_pool),
            PromptTemplate::analysis().with_language_note(language_note),
        );

        let results = self.coordinator.run(&dispatcher, &chunks).await;
        Ok(merge_records(results))
    }

    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
        language: OcrLanguage,
    ) -> Result<ExtractedText, AnalysisError> {
        let native = if document.content_type.is_image() {
            ExtractedText::empty(1)
        } else {
            self.file_loader.extract_text(data, document).await?
        };

        if native.is_sufficient(self.min_native_text_length) {
            return Ok(native);
        }

        tracing::info!(
            native_chars = native.content_length(),
            page_count = native.page_count,
            "Native text too short, falling back to OCR"
        );

        let text = self
            .ocr_fallback
            .extract_text_with_ocr(data, document, language, native.page_count)
            .await;

        if text.trim().is_empty() {
            return Ok(native);
        }

        Ok(ExtractedText::new(text, native.page_count))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("missing inference credential")]
    MissingCredential,
    #[error("no usable text could be extracted from the document")]
    NoUsableText,
    #[error("text extraction: {0}")]
    Extraction(#[from] FileLoaderError),
}
