use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{ContentType, Document, ExtractedText};

use super::pdfium_binding::bind_pdfium;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads the embedded text layer of a PDF. Scanned documents come back with
/// little or no text, which is the cue for OCR.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: &[u8]) -> Result<ExtractedText, FileLoaderError> {
        let pdfium = bind_pdfium()?;
        let doc = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let pages = doc.pages();
        let page_count = pages.len() as usize;
        let mut texts = Vec::with_capacity(page_count);

        for (page_index, page) in pages.iter().enumerate() {
            match page.text() {
                Ok(text) => {
                    let text = text.all();
                    if !text.trim().is_empty() {
                        texts.push(text);
                    }
                }
                Err(e) => {
                    tracing::debug!(page_index, error = %e, "No text layer on page");
                }
            }
        }

        Ok(ExtractedText::new(texts.join("\n\n"), page_count))
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let data_owned = data.to_vec();
        let extracted = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(&data_owned)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(
            page_count = extracted.page_count,
            text_chars = extracted.content_length(),
            "PDF text extraction complete"
        );

        Ok(extracted)
    }
}
