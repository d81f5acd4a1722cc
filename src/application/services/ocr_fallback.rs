use std::sync::Arc;

use futures::future::join_all;

use crate::application::ports::{OcrEngine, PageRasterizer};
use crate::domain::{Document, OcrLanguage, PageImage};

pub const DEFAULT_MAX_OCR_PAGES: usize = 50;

pub struct OcrFallback {
    rasterizer: Arc<dyn PageRasterizer>,
    engine: Arc<dyn OcrEngine>,
    max_pages: usize,
}

impl OcrFallback {
    pub fn new(
        rasterizer: Arc<dyn PageRasterizer>,
        engine: Arc<dyn OcrEngine>,
        max_pages: usize,
    ) -> Self {
        Self {
            rasterizer,
            engine,
            max_pages: max_pages.max(1),
        }
    }

    #[tracing::instrument(
        skip(self, data, document, language),
        fields(filename = %document.filename, language = %language)
    )]
    pub async fn extract_text_with_ocr(
        &self,
        data: &[u8],
        document: &Document,
        language: OcrLanguage,
        page_count: usize,
    ) -> String {
        let pages = if document.content_type.is_image() {
            vec![PageImage::new(0, data.to_vec(), document.content_type.as_mime())]
        } else {
            let limit = match page_count {
                0 => self.max_pages,
                n => n.min(self.max_pages),
            };
            match self.rasterizer.rasterize(data, document, limit).await {
                Ok(pages) => pages,
                Err(e) => {
                    tracing::warn!(error = %e, "Rasterization failed, no OCR text available");
                    return String::new();
                }
            }
        };

        let recognitions = pages.iter().map(|page| async move {
            (page.page_index, self.engine.recognize(page, language).await)
        });

        let mut texts = Vec::with_capacity(pages.len());
        for (page_index, outcome) in join_all(recognitions).await {
            match outcome {
                Ok(text) if !text.trim().is_empty() => texts.push(text.trim().to_string()),
                Ok(_) => tracing::debug!(page_index, "OCR found no text on page"),
                Err(e) => tracing::warn!(page_index, error = %e, "OCR failed for page, skipping"),
            }
        }

        tracing::info!(
            pages = pages.len(),
            recognized_pages = texts.len(),
            "OCR fallback complete"
        );

        texts.join("\n\n")
    }
}
