use std::time::Duration;

use async_trait::async_trait;
use image::ImageFormat;
use pdfium_render::prelude::*;

use crate::application::ports::{FileLoaderError, PageRasterizer};
use crate::domain::{ContentType, Document, PageImage};

use super::pdfium_binding::bind_pdfium;

const RASTERIZE_TIMEOUT: Duration = Duration::from_secs(120);
const RENDER_DPI: f32 = 150.0;

#[derive(Default)]
pub struct PdfiumRasterizer;

impl PdfiumRasterizer {
    pub fn new() -> Self {
        Self
    }

    fn render_pages(data: &[u8], max_pages: usize) -> Result<Vec<PageImage>, FileLoaderError> {
        let pdfium = bind_pdfium()?;
        let doc = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("pdfium open failed: {e}")))?;

        let pages_to_render = (doc.pages().len() as usize).min(max_pages);
        let mut images = Vec::with_capacity(pages_to_render);

        for index in 0..pages_to_render {
            let page = doc.pages().get(index as u16).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!("page {index} access failed: {e}"))
            })?;

            let width = (page.width().value * RENDER_DPI / 72.0) as i32;
            let height = (page.height().value * RENDER_DPI / 72.0) as i32;

            let bitmap = page
                .render_with_config(
                    &PdfRenderConfig::new()
                        .set_target_width(width)
                        .set_target_height(height),
                )
                .map_err(|e| {
                    FileLoaderError::ExtractionFailed(format!("render page {index} failed: {e}"))
                })?;

            let mut png_bytes: Vec<u8> = Vec::new();
            bitmap
                .as_image()
                .write_to(&mut std::io::Cursor::new(&mut png_bytes), ImageFormat::Png)
                .map_err(|e| {
                    FileLoaderError::ExtractionFailed(format!("PNG encode page {index} failed: {e}"))
                })?;

            images.push(PageImage::new(index, png_bytes, ContentType::Png.as_mime()));
        }

        Ok(images)
    }
}

#[async_trait]
impl PageRasterizer for PdfiumRasterizer {
    #[tracing::instrument(skip(self, data), fields(filename = %document.filename))]
    async fn rasterize(
        &self,
        data: &[u8],
        document: &Document,
        max_pages: usize,
    ) -> Result<Vec<PageImage>, FileLoaderError> {
        if document.content_type != ContentType::Pdf {
            return Err(FileLoaderError::UnsupportedContentType(
                document.content_type.as_mime().to_string(),
            ));
        }

        let data_owned = data.to_vec();
        let images = tokio::time::timeout(
            RASTERIZE_TIMEOUT,
            tokio::task::spawn_blocking(move || {
                std::panic::catch_unwind(|| Self::render_pages(&data_owned, max_pages))
                    .unwrap_or_else(|_| {
                        Err(FileLoaderError::ExtractionFailed(
                            "panic during PDF rasterization".to_string(),
                        ))
                    })
            }),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF rasterization timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = images.len(), "PDF rasterization complete");
        Ok(images)
    }
}
