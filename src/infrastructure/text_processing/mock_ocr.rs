use crate::application::ports::{FileLoaderError, OcrEngine, OcrError, PageRasterizer};
use crate::domain::{Document, OcrLanguage, PageImage};

/// Renders each page as its index, so the paired engine can look it up.
pub struct MockRasterizer {
    pub page_count: usize,
}

#[async_trait::async_trait]
impl PageRasterizer for MockRasterizer {
    async fn rasterize(
        &self,
        _data: &[u8],
        _document: &Document,
        max_pages: usize,
    ) -> Result<Vec<PageImage>, FileLoaderError> {
        Ok((0..self.page_count.min(max_pages))
            .map(|index| PageImage::new(index, index.to_string().into_bytes(), "image/png"))
            .collect())
    }
}

/// Returns canned text per page; `None` entries fail.
pub struct MockOcrEngine {
    pub pages: Vec<Option<String>>,
}

impl MockOcrEngine {
    pub fn silent() -> Self {
        Self { pages: Vec::new() }
    }
}

#[async_trait::async_trait]
impl OcrEngine for MockOcrEngine {
    async fn recognize(&self, page: &PageImage, _language: OcrLanguage) -> Result<String, OcrError> {
        match self.pages.get(page.page_index) {
            Some(Some(text)) => Ok(text.clone()),
            Some(None) => Err(OcrError::RequestFailed {
                page: page.page_index,
                message: "mock page failure".to_string(),
            }),
            None => Ok(String::new()),
        }
    }
}
