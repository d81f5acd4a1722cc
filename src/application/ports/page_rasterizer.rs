use async_trait::async_trait;

use crate::domain::{Document, PageImage};

use super::FileLoaderError;

#[async_trait]
pub trait PageRasterizer: Send + Sync {
    /// Renders at most `max_pages` pages of the document as images.
    async fn rasterize(
        &self,
        data: &[u8],
        document: &Document,
        max_pages: usize,
    ) -> Result<Vec<PageImage>, FileLoaderError>;
}
