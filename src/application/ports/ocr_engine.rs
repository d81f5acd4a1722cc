use async_trait::async_trait;

use crate::domain::{OcrLanguage, PageImage};

/// Black-box image-to-text recognition.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, page: &PageImage, language: OcrLanguage) -> Result<String, OcrError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("ocr request failed on page {page}: {message}")]
    RequestFailed { page: usize, message: String },
    #[error("invalid ocr response on page {page}: {message}")]
    InvalidResponse { page: usize, message: String },
}
