use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, ExtractedText};

/// Treats the upload bytes as UTF-8 text on a single page.
pub struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        _document: &Document,
    ) -> Result<ExtractedText, FileLoaderError> {
        String::from_utf8(data.to_vec())
            .map(|text| ExtractedText::new(text, 1))
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}
