/// Text pulled from a document together with the number of pages seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub page_count: usize,
}

impl ExtractedText {
    pub fn new(text: String, page_count: usize) -> Self {
        Self { text, page_count }
    }

    pub fn empty(page_count: usize) -> Self {
        Self {
            text: String::new(),
            page_count,
        }
    }

    /// Character count of the trimmed text.
    pub fn content_length(&self) -> usize {
        self.text.trim().chars().count()
    }

    pub fn is_sufficient(&self, min_length: usize) -> bool {
        self.content_length() >= min_length
    }
}

/// One rendered page handed to the OCR engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageImage {
    pub page_index: usize,
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl PageImage {
    pub fn new(page_index: usize, bytes: Vec<u8>, mime: &'static str) -> Self {
        Self {
            page_index,
            bytes,
            mime,
        }
    }
}
