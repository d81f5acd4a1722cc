pub const DEFAULT_MAX_CHUNK_LENGTH: usize = 8000;
pub const DEFAULT_MIN_CHUNK_CONTENT: usize = 10;

/// Hard character-count splitter. Slices are contiguous, non-overlapping and
/// never cut inside a code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextChunker {
    max_length: usize,
    min_content: usize,
}

impl TextChunker {
    pub fn new(max_length: usize, min_content: usize) -> Self {
        Self {
            max_length: max_length.max(1),
            min_content,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut chunks = Vec::with_capacity(text.len() / self.max_length + 1);
        let mut start = 0;
        let mut count = 0;

        for (offset, _) in text.char_indices() {
            if count == self.max_length {
                chunks.push(&text[start..offset]);
                start = offset;
                count = 0;
            }
            count += 1;
        }

        if start < text.len() {
            chunks.push(&text[start..]);
        }

        chunks
    }

    pub fn usable_chunks<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.split(text)
            .into_iter()
            .filter(|chunk| chunk.trim().chars().count() > self.min_content)
            .collect()
    }
}

impl Default for TextChunker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHUNK_LENGTH, DEFAULT_MIN_CHUNK_CONTENT)
    }
}
