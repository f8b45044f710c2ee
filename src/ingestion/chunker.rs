//! Word-accumulating text chunker with page-aware provenance

use crate::config::ChunkingConfig;
use crate::types::{Chunk, PageText};

/// Splits extracted document text into bounded-size retrievable units.
///
/// Words are accumulated until the running length (word lengths plus one
/// separator per word) reaches the configured target, then the buffer is
/// emitted as a single space-joined chunk. A chunk may exceed the target by
/// at most its final word and is never split mid-word. Chunks that start on
/// one page and run into the next carry the page number where their content
/// began.
pub struct Chunker {
    /// Target chunk size in characters
    chunk_size: usize,
}

impl Chunker {
    /// Create a chunker with the given target size
    pub fn new(chunk_size: usize) -> Self {
        Self { chunk_size }
    }

    /// Create a chunker from configuration
    pub fn from_config(config: &ChunkingConfig) -> Self {
        Self::new(config.chunk_size)
    }

    /// Chunk a single block of text, treated as page 1.
    ///
    /// Empty or whitespace-only input yields an empty sequence.
    pub fn chunk(&self, text: &str, source: &str) -> Vec<Chunk> {
        self.chunk_pages(source, &[PageText::new(1, text)])
    }

    /// Chunk per-page extracted text, tracking page provenance.
    ///
    /// The word buffer carries across page boundaries, so the final chunk of
    /// one page and the first words of the next may land in the same chunk;
    /// that chunk records the page where its first word appeared.
    pub fn chunk_pages(&self, source: &str, pages: &[PageText]) -> Vec<Chunk> {
        let mut chunks = Vec::new();
        let mut buffer: Vec<&str> = Vec::new();
        let mut buffer_len = 0usize;
        let mut buffer_page = 1u32;
        let mut sequence = 0u32;

        for page in pages {
            for word in page.text.split_whitespace() {
                if buffer.is_empty() {
                    buffer_page = page.page;
                }
                buffer.push(word);
                buffer_len += word.len() + 1;

                if buffer_len >= self.chunk_size {
                    chunks.push(Chunk::new(
                        buffer.join(" "),
                        source.to_string(),
                        buffer_page,
                        sequence,
                    ));
                    sequence += 1;
                    buffer.clear();
                    buffer_len = 0;
                }
            }
        }

        if !buffer.is_empty() {
            chunks.push(Chunk::new(
                buffer.join(" "),
                source.to_string(),
                buffer_page,
                sequence,
            ));
        }

        chunks
    }
}
