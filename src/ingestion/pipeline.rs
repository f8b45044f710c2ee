//! Ingestion orchestration: chunk, embed, build, publish

use std::sync::Arc;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::index::{SharedIndex, VectorIndex};
use crate::providers::EmbeddingProvider;
use crate::types::{Chunk, IngestReport, PageText};

use super::chunker::Chunker;

/// Orchestrates Chunker -> embedding batch -> index build -> atomic publish.
///
/// NOT incremental: every call builds a fresh index from only this call's
/// chunks and replaces the previous one wholesale. Callers that want a
/// multi-document corpus must submit all text in one call. Concurrent
/// ingestions race and the last publish wins; there is no merge.
pub struct IngestionPipeline {
    chunker: Chunker,
    embedder: Arc<dyn EmbeddingProvider>,
    index: SharedIndex,
}

impl IngestionPipeline {
    /// Create an ingestion pipeline over a shared index slot
    pub fn new(chunker: Chunker, embedder: Arc<dyn EmbeddingProvider>, index: SharedIndex) -> Self {
        Self {
            chunker,
            embedder,
            index,
        }
    }

    /// Ingest a single block of document text under a source label.
    ///
    /// Empty or whitespace-only text is a rejected call
    /// ([`Error::EmptyInput`]), not a silent no-op.
    pub async fn ingest(&self, document_text: &str, source: &str) -> Result<IngestReport> {
        let chunks = self.chunker.chunk(document_text, source);
        self.embed_and_publish(chunks, source).await
    }

    /// Ingest per-page extracted text, preserving page provenance.
    pub async fn ingest_pages(&self, source: &str, pages: &[PageText]) -> Result<IngestReport> {
        let chunks = self.chunker.chunk_pages(source, pages);
        self.embed_and_publish(chunks, source).await
    }

    async fn embed_and_publish(&self, chunks: Vec<Chunk>, source: &str) -> Result<IngestReport> {
        if chunks.is_empty() {
            return Err(Error::EmptyInput(source.to_string()));
        }

        let start = Instant::now();
        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        // Built off to the side, then published with one pointer swap so
        // concurrent readers never observe a partial index.
        let index = VectorIndex::build(chunks, embeddings)?;
        let chunks_indexed = index.len();
        self.index.publish(index);

        tracing::info!(
            source,
            chunks = chunks_indexed,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "ingestion complete, index replaced"
        );

        Ok(IngestReport {
            source: source.to_string(),
            chunks_indexed,
        })
    }
}
