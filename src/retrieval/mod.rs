//! Query-time retrieval over the shared vector index

use std::sync::Arc;

use crate::error::Result;
use crate::index::SharedIndex;
use crate::providers::EmbeddingProvider;
use crate::types::RetrievalResult;

/// Embeds a question and returns its top-k nearest chunks.
pub struct Retriever {
    embedder: Arc<dyn EmbeddingProvider>,
    index: SharedIndex,
    /// Retrieval fan-out used when the caller does not override it
    top_k: usize,
}

impl Retriever {
    /// Create a retriever with a default fan-out
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, index: SharedIndex, top_k: usize) -> Self {
        Self {
            embedder,
            index,
            top_k,
        }
    }

    /// Retrieve the top-k most similar chunks for a question.
    ///
    /// Fails with [`crate::Error::IndexNotReady`] before the first
    /// successful ingestion.
    pub async fn retrieve(&self, question: &str) -> Result<RetrievalResult> {
        self.retrieve_k(question, self.top_k).await
    }

    /// Retrieve with an explicit fan-out.
    pub async fn retrieve_k(&self, question: &str, k: usize) -> Result<RetrievalResult> {
        // Snapshot first so a question against an empty slot fails before
        // spending an embedding call.
        let snapshot = self.index.snapshot()?;
        let query_embedding = self.embedder.embed(question).await?;
        let results = snapshot.search(&query_embedding, k);
        tracing::debug!(
            retrieved = results.len(),
            k,
            "retrieved chunks for question"
        );
        Ok(results)
    }
}
