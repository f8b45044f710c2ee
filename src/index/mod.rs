//! In-memory vector index with atomic whole-index replacement

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::types::{Chunk, RetrievalResult, ScoredChunk};

/// Immutable nearest-neighbor store over chunk embeddings.
///
/// Built whole from one ingestion call and never mutated afterwards;
/// replacement happens by publishing a new index through [`SharedIndex`].
#[derive(Debug)]
pub struct VectorIndex {
    /// (chunk, embedding) pairs in insertion order
    entries: Vec<(Chunk, Vec<f32>)>,
}

impl VectorIndex {
    /// Build an index from chunks and their embeddings.
    ///
    /// The two sequences must be 1:1 in order; a length mismatch means an
    /// upstream embedding batch silently dropped or duplicated entries.
    pub fn build(chunks: Vec<Chunk>, embeddings: Vec<Vec<f32>>) -> Result<Self> {
        if chunks.len() != embeddings.len() {
            return Err(Error::internal(format!(
                "chunk/embedding count mismatch: {} chunks, {} embeddings",
                chunks.len(),
                embeddings.len()
            )));
        }
        Ok(Self {
            entries: chunks.into_iter().zip(embeddings).collect(),
        })
    }

    /// Number of indexed chunks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the index holds no chunks
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Return up to `k` nearest chunks by cosine similarity.
    ///
    /// Results are ordered by descending similarity; equal scores keep their
    /// original insertion order (the sort is stable).
    pub fn search(&self, query: &[f32], k: usize) -> RetrievalResult {
        let mut results: Vec<ScoredChunk> = self
            .entries
            .iter()
            .map(|(chunk, embedding)| ScoredChunk {
                chunk: chunk.clone(),
                score: cosine_similarity(query, embedding),
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(k);
        results
    }
}

/// Cosine similarity: dot(a, b) / (|a| * |b|).
///
/// Zero-length or zero-norm vectors score 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

/// The single mutable index slot shared between ingestion and queries.
///
/// Ingestion builds a complete [`VectorIndex`] off to the side and publishes
/// it with one pointer swap; readers clone the current `Arc` and search that
/// snapshot, so a search never observes a half-built index or a mix of two
/// builds. Concurrent publishes race and the last one wins; there is no
/// merge and no queueing order between racing ingestions.
#[derive(Clone, Default)]
pub struct SharedIndex {
    slot: Arc<RwLock<Option<Arc<VectorIndex>>>>,
}

impl SharedIndex {
    /// Create an empty, not-yet-ready slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the current index with a freshly built one.
    pub fn publish(&self, index: VectorIndex) {
        let count = index.len();
        *self.slot.write() = Some(Arc::new(index));
        tracing::debug!(chunks = count, "published new vector index");
    }

    /// Take a consistent snapshot of the current index.
    ///
    /// Fails with [`Error::IndexNotReady`] if no build has ever been
    /// published.
    pub fn snapshot(&self) -> Result<Arc<VectorIndex>> {
        self.slot.read().clone().ok_or(Error::IndexNotReady)
    }

    /// Whether at least one build has been published
    pub fn is_ready(&self) -> bool {
        self.slot.read().is_some()
    }
}
