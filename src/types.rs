//! Core data types: chunks, retrieval results, answers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A bounded-size span of source text with provenance tags.
///
/// Chunks are immutable once created. The `text` begins with the provenance
/// marker (`[source: S, page: N]`) followed by the chunk body; `page` is the
/// page on which the chunk's first word appeared, so a chunk spanning a page
/// boundary carries the marker of the page where its content began.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Unique chunk ID
    pub id: Uuid,
    /// Marker-prefixed chunk text
    pub text: String,
    /// Source label supplied by the upstream extraction collaborator
    pub source: String,
    /// Page number (1-indexed) of the chunk's first word
    pub page: u32,
    /// Position of this chunk within its ingestion call
    pub sequence: u32,
}

impl Chunk {
    /// Create a chunk, prefixing the body with its provenance marker.
    pub fn new(body: String, source: String, page: u32, sequence: u32) -> Self {
        let text = format!("{} {}", provenance_marker(&source, page), body);
        Self {
            id: Uuid::new_v4(),
            text,
            source,
            page,
            sequence,
        }
    }

    /// Chunk text with the provenance marker stripped.
    pub fn body(&self) -> &str {
        let marker = provenance_marker(&self.source, self.page);
        self.text
            .strip_prefix(marker.as_str())
            .map(str::trim_start)
            .unwrap_or(&self.text)
    }
}

/// Format the provenance marker for a source and page.
pub fn provenance_marker(source: &str, page: u32) -> String {
    format!("[source: {}, page: {}]", source, page)
}

/// One page of extracted text from the upstream document extraction step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub page: u32,
    /// Extracted text for this page
    pub text: String,
}

impl PageText {
    /// Create a page of extracted text
    pub fn new(page: u32, text: impl Into<String>) -> Self {
        Self {
            page,
            text: text.into(),
        }
    }
}

/// A retrieved chunk with its similarity score
#[derive(Debug, Clone)]
pub struct ScoredChunk {
    /// The retrieved chunk
    pub chunk: Chunk,
    /// Cosine similarity to the query (higher is more similar)
    pub score: f32,
}

/// Ordered retrieval output: at most k chunks, descending similarity,
/// ties broken by original insertion order.
pub type RetrievalResult = Vec<ScoredChunk>;

/// A grounded answer produced by the query pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Answer text, with source attribution embedded per the grounding rules
    pub text: String,
}

impl Answer {
    /// Create an answer
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Acknowledgement returned by the ingestion pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestReport {
    /// Source label of the ingested document
    pub source: String,
    /// Number of chunks embedded and indexed
    pub chunks_indexed: usize,
}
