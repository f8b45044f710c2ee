//! grounded-rag: retrieval-augmented answering core
//!
//! Ingests document text into an in-memory vector index and answers
//! natural-language questions by retrieving the most similar chunks and
//! synthesizing a citation-grounded response through an injected completion
//! model. The HTTP surface, authentication, file upload handling, and the
//! model backends themselves are external collaborators; this crate owns
//! chunking, indexing, retrieval, synthesis, and the consistency rules
//! around the single mutable index.

pub mod config;
pub mod error;
pub mod generation;
pub mod index;
pub mod ingestion;
pub mod providers;
pub mod query;
pub mod retrieval;
pub mod service;
pub mod types;

pub use config::{RagConfig, DEFAULT_TOP_K};
pub use error::{Error, Result};
pub use generation::{AnswerSynthesizer, PromptBuilder, NOT_FOUND_MESSAGE};
pub use index::{SharedIndex, VectorIndex};
pub use ingestion::{Chunker, IngestionPipeline};
pub use providers::{CompletionProvider, EmbeddingProvider, OllamaClient};
pub use query::QueryPipeline;
pub use retrieval::Retriever;
pub use service::RagService;
pub use types::{Answer, Chunk, IngestReport, PageText, RetrievalResult, ScoredChunk};
