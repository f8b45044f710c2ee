//! Composition root wiring the ingestion and query pipelines

use std::sync::Arc;

use crate::config::RagConfig;
use crate::error::Result;
use crate::generation::AnswerSynthesizer;
use crate::index::SharedIndex;
use crate::ingestion::{Chunker, IngestionPipeline};
use crate::providers::{CompletionProvider, EmbeddingProvider, OllamaClient};
use crate::query::QueryPipeline;
use crate::retrieval::Retriever;
use crate::types::{Answer, IngestReport, PageText, RetrievalResult};

/// The answering core, fully wired.
///
/// Owns the single shared index and both pipelines; no module-level state.
/// Each instance has its own index, so independent services (and tests) are
/// fully isolated. Providers are injected, which is how tests substitute
/// deterministic stubs for the live models.
pub struct RagService {
    index: SharedIndex,
    ingestion: IngestionPipeline,
    query: QueryPipeline,
}

impl RagService {
    /// Build a service from configuration and injected model capabilities.
    pub fn new(
        config: &RagConfig,
        embedder: Arc<dyn EmbeddingProvider>,
        completion: Arc<dyn CompletionProvider>,
    ) -> Self {
        let index = SharedIndex::new();

        let ingestion = IngestionPipeline::new(
            Chunker::from_config(&config.chunking),
            Arc::clone(&embedder),
            index.clone(),
        );

        let retriever = Retriever::new(embedder, index.clone(), config.retrieval.top_k);
        let query = QueryPipeline::new(retriever, AnswerSynthesizer::new(completion));

        tracing::info!(
            chunk_size = config.chunking.chunk_size,
            top_k = config.retrieval.top_k,
            "RAG service initialized"
        );

        Self {
            index,
            ingestion,
            query,
        }
    }

    /// Build a service wired to Ollama for both model capabilities.
    pub fn from_config(config: &RagConfig) -> Result<Self> {
        let client = Arc::new(OllamaClient::new(&config.llm)?);
        let embedder: Arc<dyn EmbeddingProvider> = client.clone();
        let completion: Arc<dyn CompletionProvider> = client;
        Ok(Self::new(config, embedder, completion))
    }

    /// Ingest document text, replacing the entire index with its chunks.
    pub async fn ingest(&self, document_text: &str, source: &str) -> Result<IngestReport> {
        self.ingestion.ingest(document_text, source).await
    }

    /// Ingest per-page extracted text, replacing the entire index.
    pub async fn ingest_pages(&self, source: &str, pages: &[PageText]) -> Result<IngestReport> {
        self.ingestion.ingest_pages(source, pages).await
    }

    /// Answer a question from the currently published index.
    pub async fn answer(&self, question: &str) -> Result<Answer> {
        self.query.answer(question).await
    }

    /// Retrieve the top-k chunks for a question without synthesis.
    pub async fn retrieve(&self, question: &str) -> Result<RetrievalResult> {
        self.query.retriever().retrieve(question).await
    }

    /// Whether at least one ingestion has been published
    pub fn is_ready(&self) -> bool {
        self.index.is_ready()
    }
}
