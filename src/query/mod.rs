//! Query orchestration: retrieve then synthesize

use std::time::Instant;

use crate::error::Result;
use crate::generation::AnswerSynthesizer;
use crate::retrieval::Retriever;
use crate::types::Answer;

/// Orchestrates Retriever -> AnswerSynthesizer for one question.
pub struct QueryPipeline {
    retriever: Retriever,
    synthesizer: AnswerSynthesizer,
}

impl QueryPipeline {
    /// Create a query pipeline
    pub fn new(retriever: Retriever, synthesizer: AnswerSynthesizer) -> Self {
        Self {
            retriever,
            synthesizer,
        }
    }

    /// Answer a question from the currently published index.
    ///
    /// Fails with [`crate::Error::IndexNotReady`] if no ingestion has
    /// succeeded yet. Provider failures propagate unchanged; the only
    /// "soft" outcome is the grounding fallback answer, which is success.
    pub async fn answer(&self, question: &str) -> Result<Answer> {
        let start = Instant::now();

        let retrieved = self.retriever.retrieve(question).await?;
        let answer = self.synthesizer.synthesize(question, &retrieved).await?;

        tracing::info!(
            chunks_used = retrieved.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "query answered"
        );

        Ok(answer)
    }

    /// Access the retriever (e.g. for retrieval-only inspection)
    pub fn retriever(&self) -> &Retriever {
        &self.retriever
    }
}
