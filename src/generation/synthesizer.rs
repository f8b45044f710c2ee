//! Answer synthesis from retrieved context

use std::sync::Arc;

use crate::error::Result;
use crate::providers::CompletionProvider;
use crate::types::{Answer, RetrievalResult};

use super::prompt::PromptBuilder;

/// Combines retrieved chunks and the question into a grounded prompt and
/// invokes the completion capability.
///
/// The completion output is returned as-is; there is no post-hoc check that
/// the grounding rules were honored. An empty retrieval still issues the
/// call with an empty context so that rule 3 produces the fallback answer.
pub struct AnswerSynthesizer {
    completion: Arc<dyn CompletionProvider>,
}

impl AnswerSynthesizer {
    /// Create a synthesizer over a completion provider
    pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
        Self { completion }
    }

    /// Synthesize a grounded answer for a question from its retrieval result.
    pub async fn synthesize(
        &self,
        question: &str,
        retrieved: &RetrievalResult,
    ) -> Result<Answer> {
        let context = PromptBuilder::build_context(retrieved);
        if context.is_empty() {
            tracing::debug!("empty retrieval context, relying on not-found rule");
        }
        let prompt = PromptBuilder::build_grounded_prompt(question, &context);

        let text = self.completion.complete(&prompt).await?;
        Ok(Answer::new(text))
    }
}
