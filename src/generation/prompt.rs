//! Prompt templates enforcing the grounding rules

use crate::types::RetrievalResult;

/// Fixed fallback answer required by grounding rule 3.
///
/// The completion model is instructed to reply with exactly this text when
/// the context does not contain the answer; tests and callers compare
/// against this constant.
pub const NOT_FOUND_MESSAGE: &str = "The answer was not found in the documents.";

/// Builds the grounded prompt from a fixed instruction block, the retrieved
/// context, and the verbatim question.
///
/// Pure string composition, unit-testable without any model provider.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Concatenate the retrieved chunks into the context block.
    ///
    /// Chunk texts already carry their provenance markers, so the model can
    /// cite sources directly from the context.
    pub fn build_context(retrieved: &RetrievalResult) -> String {
        retrieved
            .iter()
            .map(|scored| scored.chunk.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Build the full grounded prompt: instruction block, context, question.
    pub fn build_grounded_prompt(question: &str, context: &str) -> String {
        format!(
            r#"You are a document-grounded assistant. Follow these rules exactly:
1. Answer ONLY using the information in the Context below.
2. Always cite the source of the information you use, as given in the context markers.
3. If the answer is not present in the Context, respond with exactly: "{not_found}"
4. Maintain a courteous, professional tone.
5. Quote relevant passages from the Context when it helps the answer.

Context:
{context}

Question: {question}
"#,
            not_found = NOT_FOUND_MESSAGE,
            context = context,
            question = question,
        )
    }
}
