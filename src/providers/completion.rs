//! Completion capability: prompt -> generated text

use async_trait::async_trait;

use crate::error::Result;

/// Trait for prompt completion.
///
/// The synthesizer hands the full grounded prompt to this capability and
/// returns its output as-is; failures surface as
/// [`crate::Error::Completion`].
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Complete a prompt
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging
    fn name(&self) -> &str;
}
