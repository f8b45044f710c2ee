//! Embedding capability: text -> fixed-dimension vector

use async_trait::async_trait;

use crate::error::Result;

/// Trait for generating text embeddings.
///
/// Deterministic per underlying model version. Provider failures surface as
/// [`crate::Error::Embedding`]; implementations must never substitute zero
/// vectors for failed calls.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Generate an embedding for a single text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Generate embeddings for multiple texts, one vector per input in order.
    ///
    /// Default implementation calls `embed` sequentially; implementations
    /// with native batch endpoints should override.
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut embeddings = Vec::with_capacity(texts.len());
        for text in texts {
            embeddings.push(self.embed(text).await?);
        }
        Ok(embeddings)
    }

    /// Provider name for logging
    fn name(&self) -> &str;
}
