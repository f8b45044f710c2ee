//! Error types for the answering core

use thiserror::Error;

/// Result type alias for RAG operations
pub type Result<T> = std::result::Result<T, Error>;

/// Closed error taxonomy for the answering core.
///
/// Provider failures are surfaced to the caller as-is; retry policy is a
/// caller concern. The only intentional downgrade anywhere in the crate is
/// the grounding fallback answer, which is a successful `Answer`, not an
/// error.
#[derive(Debug, Error)]
pub enum Error {
    /// Embedding provider failed (timeout, rate limit, bad response)
    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    /// Completion provider failed
    #[error("Completion generation failed: {0}")]
    Completion(String),

    /// Search or query issued before any successful index build
    #[error("Vector index is not initialized; ingest documents first")]
    IndexNotReady,

    /// Ingestion called with text that produced no chunks
    #[error("Ingestion received empty document text for source '{0}'")]
    EmptyInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal invariant violation
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create an embedding error
    pub fn embedding(message: impl Into<String>) -> Self {
        Self::Embedding(message.into())
    }

    /// Create a completion error
    pub fn completion(message: impl Into<String>) -> Self {
        Self::Completion(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
