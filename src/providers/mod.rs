//! Capability abstractions for the external embedding and completion models
//!
//! Both capabilities are injectable dependencies so tests can substitute
//! deterministic stubs for the live Ollama backend.

pub mod completion;
pub mod embedding;
pub mod ollama;

pub use completion::CompletionProvider;
pub use embedding::EmbeddingProvider;
pub use ollama::OllamaClient;
