//! Document ingestion: chunking and index building

pub mod chunker;
pub mod pipeline;

pub use chunker::Chunker;
pub use pipeline::IngestionPipeline;
