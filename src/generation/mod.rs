//! Grounded prompt construction and answer synthesis

pub mod prompt;
pub mod synthesizer;

pub use prompt::{PromptBuilder, NOT_FOUND_MESSAGE};
pub use synthesizer::AnswerSynthesizer;
