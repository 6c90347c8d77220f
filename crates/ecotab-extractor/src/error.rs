//! Error types for the Extractor

use thiserror::Error;

/// Errors that can occur during extraction
///
/// Only input and configuration problems abort a run. Generation failures
/// for a single block are recorded as block failures instead.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Document text is blank
    #[error("Input text is empty")]
    EmptyInput,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Generation call exceeded the configured timeout
    #[error("Generation timeout")]
    Timeout,

    /// A lexicon term produced an unusable pattern
    #[error("Pattern error: {0}")]
    Pattern(String),
}

impl From<regex::Error> for ExtractorError {
    fn from(e: regex::Error) -> Self {
        ExtractorError::Pattern(e.to_string())
    }
}
