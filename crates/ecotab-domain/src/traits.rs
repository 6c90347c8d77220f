//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Trait for text-generation providers
///
/// Implemented by the infrastructure layer (ecotab-llm). The extractor sends
/// one prompt per text block and expects zero or more
/// `field1|field2|field3[|field4]` lines back.
pub trait LlmProvider {
    /// Error type for generation calls
    type Error;

    /// Generate a completion for the prompt
    fn generate(&self, prompt: &str) -> Result<String, Self::Error>;

    /// Model identifier, used in extraction metadata
    fn model_name(&self) -> &str;
}
