//! Ecotab LLM Provider Layer
//!
//! Pluggable text-generation providers for the extraction pipeline.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` trait from `ecotab-domain`.
//! Every backend answers one prompt per text block with a plain-text completion.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic scripted responses for testing
//! - `OllamaProvider`: Local Ollama API integration
//! - `GroqProvider`: Groq's OpenAI-compatible chat completions API
//!
//! # Examples
//!
//! ```
//! use ecotab_llm::MockProvider;
//! use ecotab_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("PIB|4,2%|Q1 2025|Le PIB a progressé de 4,2%");
//! let result = provider.generate("any prompt").unwrap();
//! assert!(result.starts_with("PIB"));
//! ```

#![warn(missing_docs)]

pub mod groq;
pub mod ollama;

use ecotab_domain::traits::LlmProvider as LlmProviderTrait;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use thiserror::Error;

pub use groq::GroqProvider;
pub use ollama::OllamaProvider;

/// Default number of attempts for remote providers
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// API key missing or rejected
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Exponential backoff delay before retry number `attempt` (1-based): 1s, 2s, 4s, ...
pub(crate) fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(2u64.pow(attempt.saturating_sub(1)))
}

/// Run an async provider call to completion from synchronous code
///
/// The extractor invokes providers from a blocking worker thread, so a
/// dedicated current-thread runtime is used here.
pub(crate) fn block_on<F, T>(future: F) -> Result<T, LlmError>
where
    F: Future<Output = Result<T, LlmError>>,
{
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| LlmError::Other(format!("Failed to start runtime: {}", e)))?
        .block_on(future)
}

#[derive(Debug, Clone)]
enum Scripted {
    Reply(String),
    Fail,
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Scripted responses are keyed by a marker: the first marker contained in
/// the prompt selects the reply, otherwise the default response is used.
///
/// # Examples
///
/// ```
/// use ecotab_llm::MockProvider;
/// use ecotab_domain::traits::LlmProvider;
///
/// let mut provider = MockProvider::new("");
/// provider.add_response("inflation", "Inflation|2,2%|Q1 2025|L'inflation a atteint 2,2%");
/// assert!(provider.generate("... inflation ...").unwrap().starts_with("Inflation"));
/// assert_eq!(provider.generate("other").unwrap(), "");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<Vec<(String, Scripted)>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    model: String,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            model: "mock".to_string(),
        }
    }

    /// Set the reported model name
    pub fn with_model_name(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Reply with `response` to any prompt containing `marker`
    pub fn add_response(&mut self, marker: impl Into<String>, response: impl Into<String>) {
        lock(&self.responses).push((marker.into(), Scripted::Reply(response.into())));
    }

    /// Fail any prompt containing `marker`
    pub fn add_error(&mut self, marker: impl Into<String>) {
        lock(&self.responses).push((marker.into(), Scripted::Fail));
    }

    /// Get the number of times generate was called
    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    /// Forget recorded prompts
    pub fn reset_call_count(&self) {
        lock(&self.prompts).clear();
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        lock(&self.prompts).push(prompt.to_string());

        let responses = lock(&self.responses);
        match responses.iter().find(|(marker, _)| prompt.contains(marker.as_str())) {
            Some((_, Scripted::Reply(response))) => Ok(response.clone()),
            Some((marker, Scripted::Fail)) => {
                Err(LlmError::Other(format!("Mock error for '{}'", marker)))
            }
            None => Ok(self.default_response.clone()),
        }
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
