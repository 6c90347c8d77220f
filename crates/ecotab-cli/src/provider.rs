//! Provider selection.

use crate::config::{ProviderKind, ProviderSettings};
use crate::error::{CliError, Result};
use ecotab_domain::traits::LlmProvider;
use ecotab_llm::{GroqProvider, LlmError, MockProvider, OllamaProvider};

/// Default model when talking to a local Ollama server
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

/// Any of the supported generation backends.
pub enum AnyProvider {
    /// Offline provider
    Mock(MockProvider),
    /// Local Ollama server
    Ollama(OllamaProvider),
    /// Groq hosted API
    Groq(GroqProvider),
}

impl AnyProvider {
    /// Build the provider described by `settings`.
    ///
    /// `api_key` is only consulted for Groq.
    pub fn from_settings(settings: &ProviderSettings, api_key: Option<&str>) -> Result<Self> {
        match settings.kind {
            ProviderKind::Mock => {
                let response = settings.mock_response.clone().unwrap_or_default();
                let model = settings.model.clone().unwrap_or_else(|| "mock".to_string());
                Ok(AnyProvider::Mock(MockProvider::new(response).with_model_name(model)))
            }
            ProviderKind::Ollama => {
                let endpoint = settings
                    .endpoint
                    .as_deref()
                    .unwrap_or(ecotab_llm::ollama::DEFAULT_ENDPOINT);
                let model = settings.model.as_deref().unwrap_or(DEFAULT_OLLAMA_MODEL);
                let provider = OllamaProvider::new(endpoint, model)?
                    .with_max_retries(settings.max_retries);
                Ok(AnyProvider::Ollama(provider))
            }
            ProviderKind::Groq => {
                let key = api_key.ok_or_else(|| {
                    CliError::Config(format!(
                        "Groq needs an API key: pass --api-key or set {}",
                        ecotab_llm::groq::API_KEY_ENV
                    ))
                })?;
                let mut provider = GroqProvider::new(key)?.with_max_retries(settings.max_retries);
                if let Some(endpoint) = &settings.endpoint {
                    provider = provider.with_endpoint(endpoint.clone());
                }
                if let Some(model) = &settings.model {
                    provider = provider.with_model(model.clone());
                }
                Ok(AnyProvider::Groq(provider))
            }
        }
    }
}

impl LlmProvider for AnyProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> std::result::Result<String, Self::Error> {
        match self {
            AnyProvider::Mock(p) => p.generate(prompt),
            AnyProvider::Ollama(p) => LlmProvider::generate(p, prompt),
            AnyProvider::Groq(p) => LlmProvider::generate(p, prompt),
        }
    }

    fn model_name(&self) -> &str {
        match self {
            AnyProvider::Mock(p) => p.model_name(),
            AnyProvider::Ollama(p) => p.model_name(),
            AnyProvider::Groq(p) => p.model_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_provider_from_settings() {
        let settings = ProviderSettings {
            kind: ProviderKind::Mock,
            mock_response: Some("PIB|4%|2025|phrase".to_string()),
            ..ProviderSettings::default()
        };
        let provider = AnyProvider::from_settings(&settings, None).unwrap();
        assert_eq!(provider.model_name(), "mock");
        assert_eq!(provider.generate("x").unwrap(), "PIB|4%|2025|phrase");
    }

    #[test]
    fn test_ollama_defaults() {
        let settings = ProviderSettings {
            kind: ProviderKind::Ollama,
            ..ProviderSettings::default()
        };
        let provider = AnyProvider::from_settings(&settings, None).unwrap();
        assert_eq!(provider.model_name(), DEFAULT_OLLAMA_MODEL);
    }

    #[test]
    fn test_groq_requires_key() {
        let settings = ProviderSettings::default();
        let result = AnyProvider::from_settings(&settings, None);
        assert!(matches!(result, Err(CliError::Config(_))));
    }

    #[test]
    fn test_groq_model_override() {
        let settings = ProviderSettings {
            model: Some("llama-3.1-8b-instant".to_string()),
            ..ProviderSettings::default()
        };
        let provider = AnyProvider::from_settings(&settings, Some("gsk_test")).unwrap();
        assert_eq!(provider.model_name(), "llama-3.1-8b-instant");
    }
}
