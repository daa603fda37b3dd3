use std::sync::Arc;
use tracing::info;

use crate::agent::stateless_llm::openai_compatible_llm::OpenAICompatibleLLM;
use crate::agent::stateless_llm::StatelessLLMInterface;
use crate::config_manager::TranslatorConfig;
use crate::error::TranslateError;

/// Factory for creating stateless LLM instances
pub struct StatelessLLMFactory;

impl StatelessLLMFactory {
    /// Create an LLM based on the configuration.
    ///
    /// # Arguments
    /// * `config` - Translator section of the app config
    /// * `env_lookup` - Where to look up the provider's API key variable
    ///
    /// Fails with a configuration error when the provider needs a credential
    /// and none is available, so no request can ever go out without one.
    pub fn create_llm<F>(
        config: &TranslatorConfig,
        env_lookup: F,
    ) -> Result<Arc<dyn StatelessLLMInterface>, TranslateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        info!("Initializing LLM: {:?}", config.llm_provider);

        let api_key = config.resolve_api_key(env_lookup)?;
        let base_url = config.resolve_base_url()?;

        Ok(Arc::new(OpenAICompatibleLLM::new(
            config.model.clone(),
            base_url,
            api_key,
            config.temperature,
            config.timeout(),
        )?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_manager::stateless_llm::LLMProvider;

    #[test]
    fn test_missing_key_means_no_client() {
        let result = StatelessLLMFactory::create_llm(&TranslatorConfig::default(), |_| None);
        assert!(matches!(result, Err(TranslateError::Configuration(_))));
    }

    #[test]
    fn test_groq_client_uses_configured_model() {
        let llm = StatelessLLMFactory::create_llm(&TranslatorConfig::default(), |_| {
            Some("gsk_test".to_string())
        })
        .unwrap();
        assert_eq!(llm.model(), "Gemma2-9b-It");
    }

    #[test]
    fn test_ollama_client_without_key() {
        let config = TranslatorConfig {
            llm_provider: LLMProvider::OllamaLlm,
            model: "llama3".to_string(),
            ..Default::default()
        };
        let llm = StatelessLLMFactory::create_llm(&config, |_| None).unwrap();
        assert_eq!(llm.model(), "llama3");
    }
}
