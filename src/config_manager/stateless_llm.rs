use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config_manager::utils::is_unset_secret;
use crate::error::TranslateError;

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const OLLAMA_BASE_URL: &str = "http://localhost:11434/v1";
pub const DEFAULT_MODEL: &str = "Gemma2-9b-It";

/// Supported chat-completion providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LLMProvider {
    GroqLlm,
    OpenaiCompatibleLlm,
    OllamaLlm,
}

impl LLMProvider {
    /// Environment variable consulted for the credential, if the provider takes one
    pub fn api_key_env(&self) -> Option<&'static str> {
        match self {
            LLMProvider::GroqLlm => Some("GROQ_API_KEY"),
            LLMProvider::OpenaiCompatibleLlm => Some("OPENAI_API_KEY"),
            LLMProvider::OllamaLlm => None,
        }
    }

    pub fn requires_api_key(&self) -> bool {
        matches!(self, LLMProvider::GroqLlm)
    }

    pub fn default_base_url(&self) -> Option<&'static str> {
        match self {
            LLMProvider::GroqLlm => Some(GROQ_BASE_URL),
            LLMProvider::OllamaLlm => Some(OLLAMA_BASE_URL),
            LLMProvider::OpenaiCompatibleLlm => None,
        }
    }
}

/// Configuration for the translation model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(rename = "llm_provider")]
    #[serde(default = "default_provider")]
    pub llm_provider: LLMProvider,

    #[serde(rename = "base_url")]
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(rename = "llm_api_key")]
    #[serde(default, skip_serializing)]
    pub llm_api_key: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(rename = "timeout_secs")]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> LLMProvider {
    LLMProvider::GroqLlm
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_temperature() -> f32 {
    1.0
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_provider(),
            base_url: None,
            model: default_model(),
            llm_api_key: None,
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl TranslatorConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn resolve_base_url(&self) -> Result<String, TranslateError> {
        self.base_url
            .as_deref()
            .filter(|url| !is_unset_secret(url))
            .or_else(|| self.llm_provider.default_base_url())
            .map(|url| url.to_string())
            .ok_or_else(|| {
                TranslateError::configuration(format!(
                    "base_url is required for provider {:?}",
                    self.llm_provider
                ))
            })
    }

    /// The provider's environment variable wins over the file value.
    ///
    /// Empty values and placeholders that were never substituted count as
    /// missing. Returns `Ok(None)` only for providers that work without a key.
    pub fn resolve_api_key<F>(&self, env_lookup: F) -> Result<Option<String>, TranslateError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let from_env = self
            .llm_provider
            .api_key_env()
            .and_then(|name| env_lookup(name))
            .filter(|key| !is_unset_secret(key));
        let from_file = self
            .llm_api_key
            .clone()
            .filter(|key| !is_unset_secret(key));

        match from_env.or(from_file) {
            Some(key) => Ok(Some(key.trim().to_string())),
            None if self.llm_provider.requires_api_key() => {
                let var = self.llm_provider.api_key_env().unwrap_or("llm_api_key");
                Err(TranslateError::configuration(format!(
                    "{} is not set. Set it in the environment or in the config file.",
                    var
                )))
            }
            None => Ok(None),
        }
    }
}
