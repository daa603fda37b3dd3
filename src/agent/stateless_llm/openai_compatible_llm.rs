use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use super::stateless_llm_interface::{Message, StatelessLLMInterface};
use crate::error::TranslateError;

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// OpenAI compatible LLM implementation
/// Groq, Ollama and OpenAI itself all speak this protocol
pub struct OpenAICompatibleLLM {
    client: Client,
    model: String,
    url: String,
    api_key: Option<String>,
    temperature: f32,
}

impl OpenAICompatibleLLM {
    pub fn new(
        model: String,
        base_url: String,
        api_key: Option<String>,
        temperature: f32,
        timeout: Duration,
    ) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TranslateError::configuration(format!("failed to build HTTP client: {}", e)))?;
        let url = format!("{}{}", base_url.trim_end_matches('/'), CHAT_COMPLETIONS_PATH);

        info!("Initialized OpenAICompatibleLLM: model={}, url={}", model, url);

        Ok(Self {
            client,
            model,
            url,
            api_key,
            temperature,
        })
    }

    async fn call_model(&self, messages: &[Message]) -> Result<ChatCompletionResponse, TranslateError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
            stream: false,
        };

        let mut request = self.client.post(&self.url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("Model provider returned {}: {}", status, detail);
            return Err(TranslateError::upstream(format!(
                "model provider returned {}: {}",
                status,
                truncate(&detail, 300)
            )));
        }

        response
            .json::<ChatCompletionResponse>()
            .await
            .map_err(|e| TranslateError::upstream(format!("malformed completion response: {}", e)))
    }
}

/// Pulls the text of the first choice, as-is.
fn extract_text(response: ChatCompletionResponse) -> Result<String, TranslateError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| TranslateError::upstream("model returned an empty completion"))
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max_chars).collect();
        cut.push_str("...");
        cut
    }
}

#[async_trait]
impl StatelessLLMInterface for OpenAICompatibleLLM {
    async fn chat_completion(&self, messages: &[Message]) -> Result<String, TranslateError> {
        debug!("Sending {} messages to {}", messages.len(), self.url);
        let response = self.call_model(messages).await?;
        extract_text(response)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
