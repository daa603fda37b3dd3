use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::agent::stateless_llm::StatelessLLMInterface;
use crate::error::TranslateError;
use crate::translate::interface::{TranslateRequest, TranslateResponse};
use crate::translate::prompt::build_prompt;

/// Rejects input that is empty once surrounding whitespace is ignored.
pub fn validate(request: &TranslateRequest) -> Result<(), TranslateError> {
    if request.text.trim().is_empty() {
        return Err(TranslateError::validation("Please enter some text."));
    }
    Ok(())
}

/// Turns a request into a translation through the configured model.
///
/// Holds nothing but the model client, so it can be shared across requests
/// behind an `Arc`. Every call goes to the model; nothing is cached and
/// failures are returned as-is, without retrying.
pub struct TranslationHandler {
    llm: Arc<dyn StatelessLLMInterface>,
}

impl TranslationHandler {
    pub fn new(llm: Arc<dyn StatelessLLMInterface>) -> Self {
        Self { llm }
    }

    pub fn model(&self) -> &str {
        self.llm.model()
    }

    pub async fn translate(&self, request: TranslateRequest) -> Result<TranslateResponse, TranslateError> {
        let request_id = Uuid::new_v4();
        let span = info_span!(
            "translate",
            %request_id,
            language = %request.target_language,
            chars = request.text.chars().count()
        );

        async move {
            if let Err(e) = validate(&request) {
                warn!("Rejected translation request: {}", e);
                return Err(e);
            }

            let messages = build_prompt(&request);
            let translated_text = match self.llm.chat_completion(&messages).await {
                Ok(text) => text,
                Err(e) => {
                    error!("Translation failed: {}", e);
                    return Err(e);
                }
            };

            info!("Translation complete");
            Ok(TranslateResponse {
                original_text: request.text,
                target_language: request.target_language.to_string(),
                translated_text,
                translated_at: Utc::now(),
            })
        }
        .instrument(span)
        .await
    }
}
