use async_trait::async_trait;

use edugenie_models::{ChatRequest, ChatResponse};
use edugenie_types::Message;

use crate::config::OPENROUTER_API_URL;
use crate::error::CompletionError;
use crate::request_logger::log_request_to_file;
use crate::CompletionProvider;

/// OpenRouter client using the OpenAI-compatible chat completions endpoint
pub struct OpenRouterClient {
    api_key: String,
    api_url: String,
    client: reqwest::Client,
}

impl OpenRouterClient {
    pub fn new(api_key: String) -> Self {
        Self::with_url(api_key, OPENROUTER_API_URL.to_string())
    }

    pub fn with_url(api_key: String, api_url: String) -> Self {
        Self {
            api_key,
            api_url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenRouterClient {
    fn name(&self) -> &'static str {
        "openrouter"
    }

    async fn chat_completion(
        &self,
        model: &str,
        messages: &[Message],
        temperature: f32,
    ) -> Result<String, CompletionError> {
        if self.api_key.trim().is_empty() {
            return Err(CompletionError::Configuration(
                "OPENROUTER_API_KEY is not set".to_string(),
            ));
        }

        let request = ChatRequest::new(model, temperature, messages.to_vec());

        // Log request to file for persistent debugging
        if let Ok(body) = serde_json::to_value(&request) {
            let _ = log_request_to_file(&self.api_url, &body, model, &self.api_key);
        }

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Provider(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Provider(e.to_string()))?;

        if !status.is_success() {
            return Err(CompletionError::classify(status.as_u16(), &body, model));
        }

        let chat_response: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::Provider(format!("unparseable response: {}", e)))?;

        Ok(chat_response.first_content().unwrap_or_default())
    }
}
