use async_trait::async_trait;

use edugenie_models::gemini::{GenerateContentRequest, GenerateContentResponse};
use edugenie_types::{Message, Role};

use crate::config::GEMINI_API_URL;
use crate::error::CompletionError;
use crate::request_logger::log_request_to_file;
use crate::CompletionProvider;

/// Known-good `generateContent` models, best first. `resolve_model` picks
/// the first entry when no usable Gemini model is configured; no further
/// candidates are attempted, since each call makes exactly one request.
pub const PREFERRED_GEMINI_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.0-flash",
    "gemini-flash-latest",
    "gemini-pro-latest",
];

/// Native Gemini client exposed through the same chat-completion contract as
/// the OpenAI-compatible backends.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_url(api_key, GEMINI_API_URL.to_string())
    }

    pub fn with_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Gemini model identifiers carry no vendor prefix; configured defaults
    /// aimed at OpenAI-compatible backends map onto the preferred list.
    fn resolve_model<'a>(&self, requested: &'a str) -> &'a str {
        if requested.is_empty() || requested.contains('/') {
            PREFERRED_GEMINI_MODELS[0]
        } else {
            requested
        }
    }
}

/// Flatten role-tagged chat history into a single structured Gemini prompt,
/// preserving session context and system instructions.
pub(crate) fn build_gemini_prompt(messages: &[Message]) -> String {
    let mut system_instructions: Vec<&str> = Vec::new();
    let mut transcript: Vec<String> = Vec::new();

    for message in messages {
        let content = message.content.trim();
        if content.is_empty() {
            continue;
        }
        match message.role {
            Role::System => system_instructions.push(content),
            Role::Assistant => transcript.push(format!("Assistant: {}", content)),
            Role::User => transcript.push(format!("User: {}", content)),
        }
    }

    let mut sections: Vec<String> = Vec::new();
    if !system_instructions.is_empty() {
        sections.push(format!(
            "System Instructions:\n{}",
            system_instructions.join("\n")
        ));
    }
    if !transcript.is_empty() {
        sections.push(format!("Conversation:\n{}", transcript.join("\n")));
    }
    sections.push("Assistant:".to_string());
    sections.join("\n\n")
}

#[async_trait]
impl CompletionProvider for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn chat_completion(
        &self,
        model: &str,
        messages: &[Message],
        temperature: f32,
    ) -> Result<String, CompletionError> {
        if self.api_key.trim().is_empty() {
            return Err(CompletionError::Configuration(
                "GEMINI_API_KEY is not set".to_string(),
            ));
        }

        let model = self.resolve_model(model);
        let prompt = build_gemini_prompt(messages);
        let request = GenerateContentRequest::from_prompt(prompt, temperature);

        let endpoint = format!("{}/models/{}:generateContent", self.base_url, model);

        // Log request to file for persistent debugging; the key travels in a
        // query parameter, so the logged URL stays key-free.
        if let Ok(body) = serde_json::to_value(&request) {
            let _ = log_request_to_file(&endpoint, &body, model, &self.api_key);
        }

        let response = self
            .client
            .post(&endpoint)
            .query(&[("key", self.api_key.as_str())])
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

        let content_response: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| CompletionError::Provider(format!("unparseable response: {}", e)))?;

        Ok(content_response.first_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_sections_in_order() {
        let messages = vec![
            Message::system("Be concise."),
            Message::user("What is osmosis?"),
            Message::assistant("Diffusion of water."),
            Message::user("Give an example."),
        ];
        let prompt = build_gemini_prompt(&messages);
        assert_eq!(
            prompt,
            "System Instructions:\nBe concise.\n\n\
             Conversation:\nUser: What is osmosis?\nAssistant: Diffusion of water.\nUser: Give an example.\n\n\
             Assistant:"
        );
    }

    #[test]
    fn test_prompt_skips_empty_contents() {
        let messages = vec![Message::user("  "), Message::user("real question")];
        let prompt = build_gemini_prompt(&messages);
        assert_eq!(prompt, "Conversation:\nUser: real question\n\nAssistant:");
    }

    #[test]
    fn test_prompt_for_empty_history() {
        assert_eq!(build_gemini_prompt(&[]), "Assistant:");
    }

    #[test]
    fn test_model_resolution() {
        let client = GeminiClient::new("key".to_string());
        assert_eq!(client.resolve_model("gemini-2.0-flash"), "gemini-2.0-flash");
        assert_eq!(client.resolve_model(""), "gemini-2.5-flash");
        // vendor-prefixed defaults aimed at OpenRouter get remapped
        assert_eq!(client.resolve_model("openrouter/free"), "gemini-2.5-flash");
    }

    #[tokio::test]
    async fn test_empty_api_key_fails_before_any_request() {
        let client = GeminiClient::new(String::new());
        let err = client
            .chat_completion("gemini-2.5-flash", &[Message::user("hi")], 0.2)
            .await
            .unwrap_err();
        assert!(matches!(err, CompletionError::Configuration(_)));
    }
}
