use serde::Deserialize;

/// Token usage information from API response
#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

/// Chat API response structure (OpenAI-compatible endpoints)
#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl ChatResponse {
    /// Content of the first choice, if any
    pub fn first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

/// Choice structure within chat response
#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
    #[serde(default)]
    pub index: Option<i32>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Message payload within a response choice. Providers occasionally send
/// null content, so it stays optional here.
#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_content() {
        let raw = r#"{
            "choices": [{"message": {"role": "assistant", "content": "answer"}}],
            "model": "openrouter/free"
        }"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_content().as_deref(), Some("answer"));
    }

    #[test]
    fn test_null_content_tolerated() {
        let raw = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_content(), None);
    }

    #[test]
    fn test_empty_choices() {
        let raw = r#"{"choices": []}"#;
        let response: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_content(), None);
    }
}
