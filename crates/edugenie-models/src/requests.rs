use edugenie_types::Message;
use serde::Serialize;

/// Chat API request structure (OpenAI-compatible endpoints)
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub temperature: f32,
    pub messages: Vec<Message>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, temperature: f32, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            temperature,
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_shape() {
        let request = ChatRequest::new("openrouter/free", 0.2, vec![Message::user("hello")]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "openrouter/free");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["messages"][0]["content"], "hello");
    }
}
