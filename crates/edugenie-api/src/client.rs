use std::sync::Arc;

use edugenie_types::Message;

use crate::error::CompletionError;
use crate::fallback::local_fallback_response;
use crate::CompletionProvider;

/// Substituted when the provider answers successfully with empty content
pub const EMPTY_RESPONSE_NOTICE: &str = "I could not generate a response. Please try again.";

/// High-level completion entry point wrapping one provider.
///
/// Quota exhaustion and unknown-model replies degrade into the deterministic
/// local fallback text instead of surfacing as errors; configuration and
/// transport failures propagate unmodified so the caller decides the final
/// presentation. Exactly one provider attempt is made per call.
#[derive(Clone)]
pub struct CompletionClient {
    provider: Arc<dyn CompletionProvider>,
}

impl CompletionClient {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Run one completion over the full ordered message list.
    pub async fn complete(
        &self,
        model: &str,
        messages: &[Message],
        temperature: f32,
    ) -> Result<String, CompletionError> {
        match self
            .provider
            .chat_completion(model, messages, temperature)
            .await
        {
            Ok(content) => {
                if content.trim().is_empty() {
                    Ok(EMPTY_RESPONSE_NOTICE.to_string())
                } else {
                    Ok(content)
                }
            }
            Err(CompletionError::QuotaExhausted) | Err(CompletionError::ModelNotFound(_)) => {
                Ok(local_fallback_response(messages))
            }
            Err(other) => Err(other),
        }
    }
}
