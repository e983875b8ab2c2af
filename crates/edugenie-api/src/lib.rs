//! LLM API clients and communication for edugenie
//!
//! This crate provides the chat-completion request pipeline: two provider
//! clients (OpenRouter's OpenAI-compatible endpoint and native Gemini) behind
//! one `CompletionProvider` trait, the tagged error taxonomy, and the
//! deterministic local fallback used when the provider is out of quota.

use async_trait::async_trait;

use edugenie_types::Message;

mod client;
mod config;
mod error;
mod fallback;
mod gemini_client;
mod openrouter_client;
mod request_logger;

pub use client::{CompletionClient, EMPTY_RESPONSE_NOTICE};
pub use config::{ProviderFactory, ProviderKind, GEMINI_API_URL, OPENROUTER_API_URL};
pub use error::CompletionError;
pub use fallback::local_fallback_response;
pub use gemini_client::{GeminiClient, PREFERRED_GEMINI_MODELS};
pub use openrouter_client::OpenRouterClient;
pub use request_logger::log_request_to_file;

/// One completion backend. Implementations issue a single request per call,
/// map provider-reported failures onto `CompletionError` variants, and never
/// retry on their own.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short provider name for logs and banners
    fn name(&self) -> &'static str;

    /// Issue one completion request with the given model, full ordered
    /// message list, and temperature. Must fail with
    /// `CompletionError::Configuration` before any network activity when the
    /// API key is empty.
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[Message],
        temperature: f32,
    ) -> Result<String, CompletionError>;
}
