use std::env;
use std::sync::Arc;

use crate::gemini_client::GeminiClient;
use crate::openrouter_client::OpenRouterClient;
use crate::CompletionProvider;

/// Default OpenRouter chat completions URL
pub const OPENROUTER_API_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Default Gemini API base URL
pub const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Provider backend selected by configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenRouter,
    Gemini,
}

impl ProviderKind {
    /// Parse provider kind from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "openrouter" | "open-router" => Some(Self::OpenRouter),
            "gemini" | "google" => Some(Self::Gemini),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OpenRouter => "openrouter",
            Self::Gemini => "gemini",
        }
    }
}

/// Factory for creating completion providers.
///
/// Both backends implement the same `CompletionProvider` contract; call sites
/// never branch on the vendor.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider for the given backend kind.
    ///
    /// A missing `api_key` falls back to the backend's environment variable;
    /// an empty key is allowed here and rejected at request time so that the
    /// configuration error reaches the user as text, not a panic.
    pub fn create(
        kind: ProviderKind,
        api_key: Option<String>,
        api_url: Option<String>,
    ) -> Arc<dyn CompletionProvider> {
        match kind {
            ProviderKind::OpenRouter => {
                let key = api_key
                    .or_else(|| env::var("OPENROUTER_API_KEY").ok())
                    .unwrap_or_default();
                let url = api_url.unwrap_or_else(|| OPENROUTER_API_URL.to_string());
                Arc::new(OpenRouterClient::with_url(key, url))
            }
            ProviderKind::Gemini => {
                let key = api_key
                    .or_else(|| env::var("GEMINI_API_KEY").ok())
                    .unwrap_or_default();
                let url = api_url.unwrap_or_else(|| GEMINI_API_URL.to_string());
                Arc::new(GeminiClient::with_url(key, url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_kind_parsing() {
        assert_eq!(
            ProviderKind::from_str("OpenRouter"),
            Some(ProviderKind::OpenRouter)
        );
        assert_eq!(ProviderKind::from_str("google"), Some(ProviderKind::Gemini));
        assert_eq!(ProviderKind::from_str("azure"), None);
    }

    #[test]
    fn test_provider_kind_round_trip() {
        for kind in [ProviderKind::OpenRouter, ProviderKind::Gemini] {
            assert_eq!(ProviderKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn test_factory_names_match_kind() {
        let openrouter =
            ProviderFactory::create(ProviderKind::OpenRouter, Some("k".to_string()), None);
        assert_eq!(openrouter.name(), "openrouter");
        let gemini = ProviderFactory::create(ProviderKind::Gemini, Some("k".to_string()), None);
        assert_eq!(gemini.name(), "gemini");
    }
}
