use std::env;

use edugenie_api::ProviderKind;
use edugenie_types::DEFAULT_MODEL;

use crate::cli::Cli;

/// Application settings, resolved once at startup from CLI flags and
/// environment variables. The API key is a secret; it is never printed and
/// only its first characters reach the request log.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
    pub provider: ProviderKind,
}

impl Settings {
    /// Resolve settings with CLI flags taking precedence over environment.
    ///
    /// Provider: `--provider`, then `EDUGENIE_PROVIDER`, then Gemini if
    /// `GEMINI_API_KEY` is set, otherwise OpenRouter.
    /// Key: `--api-key`, then the selected provider's variable.
    /// Model: `--model`, then `EDUGENIE_MODEL`/`OPENROUTER_MODEL`, then the
    /// free-tier default.
    pub fn resolve(cli: &Cli) -> Self {
        let provider = cli
            .provider
            .as_deref()
            .and_then(ProviderKind::from_str)
            .or_else(|| {
                env::var("EDUGENIE_PROVIDER")
                    .ok()
                    .and_then(|s| ProviderKind::from_str(&s))
            })
            .unwrap_or_else(|| {
                if env::var("GEMINI_API_KEY").is_ok() {
                    ProviderKind::Gemini
                } else {
                    ProviderKind::OpenRouter
                }
            });

        let api_key = cli
            .api_key
            .clone()
            .or_else(|| match provider {
                ProviderKind::OpenRouter => env::var("OPENROUTER_API_KEY").ok(),
                ProviderKind::Gemini => env::var("GEMINI_API_KEY").ok(),
            })
            .unwrap_or_default()
            .trim()
            .to_string();

        let model = cli
            .model
            .clone()
            .or_else(|| env::var("EDUGENIE_MODEL").ok())
            .or_else(|| env::var("OPENROUTER_MODEL").ok())
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self {
            api_key,
            model,
            provider,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(provider: Option<&str>, api_key: Option<&str>, model: Option<&str>) -> Cli {
        Cli {
            command: None,
            model: model.map(String::from),
            provider: provider.map(String::from),
            api_key: api_key.map(String::from),
            simple: false,
        }
    }

    // Flag-only inputs keep these tests independent of the process
    // environment: the resolution chain stops at the CLI value.

    #[test]
    fn test_cli_flags_take_precedence() {
        let settings = Settings::resolve(&cli(
            Some("gemini"),
            Some("k-123"),
            Some("gemini-2.0-flash"),
        ));
        assert_eq!(settings.provider, ProviderKind::Gemini);
        assert_eq!(settings.api_key, "k-123");
        assert_eq!(settings.model, "gemini-2.0-flash");
    }

    #[test]
    fn test_blank_model_flag_falls_back_to_default() {
        let settings = Settings::resolve(&cli(Some("openrouter"), Some("k"), Some("   ")));
        assert_eq!(settings.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_api_key_is_trimmed() {
        let settings = Settings::resolve(&cli(Some("openrouter"), Some("  k-123  "), Some("m")));
        assert_eq!(settings.api_key, "k-123");
    }
}
