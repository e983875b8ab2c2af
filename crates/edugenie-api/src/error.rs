use thiserror::Error;

/// Tagged error taxonomy for the completion pipeline.
///
/// Callers pattern-match on the variant instead of re-inspecting status
/// codes: `Configuration` is surfaced verbatim as a setup problem,
/// `QuotaExhausted` and `ModelNotFound` are absorbed into the local fallback
/// response, and `Provider` propagates with its detail string intact.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("provider quota or rate limit exhausted")]
    QuotaExhausted,

    #[error("model '{0}' is not available at the provider")]
    ModelNotFound(String),

    #[error("completion request failed: {0}")]
    Provider(String),
}

impl CompletionError {
    /// Classify a non-success provider reply into an error variant.
    ///
    /// HTTP 402/429 and the Gemini `RESOURCE_EXHAUSTED` marker mean quota;
    /// HTTP 404 and the `NOT_FOUND` marker mean the model does not exist.
    /// Everything else keeps the status and body for the caller to render.
    pub fn classify(status: u16, body: &str, model: &str) -> Self {
        if status == 402 || status == 429 || body.contains("RESOURCE_EXHAUSTED") {
            return CompletionError::QuotaExhausted;
        }
        if status == 404 || body.contains("NOT_FOUND") {
            return CompletionError::ModelNotFound(model.to_string());
        }
        CompletionError::Provider(format!("HTTP {}: {}", status, body))
    }
}
