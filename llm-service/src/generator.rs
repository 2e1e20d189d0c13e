use std::{future::Future, pin::Pin};

use crate::error_handler::AiLlmError;
use crate::services::ollama_service::OllamaService;

/// Prompt in, text out.
///
/// The answer pipeline only ever sees this trait, so any local or remote
/// backend (or a test double) can stand in for Ollama. Implementations must
/// not retry on their own: the caller decides what a failure means.
pub trait TextGenerator: Send + Sync {
    /// Runs one non-streaming generation for `prompt`.
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, AiLlmError>> + Send + 'a>>;
}

impl TextGenerator for OllamaService {
    fn generate<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, AiLlmError>> + Send + 'a>> {
        Box::pin(async move {
            OllamaService::generate(self, prompt)
                .await
                .map_err(AiLlmError::from)
        })
    }
}
