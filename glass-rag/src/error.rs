//! Typed error for the assistant core.
//!
//! Only construction and configuration can fail; answering a question never
//! returns an error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    /// A direct-answer pattern did not compile.
    #[error("invalid direct-answer rule: {0}")]
    Rule(#[from] regex::Error),

    /// Configuration or generation-client setup failed.
    #[error(transparent)]
    Llm(#[from] llm_service::AiLlmError),
}
