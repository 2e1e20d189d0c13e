use crate::config::llm_provider::LlmProvider;

/// Immutable configuration for one generation backend.
///
/// Built once at start-up (see [`crate::config::default_config`]) and moved
/// into the client that uses it; nothing reads model names or endpoints from
/// ambient state after that.
///
/// # Fields
///
/// - `provider`: which backend to use.
/// - `model`: model identifier (e.g. `"tinyllama:latest"`).
/// - `endpoint`: inference server base URL.
/// - `max_tokens`: upper bound on generated tokens (`num_predict`).
/// - `temperature`: sampling temperature; keep it low for grounded answers.
/// - `top_p`: nucleus sampling cutoff.
/// - `stop`: stop sequences that cut run-on generations.
/// - `timeout_secs`: HTTP request timeout.
///
/// # Examples
///
/// ```
/// use llm_service::{LlmModelConfig, LlmProvider};
///
/// let cfg = LlmModelConfig {
///     provider: LlmProvider::Ollama,
///     model: "tinyllama:latest".to_string(),
///     endpoint: "http://localhost:11434".to_string(),
///     max_tokens: Some(150),
///     temperature: Some(0.1),
///     top_p: None,
///     stop: vec!["\n\n".into(), "User:".into(), "Question:".into()],
///     timeout_secs: Some(30),
/// };
/// assert_eq!(cfg.stop.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The LLM provider/backend.
    pub provider: LlmProvider,

    /// Model identifier string.
    pub model: String,

    /// Inference endpoint (local URL).
    pub endpoint: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature (controls creativity).
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Stop sequences; generation halts on the first one produced.
    pub stop: Vec<String>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}
