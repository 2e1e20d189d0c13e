//! Default generation config loaded from environment variables.
//!
//! The assistant runs against a small local model, so every knob has a
//! default tuned for short, grounded answers: low temperature, a tight token
//! budget and stop sequences that cut the model off before it starts a new
//! turn on its own.
//!
//! # Environment variables
//!
//! - `LLM_KIND`         = provider kind (default `ollama`)
//! - `OLLAMA_URL` or `OLLAMA_PORT` = endpoint (default `http://localhost:11434`)
//! - `OLLAMA_MODEL`     = model identifier (default `tinyllama:latest`)
//! - `LLM_MAX_TOKENS`   = `num_predict` (default `150`)
//! - `LLM_TEMPERATURE`  = sampling temperature, `0.0..=2.0` (default `0.1`)
//! - `LLM_STOP`         = `|`-separated stop sequences, `\n` escapes allowed
//! - `LLM_TIMEOUT_SECS` = HTTP timeout (default `30`)

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{
        AiLlmError, ConfigError, env_opt_f32, env_opt_string, env_opt_u32, env_opt_u64,
        validate_http_endpoint, validate_range_f32, validate_stop_sequences,
    },
};

/// Endpoint used when neither `OLLAMA_URL` nor `OLLAMA_PORT` is set.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
/// Small model with minimal general-knowledge exposure.
pub const DEFAULT_MODEL: &str = "tinyllama:latest";
pub const DEFAULT_MAX_TOKENS: u32 = 150;
pub const DEFAULT_TEMPERATURE: f32 = 0.1;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Blank line, or the model inventing the next turn.
pub const DEFAULT_STOP: [&str; 3] = ["\n\n", "User:", "Question:"];

/// Builds the assistant's generation config from the process environment.
///
/// # Errors
/// Any [`ConfigError`] raised while parsing or validating the variables.
pub fn config_ollama_assistant() -> Result<LlmModelConfig, AiLlmError> {
    config_ollama_assistant_from(|k| std::env::var(k).ok())
}

/// Same as [`config_ollama_assistant`] but reads values through `lookup`.
pub fn config_ollama_assistant_from<F>(lookup: F) -> Result<LlmModelConfig, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    let provider = match env_opt_string(&lookup, "LLM_KIND") {
        Some(kind) => kind.parse::<LlmProvider>()?,
        None => LlmProvider::Ollama,
    };

    let endpoint = ollama_endpoint(&lookup)?;
    let model = env_opt_string(&lookup, "OLLAMA_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into());

    let max_tokens = env_opt_u32(&lookup, "LLM_MAX_TOKENS")?.unwrap_or(DEFAULT_MAX_TOKENS);
    let temperature = env_opt_f32(&lookup, "LLM_TEMPERATURE")?.unwrap_or(DEFAULT_TEMPERATURE);
    validate_range_f32("temperature", temperature, 0.0, 2.0)?;

    let stop = match env_opt_string(&lookup, "LLM_STOP") {
        Some(raw) => parse_stop_list(&raw),
        None => DEFAULT_STOP.iter().map(|s| s.to_string()).collect(),
    };
    validate_stop_sequences(&stop)?;

    let timeout_secs = env_opt_u64(&lookup, "LLM_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);

    Ok(LlmModelConfig {
        provider,
        model,
        endpoint,
        max_tokens: Some(max_tokens),
        temperature: Some(temperature),
        top_p: None,
        stop,
        timeout_secs: Some(timeout_secs),
    })
}

/// Resolves the Ollama endpoint.
///
/// Precedence:
/// 1. `OLLAMA_URL` if present and non-empty
/// 2. `OLLAMA_PORT` → `http://localhost:{port}`
/// 3. [`DEFAULT_ENDPOINT`]
fn ollama_endpoint<F>(lookup: &F) -> Result<String, AiLlmError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = env_opt_string(lookup, "OLLAMA_URL") {
        let url = url.trim().to_string();
        validate_http_endpoint("OLLAMA_URL", &url)?;
        return Ok(url);
    }
    if let Some(port) = env_opt_string(lookup, "OLLAMA_PORT") {
        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidNumber {
                var: "OLLAMA_PORT",
                reason: "expected u16 (1..=65535)",
            })?;
        return Ok(format!("http://localhost:{port}"));
    }
    Ok(DEFAULT_ENDPOINT.to_string())
}

/// Splits `a|b|c`, turning literal `\n` into newlines.
fn parse_stop_list(raw: &str) -> Vec<String> {
    raw.split('|').map(|s| s.replace("\\n", "\n")).collect()
}
