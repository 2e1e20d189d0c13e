use std::sync::Arc;

use axum::http::HeaderValue;
use glass_rag::{Assistant, AssistantConfig, KnowledgeStore, TextGenerator};
use llm_service::{
    HealthService, LlmModelConfig, OllamaService,
    config::default_config::config_ollama_assistant_from, error_handler::env_opt_u64,
};
use tracing::{info, warn};

use crate::error_handler::AppResult;

pub const DEFAULT_HEALTH_TIMEOUT_SECS: u64 = 5;

/// Shared state for all HTTP handlers.
pub struct AppState {
    /// Stateless per question; concurrent `/ask` calls never block each other.
    pub assistant: Arc<Assistant>,
    /// Reachability check for the generation backend.
    pub health: HealthService,
    /// Configuration of the LLM used (e.g., Ollama).
    pub llm_config: LlmModelConfig,
    /// Browser origins allowed by CORS; empty allows any origin.
    pub allowed_origins: Vec<HeaderValue>,
}

impl AppState {
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        llm_config: LlmModelConfig,
        assistant_cfg: AssistantConfig,
        health: HealthService,
    ) -> AppResult<Self> {
        let assistant = Assistant::new(KnowledgeStore::builtin(), generator, assistant_cfg)?;
        Ok(Self {
            assistant: Arc::new(assistant),
            health,
            llm_config,
            allowed_origins: Vec::new(),
        })
    }

    /// Restricts CORS to `origins`.
    pub fn with_allowed_origins(mut self, origins: Vec<HeaderValue>) -> Self {
        self.allowed_origins = origins;
        self
    }

    /// Load shared state from environment variables.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let llm_config = config_ollama_assistant_from(&lookup)?;
        let assistant_cfg = AssistantConfig::from_lookup(&lookup)?;
        let health_timeout = env_opt_u64(&lookup, "HEALTH_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_HEALTH_TIMEOUT_SECS);
        let allowed_origins = parse_origins(lookup("ALLOWED_ORIGIN").as_deref());

        info!(
            model = %llm_config.model,
            endpoint = %llm_config.endpoint,
            max_ctx_chars = assistant_cfg.max_ctx_chars,
            answer_timeout_secs = assistant_cfg.answer_timeout.as_secs(),
            cors_origins = allowed_origins.len(),
            "loaded configuration"
        );

        let generator = Arc::new(OllamaService::new(llm_config.clone())?);
        let health = HealthService::new(Some(health_timeout))?;
        Ok(Self::new(generator, llm_config, assistant_cfg, health)?
            .with_allowed_origins(allowed_origins))
    }
}

/// Comma-separated origins; blanks dropped, unusable entries skipped.
pub(crate) fn parse_origins(raw: Option<&str>) -> Vec<HeaderValue> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(origin = o, error = %e, "ignoring ALLOWED_ORIGIN entry");
                None
            }
        })
        .collect()
}
