//! Reachability check for the Ollama backend behind `/health`.
//!
//! One request: `GET {endpoint}/api/tags`, then a best-effort lookup of the
//! configured model among the installed tags. [`HealthService::check`] folds
//! every failure into a [`HealthStatus`] with `ok = false`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::llm_model_config::LlmModelConfig;
use crate::error_handler::{AiLlmError, HealthError, HttpError, make_snippet};

/// Snapshot returned to `/health` callers.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub provider: String,
    pub endpoint: String,
    pub model: String,
    pub ok: bool,
    /// Round trip of the tags request; `0` when nothing was sent.
    pub latency_ms: u128,
    pub message: String,
}

/// `/api/tags` payload; only model names matter here.
#[derive(Deserialize)]
struct Tags {
    #[serde(default)]
    models: Option<Vec<Tag>>,
}

#[derive(Deserialize)]
struct Tag {
    name: String,
}

/// What the tags request told us, before it becomes a [`HealthStatus`].
enum TagsOutcome {
    ModelPresent,
    ModelMissing,
    /// 2xx, but the body had no usable model list.
    Reachable(String),
}

pub struct HealthService {
    client: reqwest::Client,
    max_timeout: Duration,
}

impl HealthService {
    /// `timeout_secs` caps every check (default 10s).
    ///
    /// # Errors
    /// [`AiLlmError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(timeout_secs: Option<u64>) -> Result<Self, AiLlmError> {
        let max_timeout = Duration::from_secs(timeout_secs.unwrap_or(10));
        let client = reqwest::Client::builder().timeout(max_timeout).build()?;
        info!(timeout_secs = max_timeout.as_secs(), "health check ready");
        Ok(Self {
            client,
            max_timeout,
        })
    }

    /// Checks the backend described by `cfg`. Never fails.
    pub async fn check(&self, cfg: &LlmModelConfig) -> HealthStatus {
        let started = Instant::now();
        let (ok, message) = match self.fetch_tags(cfg).await {
            Ok(TagsOutcome::ModelPresent) => (true, "model is available".to_string()),
            Ok(TagsOutcome::ModelMissing) => {
                (false, format!("model `{}` is not installed", cfg.model))
            }
            Ok(TagsOutcome::Reachable(note)) => (true, note),
            Err(AiLlmError::Health(e @ HealthError::InvalidEndpoint(_))) => {
                warn!(error = %e, "health check skipped");
                return status(cfg, false, 0, e.to_string());
            }
            Err(e) => (false, e.to_string()),
        };
        let latency_ms = started.elapsed().as_millis();

        if ok {
            debug!(endpoint = %cfg.endpoint, latency_ms, %message, "backend healthy");
        } else {
            warn!(endpoint = %cfg.endpoint, latency_ms, %message, "backend unhealthy");
        }
        status(cfg, ok, latency_ms, message)
    }

    async fn fetch_tags(&self, cfg: &LlmModelConfig) -> Result<TagsOutcome, AiLlmError> {
        let base = cfg.endpoint.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(HealthError::InvalidEndpoint(cfg.endpoint.clone()).into());
        }
        let url = format!("{}/api/tags", base.trim_end_matches('/'));
        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .map_or(self.max_timeout, |t| t.min(self.max_timeout));

        let resp = self.client.get(&url).timeout(timeout).send().await?;
        let code = resp.status();
        if !code.is_success() {
            let snippet = make_snippet(&resp.text().await.unwrap_or_default());
            return Err(HealthError::HttpStatus(HttpError {
                status: code,
                url,
                snippet,
            })
            .into());
        }

        Ok(match resp.json::<Tags>().await {
            Ok(Tags {
                models: Some(models),
            }) if models.iter().any(|m| m.name == cfg.model) => TagsOutcome::ModelPresent,
            Ok(Tags { models: Some(_) }) => TagsOutcome::ModelMissing,
            Ok(Tags { models: None }) => TagsOutcome::Reachable("reachable; no model list".into()),
            Err(e) => TagsOutcome::Reachable(format!("reachable; unreadable model list: {e}")),
        })
    }
}

fn status(cfg: &LlmModelConfig, ok: bool, latency_ms: u128, message: String) -> HealthStatus {
    HealthStatus {
        provider: format!("{:?}", cfg.provider),
        endpoint: cfg.endpoint.clone(),
        model: cfg.model.clone(),
        ok,
        latency_ms,
        message,
    }
}
