//! Runtime configuration for the answer pipeline, loaded from environment
//! variables.

use std::time::Duration;

use llm_service::error_handler::env_opt_u64;

use crate::error::AssistantError;

pub const DEFAULT_MAX_CTX_CHARS: usize = 4000;
pub const DEFAULT_ANSWER_TIMEOUT_SECS: u64 = 20;

/// Knobs of the orchestrator. Both have defaults via [`AssistantConfig::from_env`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssistantConfig {
    /// Character budget for the prompt context (`MAX_CTX_CHARS`).
    pub max_ctx_chars: usize,
    /// Client-side bound on one generation call (`ANSWER_TIMEOUT_SECS`).
    pub answer_timeout: Duration,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            max_ctx_chars: DEFAULT_MAX_CTX_CHARS,
            answer_timeout: Duration::from_secs(DEFAULT_ANSWER_TIMEOUT_SECS),
        }
    }
}

impl AssistantConfig {
    /// Build from the process environment.
    ///
    /// # Errors
    /// [`AssistantError::Llm`] wrapping `InvalidNumber` if a variable is set
    /// but not a number.
    pub fn from_env() -> Result<Self, AssistantError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AssistantError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_ctx_chars = env_opt_u64(&lookup, "MAX_CTX_CHARS")?
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_MAX_CTX_CHARS);
        let answer_timeout = env_opt_u64(&lookup, "ANSWER_TIMEOUT_SECS")?
            .unwrap_or(DEFAULT_ANSWER_TIMEOUT_SECS);

        Ok(Self {
            max_ctx_chars,
            answer_timeout: Duration::from_secs(answer_timeout),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = AssistantConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, AssistantConfig::default());
        assert_eq!(cfg.max_ctx_chars, 4000);
        assert_eq!(cfg.answer_timeout, Duration::from_secs(20));
    }

    #[test]
    fn values_are_read_and_validated() {
        let cfg = AssistantConfig::from_lookup(|k| match k {
            "MAX_CTX_CHARS" => Some("1200".into()),
            "ANSWER_TIMEOUT_SECS" => Some("3".into()),
            _ => None,
        })
        .unwrap();
        assert_eq!(cfg.max_ctx_chars, 1200);
        assert_eq!(cfg.answer_timeout, Duration::from_secs(3));

        let err = AssistantConfig::from_lookup(|k| {
            (k == "MAX_CTX_CHARS").then(|| "lots".to_string())
        })
        .unwrap_err();
        assert!(err.to_string().contains("MAX_CTX_CHARS"));
    }
}
