use std::str::FromStr;

use crate::error_handler::ConfigError;

/// Backend used for text generation.
///
/// Only a local Ollama runtime is wired today. The assistant talks to the
/// backend exclusively through [`crate::TextGenerator`], so another
/// provider is a new variant plus a new service, nothing more.
///
/// # Examples
///
/// ```
/// use llm_service::LlmProvider;
///
/// let p: LlmProvider = "ollama".parse().unwrap();
/// assert_eq!(p, LlmProvider::Ollama);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Local Ollama runtime for on-device inference.
    Ollama,
}

impl FromStr for LlmProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ollama" => Ok(LlmProvider::Ollama),
            other => Err(ConfigError::UnsupportedProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(" Ollama ".parse::<LlmProvider>().unwrap(), LlmProvider::Ollama);
    }

    #[test]
    fn rejects_unknown_provider() {
        let err = "chatgpt".parse::<LlmProvider>().unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedProvider(ref p) if p == "chatgpt"));
    }
}
