//! Local text-generation client used by the assistant.
//!
//! - [`config`]: immutable [`LlmModelConfig`] plus env-driven constructors.
//! - [`services::ollama_service`]: non-streaming `/api/generate` client.
//! - [`generator`]: the [`TextGenerator`] seam the answer pipeline calls through.
//! - [`health_service`]: resilient `/api/tags` check for `/health`.
//! - [`telemetry`]: library-scoped `tracing` layer.

pub mod config;
pub mod error_handler;
pub mod generator;
pub mod health_service;
pub mod services;
pub mod telemetry;

pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::{AiLlmError, ConfigError, HealthError};
pub use generator::TextGenerator;
pub use health_service::{HealthService, HealthStatus};
pub use services::ollama_service::{OllamaError, OllamaService};
