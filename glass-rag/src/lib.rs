//! Knowledge-grounded answering for the glass-fitting assistant.
//!
//! A question goes through three tiers:
//!
//! 1. [`DirectAnswerMatcher`]: greetings, thanks and catalog-wide questions get
//!    a canned answer rendered from the store.
//! 2. [`score`] picks the top two services/categories by keyword overlap,
//!    [`context::build_within`] renders them with the always-on business facts
//!    and one [`TextGenerator`] call formats the answer.
//! 3. When generation is unusable, a template built from the top service (or
//!    a plain "please call" message) is returned instead.
//!
//! Public entry point: [`Assistant::process_question`]. It never fails.
//!
//! # Example
//! ```no_run
//! # use std::sync::Arc;
//! # use glass_rag::{Assistant, AssistantConfig, KnowledgeStore};
//! # use llm_service::{OllamaService, config::default_config::config_ollama_assistant};
//! # #[tokio::main] async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ollama = OllamaService::new(config_ollama_assistant()?)?;
//! let assistant = Assistant::new(
//!     KnowledgeStore::builtin(),
//!     Arc::new(ollama),
//!     AssistantConfig::from_env()?,
//! )?;
//! let r = assistant.process_question("How much does a shower door cost?").await;
//! println!("[{:?}] {}", r.source, r.answer);
//! # Ok(()) }
//! ```

mod answer;
mod cfg;
pub mod context;
mod direct;
mod error;
mod knowledge;
mod orchestrator;
mod scorer;
mod suggestions;
mod widget;

pub use answer::{AnswerResult, Confidence, Provenance};
pub use cfg::AssistantConfig;
pub use direct::DirectAnswerMatcher;
pub use error::AssistantError;
pub use knowledge::{BusinessFacts, CategoryEntry, ContactLinks, KnowledgeEntry, KnowledgeStore};
pub use orchestrator::Assistant;
pub use scorer::{Match, MatchTarget, TOP_N, score};
pub use suggestions::{MAX_RELATED, RELATED_CANDIDATES, SUGGESTIONS, related_questions};
pub use widget::{Submission, WidgetSession};

pub use llm_service::TextGenerator;
