//! Answer pipeline: direct rules, then retrieval plus constrained
//! generation, then templates when generation is unusable.

use std::sync::Arc;

use llm_service::{AiLlmError, TextGenerator};
use tracing::{debug, info, instrument, warn};

use crate::answer::{AnswerResult, Confidence, Provenance};
use crate::cfg::AssistantConfig;
use crate::context;
use crate::direct::DirectAnswerMatcher;
use crate::error::AssistantError;
use crate::knowledge::KnowledgeStore;
use crate::scorer::{Match, score};

/// Question answering over a [`KnowledgeStore`] and a [`TextGenerator`].
///
/// Holds nothing mutable; one instance can serve any number of concurrent
/// questions.
pub struct Assistant {
    store: &'static KnowledgeStore,
    direct: DirectAnswerMatcher,
    generator: Arc<dyn TextGenerator>,
    cfg: AssistantConfig,
}

impl Assistant {
    /// # Errors
    /// [`AssistantError::Rule`] if the direct-answer table does not compile.
    pub fn new(
        store: &'static KnowledgeStore,
        generator: Arc<dyn TextGenerator>,
        cfg: AssistantConfig,
    ) -> Result<Self, AssistantError> {
        let direct = DirectAnswerMatcher::new(store)?;
        Ok(Self {
            store,
            direct,
            generator,
            cfg,
        })
    }

    pub fn store(&self) -> &'static KnowledgeStore {
        self.store
    }

    pub fn config(&self) -> &AssistantConfig {
        &self.cfg
    }

    /// Answers `question`. Never fails: every path yields a non-blank answer
    /// with a provenance tag.
    ///
    /// At most one generation request is issued, and only when the question
    /// is neither a direct-rule hit nor a zero-match query.
    #[instrument(skip_all, fields(question_len = question.len()))]
    pub async fn process_question(&self, question: &str) -> AnswerResult {
        if let Some(answer) = self.direct.try_direct(question) {
            debug!(rule = ?self.direct.rule_name(question), "direct answer");
            return AnswerResult::new(answer, Provenance::Direct, Confidence::High);
        }

        let matches = score(question, self.store);
        if matches.is_empty() {
            info!("no knowledge match; using fallback");
            return self.no_match();
        }
        debug!(
            top = matches[0].label(),
            top_score = matches[0].score,
            matches = matches.len(),
            "retrieved"
        );

        let ctx = context::build_within(&matches, &self.store.facts, self.cfg.max_ctx_chars);
        let prompt = context::build_prompt(&ctx, question);

        match self.generate(&prompt).await {
            Ok(text) if !text.trim().is_empty() => self.constrained(text.trim(), &matches),
            Ok(_) => {
                warn!("generator returned empty output");
                self.degraded(&matches)
            }
            Err(e) => {
                warn!(error = %e, "generation failed");
                self.degraded(&matches)
            }
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, AiLlmError> {
        let limit = self.cfg.answer_timeout;
        match tokio::time::timeout(limit, self.generator.generate(prompt)).await {
            Ok(res) => res,
            Err(_) => Err(AiLlmError::Timeout(limit)),
        }
    }

    fn constrained(&self, text: &str, matches: &[Match<'_>]) -> AnswerResult {
        let phone = &self.store.facts.phone;
        let mut answer = text.to_string();
        if !answer.contains(phone.as_str()) {
            answer.push_str(&format!(" Call {phone} for more details."));
        }
        let labels = matches.iter().map(|m| m.label().to_string()).collect();
        AnswerResult::new(answer, Provenance::AiConstrained, Confidence::Medium)
            .with_context(labels)
    }

    /// Generation was unusable: template from the top service, or a plain
    /// "please call" when the top match is a category.
    fn degraded(&self, matches: &[Match<'_>]) -> AnswerResult {
        let phone = &self.store.facts.phone;
        match matches.first().and_then(Match::service) {
            Some(s) => AnswerResult::new(
                format!(
                    "{}: {}. {}. Time: {}. Call {phone}.",
                    s.title, s.price, s.details, s.timeframe
                ),
                Provenance::TemplateFallback,
                Confidence::Medium,
            ),
            None => AnswerResult::new(
                format!("I'm having trouble processing that. Please call us directly at {phone}."),
                Provenance::Error,
                Confidence::Low,
            ),
        }
    }

    fn no_match(&self) -> AnswerResult {
        let facts = &self.store.facts;
        AnswerResult::new(
            format!(
                "I don't have specific information about that. Please call {} at {} or WhatsApp us for assistance.",
                facts.short_name, facts.phone
            ),
            Provenance::Fallback,
            Confidence::Low,
        )
    }
}
