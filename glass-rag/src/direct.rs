//! Pre-written answers for small talk and catalog-wide questions.
//!
//! Rules are tried in order and the first hit wins. Answer texts are
//! rendered from the knowledge store once, at construction.

use regex::{Regex, RegexBuilder};

use crate::error::AssistantError;
use crate::knowledge::KnowledgeStore;

struct Rule {
    name: &'static str,
    pattern: Regex,
    answer: String,
}

/// Ordered pattern → answer table.
pub struct DirectAnswerMatcher {
    rules: Vec<Rule>,
}

impl DirectAnswerMatcher {
    /// Compiles the rule table against `store`.
    ///
    /// # Errors
    /// [`AssistantError::Rule`] if a pattern fails to compile.
    pub fn new(store: &KnowledgeStore) -> Result<Self, AssistantError> {
        let facts = &store.facts;

        let titles: Vec<&str> = store.services.iter().map(|s| s.title.as_str()).collect();
        let prices: Vec<String> = store
            .services
            .iter()
            .map(|s| format!("{}: {}", s.title, s.price))
            .collect();

        let table = [
            (
                "greeting",
                r"(hello|hi|hey|namaste)",
                format!(
                    "Hello! Welcome to {}. How can I help you with glass fitting services today?",
                    facts.name
                ),
            ),
            (
                "thanks",
                r"(thank|thanks|dhanyavad)",
                format!(
                    "You're welcome! Feel free to call us at {} anytime. Have a great day!",
                    facts.phone
                ),
            ),
            (
                "farewell",
                r"(bye|goodbye|see you)",
                format!(
                    "Goodbye! Contact us at {} when you're ready. We're here to help!",
                    facts.phone
                ),
            ),
            (
                "services",
                r"(services|what do you do|offer)",
                format!(
                    "We offer: {}. All with {} of experience. Call {} for details.",
                    titles.join(", "),
                    facts.experience,
                    facts.phone
                ),
            ),
            (
                "price-list",
                r"(price|cost|rate).*all|list of price",
                format!(
                    "Our pricing: {}. {}. Call {}.",
                    prices.join("; "),
                    facts.policy_quote,
                    facts.phone
                ),
            ),
        ];

        let rules = table
            .into_iter()
            .map(|(name, pattern, answer)| -> Result<Rule, AssistantError> {
                let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
                Ok(Rule {
                    name,
                    pattern,
                    answer,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules })
    }

    /// Returns the canned answer for `query`, if any rule matches.
    pub fn try_direct(&self, query: &str) -> Option<&str> {
        self.find(query).map(|r| r.answer.as_str())
    }

    /// Name of the rule that would answer `query`.
    pub fn rule_name(&self, query: &str) -> Option<&'static str> {
        self.find(query).map(|r| r.name)
    }

    fn find(&self, query: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.pattern.is_match(query))
    }
}
