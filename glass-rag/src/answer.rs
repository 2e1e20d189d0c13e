//! Answer types handed back to callers (HTTP layer, widget session).

use serde::Serialize;

/// Which tier of the pipeline produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    Direct,
    AiConstrained,
    TemplateFallback,
    Fallback,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Final answer with its provenance tag.
///
/// # Example
/// ```
/// use glass_rag::{AnswerResult, Confidence, Provenance};
/// let a = AnswerResult::new("Hi!", Provenance::Direct, Confidence::High);
/// assert!(a.context.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerResult {
    pub answer: String,
    pub source: Provenance,
    pub confidence: Confidence,
    /// Matched service titles and category ids fed to the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<String>>,
}

impl AnswerResult {
    pub fn new(answer: impl Into<String>, source: Provenance, confidence: Confidence) -> Self {
        Self {
            answer: answer.into(),
            source,
            confidence,
            context: None,
        }
    }

    pub fn with_context(mut self, context: Vec<String>) -> Self {
        self.context = Some(context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_serialize_as_wire_strings() {
        let a = AnswerResult::new("x", Provenance::TemplateFallback, Confidence::Medium);
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["source"], "template-fallback");
        assert_eq!(v["confidence"], "medium");
        assert!(v.get("context").is_none());

        let a = AnswerResult::new("y", Provenance::AiConstrained, Confidence::Medium)
            .with_context(vec!["Mirror Installation".into(), "pricing".into()]);
        let v = serde_json::to_value(&a).unwrap();
        assert_eq!(v["source"], "ai-constrained");
        assert_eq!(v["context"][1], "pricing");
    }
}
