//! UI-agnostic chat session: input hygiene and the one-question-at-a-time
//! guard a front end needs around [`Assistant::process_question`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use rand::Rng;
use tracing::debug;

use crate::answer::AnswerResult;
use crate::knowledge::ContactLinks;
use crate::orchestrator::Assistant;
use crate::suggestions::{SUGGESTIONS, related_questions};

/// Outcome of [`WidgetSession::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Answered(AnswerResult),
    /// Another question is still being answered.
    Busy,
    /// Input was blank after trimming.
    Empty,
}

pub struct WidgetSession {
    assistant: Arc<Assistant>,
    in_flight: AtomicBool,
}

/// Clears the in-flight flag even if the submit future is dropped.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl WidgetSession {
    pub fn new(assistant: Arc<Assistant>) -> Self {
        Self {
            assistant,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Trims `text` and answers it, unless it is blank or a previous
    /// submission has not finished yet.
    pub async fn submit(&self, text: &str) -> Submission {
        let question = text.trim();
        if question.is_empty() {
            return Submission::Empty;
        }
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            debug!("submission rejected: answer in flight");
            return Submission::Busy;
        }
        let _guard = InFlight(&self.in_flight);

        Submission::Answered(self.assistant.process_question(question).await)
    }

    pub fn suggestions(&self) -> &'static [&'static str] {
        &SUGGESTIONS
    }

    pub fn related<R: Rng + ?Sized>(&self, question: &str, rng: &mut R) -> Vec<&'static str> {
        related_questions(question, rng)
    }

    pub fn contact_links(&self) -> ContactLinks {
        self.assistant.store().facts.contact_links()
    }
}
