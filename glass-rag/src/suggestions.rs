//! Starter and follow-up questions offered next to an answer.

use rand::Rng;
use rand::seq::SliceRandom;

/// Shown before the first question.
pub const SUGGESTIONS: [&str; 6] = [
    "What glass fitting services do you offer?",
    "How much does window installation cost?",
    "Do you provide emergency glass repair?",
    "What areas do you serve in Tricity?",
    "How can I get a free quote?",
    "Do you install shower doors and mirrors?",
];

/// Pool for follow-ups after an answer.
pub const RELATED_CANDIDATES: [&str; 6] = [
    "What types of glass do you install?",
    "Do you offer warranty on installations?",
    "How long does installation take?",
    "Do you provide free measurements?",
    "What are your service charges?",
    "Do you work on weekends?",
];

pub const MAX_RELATED: usize = 3;

/// Up to [`MAX_RELATED`] follow-ups for `current`, in random order.
///
/// A candidate is skipped when its first word already occurs in the current
/// question (case-insensitive substring).
///
/// # Example
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// let picked = glass_rag::related_questions("Do you fit mirrors?", &mut StdRng::seed_from_u64(1));
/// assert!(picked.iter().all(|q| !q.starts_with("Do ")));
/// ```
pub fn related_questions<R>(current: &str, rng: &mut R) -> Vec<&'static str>
where
    R: Rng + ?Sized,
{
    let current = current.to_lowercase();
    let mut pool: Vec<&'static str> = RELATED_CANDIDATES
        .iter()
        .copied()
        .filter(|q| {
            let first = q.split(' ').next().unwrap_or_default().to_lowercase();
            !current.contains(&first)
        })
        .collect();
    pool.shuffle(rng);
    pool.truncate(MAX_RELATED);
    pool
}
